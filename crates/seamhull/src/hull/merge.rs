//! Merge two x-separated convex hulls: bridge them with tangents, fold the
//! in-between chains into the interior, and triangulate the seam.

use crate::geom::{Edge, Point};
use crate::polygon::Polygon;
use crate::trace::{Persistence, Trace};

use super::seam::triangulate_seam;
use super::tangent::{lower_tangent, upper_tangent};

/// Which child a chain came from; decides the ring-adjacency direction for
/// the degenerate bridging diagonal.
#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Merge `left` and `right` into a new hull polygon.
///
/// The merged ring keeps `left`'s start vertex as its own start. Ring
/// vertices strictly between the two tangents on either side drop into the
/// interior set; their chains are collected in opposite traversal directions
/// (left forward, right backward) so both arrive at the seam triangulator
/// aligned head-to-head, top tangent first. With `triangulate`, the former
/// hull edges along those chains become diagonals and the seam region is
/// triangulated.
pub fn merge(left: &Polygon, right: &Polygon, trace: &mut Trace, triangulate: bool) -> Polygon {
    let top = upper_tangent(left, right, trace);
    let bot = lower_tangent(left, right, trace);

    let ring = assemble_ring(left, right, top, bot);
    let inner_left = collect_forward(left, left.next_vertex(&top.a), bot.a);
    let inner_right = collect_backward(right, right.prev_vertex(&top.b), bot.b);

    let mut interior: Vec<Point> = Vec::with_capacity(
        left.interior().len() + inner_left.len() + right.interior().len() + inner_right.len(),
    );
    interior.extend_from_slice(left.interior());
    interior.extend_from_slice(&inner_left);
    interior.extend_from_slice(right.interior());
    interior.extend_from_slice(&inner_right);

    let mut diagonals: Vec<Edge> = Vec::new();
    diagonals.extend_from_slice(left.diagonals());
    diagonals.extend_from_slice(right.diagonals());
    if triangulate {
        chain_diagonals(left, top.a, bot.a, &inner_left, Side::Left, &mut diagonals, trace);
        chain_diagonals(right, top.b, bot.b, &inner_right, Side::Right, &mut diagonals, trace);
        let chain_left = terminated(top.a, &inner_left, bot.a);
        let chain_right = terminated(top.b, &inner_right, bot.b);
        if chain_left.len() != 1 || chain_right.len() != 1 {
            diagonals.extend(triangulate_seam(&chain_left, &chain_right, trace));
        }
    }

    Polygon::with_parts(ring, interior, diagonals)
        .expect("merged ring contains at least the start vertex")
}

/// Walk `left` up to the top tangent, cross over to `right`, walk around to
/// the bottom tangent, and return along `left` back to its start vertex.
fn assemble_ring(left: &Polygon, right: &Polygon, top: Edge, bot: Edge) -> Vec<Point> {
    let mut ring = Vec::with_capacity(left.ring_len() + right.ring_len());
    let top_l = left.position_of(&top.a).0;
    ring.extend_from_slice(&left.ring()[..=top_l]);

    let r_len = right.ring_len();
    let bot_r = right.position_of(&bot.b).0;
    let mut i = right.position_of(&top.b).0;
    while i % r_len != bot_r {
        ring.push(right.ring()[i % r_len]);
        i += 1;
    }
    ring.push(bot.b);

    let l_len = left.ring_len();
    let mut i = left.position_of(&bot.a).0;
    while i % l_len != 0 {
        ring.push(left.ring()[i % l_len]);
        i += 1;
    }
    ring
}

/// Ring vertices from `start` forward (circularly) up to but excluding
/// `stop`.
fn collect_forward(polygon: &Polygon, start: Point, stop: Point) -> Vec<Point> {
    let len = polygon.ring_len();
    let stop_i = polygon.position_of(&stop).0;
    let mut out = Vec::new();
    let mut i = polygon.position_of(&start).0;
    while i % len != stop_i {
        out.push(polygon.ring()[i % len]);
        i += 1;
    }
    out
}

/// Ring vertices from `start` backward (circularly) down to but excluding
/// `stop`, each collected exactly once.
fn collect_backward(polygon: &Polygon, start: Point, stop: Point) -> Vec<Point> {
    let len = polygon.ring_len();
    let stop_i = polygon.position_of(&stop).0;
    let mut out = Vec::new();
    let mut i = polygon.position_of(&start).0;
    while i != stop_i {
        out.push(polygon.ring()[i]);
        i = (i + len - 1) % len;
    }
    out
}

/// Former hull edges along an inner chain become diagonals of the merged
/// polygon. An empty chain still bridges its two tangent endpoints, unless
/// they are the same vertex or ring-adjacent (the bridge would duplicate a
/// hull edge).
fn chain_diagonals(
    polygon: &Polygon,
    top: Point,
    bot: Point,
    inner: &[Point],
    side: Side,
    diagonals: &mut Vec<Edge>,
    trace: &mut Trace,
) {
    if inner.is_empty() {
        if top != bot {
            let adjacent = match side {
                Side::Left => polygon.prev_vertex(&top) == bot,
                Side::Right => polygon.next_vertex(&top) == bot,
            };
            if !adjacent {
                push_diagonal(diagonals, Edge::new(top, bot), trace);
            }
        }
        return;
    }
    push_diagonal(diagonals, Edge::new(top, inner[0]), trace);
    for pair in inner.windows(2) {
        push_diagonal(diagonals, Edge::new(pair[0], pair[1]), trace);
    }
    push_diagonal(diagonals, Edge::new(inner[inner.len() - 1], bot), trace);
}

fn push_diagonal(diagonals: &mut Vec<Edge>, e: Edge, trace: &mut Trace) {
    trace.record(e, Persistence::Transient);
    diagonals.push(e);
}

/// Bridge-endpoint-terminated chain as handed to the seam triangulator: the
/// top tangent endpoint first, the bottom one last when distinct.
fn terminated(top: Point, inner: &[Point], bot: Point) -> Vec<Point> {
    let mut chain = Vec::with_capacity(inner.len() + 2);
    chain.push(top);
    chain.extend_from_slice(inner);
    if top != bot {
        chain.push(bot);
    }
    chain
}
