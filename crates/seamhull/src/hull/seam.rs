//! Monotone-chain triangulation of the seam between two merged sub-hulls.

use crate::geom::{cross, Edge, Point};
use crate::trace::{Persistence, Trace};

/// Which inner chain a seam vertex belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Chain {
    Left,
    Right,
}

/// Triangulate the region bounded by the two bridge-terminated inner chains.
///
/// Both chains arrive aligned head-to-head (top bridge endpoint first), so
/// their concatenation is treated as the two monotone chains of a simple
/// polygon. Vertices are processed in (y, x) order against a reflex stack:
/// a vertex on the opposite chain from the stack top fans out to the whole
/// stack except its bottom element, a same-chain vertex pops as long as the
/// candidate diagonal stays inside (cross-product orientation against the
/// chain vertex between them), and the final vertex fans to the remaining
/// stack except its first and last elements. Three or fewer combined
/// vertices need no diagonals. Every accepted diagonal is also recorded as a
/// transient trace entry.
pub fn triangulate_seam(
    inner_left: &[Point],
    inner_right: &[Point],
    trace: &mut Trace,
) -> Vec<Edge> {
    let mut diagonals: Vec<Edge> = Vec::new();
    if inner_left.is_empty() || inner_right.is_empty() {
        return diagonals;
    }
    let mut verts: Vec<(Point, Chain)> =
        Vec::with_capacity(inner_left.len() + inner_right.len());
    verts.extend(inner_left.iter().map(|&p| (p, Chain::Left)));
    verts.extend(inner_right.iter().map(|&p| (p, Chain::Right)));
    if verts.len() <= 3 {
        return diagonals;
    }
    verts.sort_by(|a, b| {
        match a.0.y.partial_cmp(&b.0.y).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => {
                a.0.x.partial_cmp(&b.0.x).unwrap_or(std::cmp::Ordering::Equal)
            }
            o => o,
        }
    });

    let mut stack: Vec<(Point, Chain)> = Vec::with_capacity(verts.len());
    stack.push(verts[0]);
    stack.push(verts[1]);
    for &(p, chain) in &verts[2..verts.len() - 1] {
        if chain != stack[stack.len() - 1].1 {
            // opposite chain: fan out to the whole stack except its bottom,
            // then restart from the old top and the current vertex
            let reset = stack[stack.len() - 1];
            while let Some((q, _)) = stack.pop() {
                if !stack.is_empty() {
                    emit(&mut diagonals, Edge::new(p, q), trace);
                }
            }
            stack.push(reset);
            stack.push((p, chain));
        } else if let Some(mut last) = stack.pop() {
            // same chain: the popped top shares a chain edge with `p`; keep
            // popping while the diagonal to the next element stays inside
            while let Some(&below) = stack.last() {
                if !diagonal_inside(p, last.0, below.0, chain) {
                    break;
                }
                emit(&mut diagonals, Edge::new(p, below.0), trace);
                last = below;
                stack.pop();
            }
            stack.push(last);
            stack.push((p, chain));
        }
    }

    let (end, _) = verts[verts.len() - 1];
    if stack.len() > 2 {
        for &(q, _) in &stack[1..stack.len() - 1] {
            emit(&mut diagonals, Edge::new(end, q), trace);
        }
    }
    diagonals
}

/// Does the candidate diagonal from `p` down to `below` stay inside the
/// seam, given `between` is the chain vertex separating them? Left-chain
/// pops need a counter-clockwise turn, right-chain pops a clockwise one;
/// collinear counts as outside.
#[inline]
fn diagonal_inside(p: Point, between: Point, below: Point, chain: Chain) -> bool {
    match chain {
        Chain::Left => cross(p, between, below) > 0.0,
        Chain::Right => cross(p, between, below) < 0.0,
    }
}

fn emit(diagonals: &mut Vec<Edge>, e: Edge, trace: &mut Trace) {
    trace.record(e, Persistence::Transient);
    diagonals.push(e);
}
