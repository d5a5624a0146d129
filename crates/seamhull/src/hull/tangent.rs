//! Rotating-bridge search for the upper and lower tangents between two
//! x-separated convex polygons.

use crate::geom::{slope, Edge, Point};
use crate::polygon::Polygon;
use crate::trace::{Persistence, Trace};

/// Upper bridge between `left` and `right`, where all of `left` lies at or
/// left of `right` on the x axis (guaranteed by the sorted split).
///
/// Seeds at `left.max_x` / `right.min_x`, then alternates: walk the left
/// candidate backward and the right candidate forward along their rings
/// until a full pass moves neither side. Every candidate change appends a
/// transient edge so the search replays step by step.
pub fn upper_tangent(left: &Polygon, right: &Polygon, trace: &mut Trace) -> Edge {
    let mut l = left.max_x;
    let mut r = right.min_x;
    trace.record(Edge::new(l, r), Persistence::Transient);
    loop {
        let mut moved = false;
        let next_l = retreat_while_below(left, l, r, true);
        if next_l != l {
            l = next_l;
            trace.record(Edge::new(l, r), Persistence::Transient);
            moved = true;
        }
        let next_r = advance_while_above(right, r, l, false);
        if next_r != r {
            r = next_r;
            trace.record(Edge::new(l, r), Persistence::Transient);
            moved = true;
        }
        if !moved {
            break;
        }
    }
    Edge::new(l, r)
}

/// Lower bridge; the mirror image of [`upper_tangent`] (left walks forward,
/// right walks backward).
pub fn lower_tangent(left: &Polygon, right: &Polygon, trace: &mut Trace) -> Edge {
    let mut l = left.max_x;
    let mut r = right.min_x;
    trace.record(Edge::new(l, r), Persistence::Transient);
    loop {
        let mut moved = false;
        let next_l = advance_while_above(left, l, r, true);
        if next_l != l {
            l = next_l;
            trace.record(Edge::new(l, r), Persistence::Transient);
            moved = true;
        }
        let next_r = retreat_while_below(right, r, l, false);
        if next_r != r {
            r = next_r;
            trace.record(Edge::new(l, r), Persistence::Transient);
            moved = true;
        }
        if !moved {
            break;
        }
    }
    Edge::new(l, r)
}

/// Step backward while the previous ring vertex sees a strictly smaller
/// slope to the fixed point on the opposite hull.
fn retreat_while_below(
    polygon: &Polygon,
    mut candidate: Point,
    fixed: Point,
    left_to_right: bool,
) -> Point {
    while slope(polygon.prev_vertex(&candidate), fixed, left_to_right)
        < slope(candidate, fixed, left_to_right)
    {
        candidate = polygon.prev_vertex(&candidate);
    }
    candidate
}

/// Step forward while the next ring vertex sees a strictly greater slope.
fn advance_while_above(
    polygon: &Polygon,
    mut candidate: Point,
    fixed: Point,
    left_to_right: bool,
) -> Point {
    while slope(polygon.next_vertex(&candidate), fixed, left_to_right)
        > slope(candidate, fixed, left_to_right)
    {
        candidate = polygon.next_vertex(&candidate);
    }
    candidate
}
