//! Divide-and-conquer convex hull with seam triangulation and a replayable
//! construction trace.
//!
//! Purpose
//! - `build_hull` is the engine boundary: points in, the final polygon plus
//!   the frame-ordered trace out.
//! - Submodules keep the merge machinery readable: `tangent` (rotating
//!   bridge search), `merge` (ring assembly and inner-chain extraction),
//!   `seam` (monotone-chain triangulation of the region between two merged
//!   sub-hulls).

mod merge;
mod seam;
mod tangent;

pub use merge::merge;
pub use seam::triangulate_seam;
pub use tangent::{lower_tangent, upper_tangent};

use crate::error::HullError;
use crate::geom::Point;
use crate::polygon::Polygon;
use crate::trace::{Persistence, Trace};

/// Convex hull of `points` by divide and conquer.
///
/// Sorts by (x, y) for a reproducible split, recurses down to singleton
/// polygons, and merges back up. Every intermediate construct lands in the
/// returned [`Trace`]; the final polygon is its sole surviving entry. With
/// `triangulate` set, each merge also triangulates the seam between its two
/// children, so the result carries a diagonal set over its interior points;
/// hull geometry is identical either way.
pub fn build_hull(points: &[Point], triangulate: bool) -> Result<(Polygon, Trace), HullError> {
    if points.is_empty() {
        return Err(HullError::InvalidInput("point set must not be empty"));
    }
    let mut sorted = points.to_vec();
    sorted.sort_by(
        |a, b| match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        },
    );
    let mut trace = Trace::new();
    let hull = divide(&sorted, &mut trace, triangulate);
    Ok((hull, trace))
}

/// Recursive driver: the floor half goes left. After each merge the two
/// children are retired from the trace and the parent recorded permanently.
fn divide(points: &[Point], trace: &mut Trace, triangulate: bool) -> Polygon {
    if points.len() == 1 {
        let single = Polygon::new(points.to_vec()).expect("singleton ring is non-empty");
        trace.record(&single, Persistence::Permanent);
        return single;
    }
    let (left_half, right_half) = points.split_at(points.len() / 2);
    let left = divide(left_half, trace, triangulate);
    let right = divide(right_half, trace, triangulate);
    let merged = merge(&left, &right, trace, triangulate);
    trace.retire(left);
    trace.retire(right);
    trace.record(&merged, Persistence::Permanent);
    merged
}

#[cfg(test)]
mod tests;
