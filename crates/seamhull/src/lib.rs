//! Divide-and-conquer convex hulls with seam triangulation and a replayable
//! construction trace.
//!
//! The engine is pure and sequential: points in, a final [`Polygon`] plus a
//! frame-ordered [`Trace`] out. Renderers scrub the trace by index to replay
//! tangent searches, merges, and seam triangulations step by step; the
//! engine itself draws nothing and persists nothing.

pub mod cloud;
pub mod error;
pub mod geom;
pub mod hull;
pub mod polygon;
pub mod trace;

pub use error::HullError;
pub use geom::{cross, Edge, Point};
pub use hull::build_hull;
pub use polygon::{Polygon, VertexId};
pub use trace::{Drawable, Mark, Persistence, Trace, TraceEntry};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_point_cloud, CloudCfg, ReplayToken};
    pub use crate::error::HullError;
    pub use crate::geom::{cross, Edge, Point};
    pub use crate::hull::{build_hull, lower_tangent, merge, triangulate_seam, upper_tangent};
    pub use crate::polygon::{Polygon, VertexId};
    pub use crate::trace::{Drawable, Mark, Persistence, Trace, TraceEntry};
}
