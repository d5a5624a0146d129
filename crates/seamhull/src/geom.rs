//! Planar primitives: points, segments, and the slope/orientation predicates
//! used by the tangent search and the seam sweep.

use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// Signed near-zero substitute for a vertical run (`dx == 0`) in [`slope`].
pub(crate) const VERTICAL_EPS: f64 = 1e-10;

/// Immutable 2D point with identity by coordinate value.
///
/// Equality and hashing go through `f64::to_bits`, which keeps `Eq` and
/// `Hash` consistent: two points constructed independently at the same
/// coordinates are the same point for ring lookup purposes.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates as a vector, for arithmetic.
    #[inline]
    pub fn coords(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.x.to_bits());
        state.write_u64(self.y.to_bits());
    }
}

/// Directed segment `a → b`; drawn and deduplicated symmetrically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: Point,
    pub b: Point,
}

impl Edge {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Same segment regardless of direction.
    #[inline]
    pub fn connects_same(&self, other: &Edge) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

/// Cross product `ab × ac`: positive for a counter-clockwise turn, negative
/// for clockwise, zero when collinear.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b.coords() - a.coords();
    let ac = c.coords() - a.coords();
    ab.x * ac.y - ab.y * ac.x
}

/// Screen-convention slope (`-dy/dx`) of the segment `from → to`.
///
/// A vertical run substitutes a signed near-zero `dx`, with the sign taken
/// from which hull the walking endpoint belongs to, so vertical candidates
/// compare deterministically instead of dividing by zero.
#[inline]
pub(crate) fn slope(from: Point, to: Point, left_to_right: bool) -> f64 {
    let d = to.coords() - from.coords();
    let dx = if d.x == 0.0 {
        if left_to_right {
            VERTICAL_EPS
        } else {
            -VERTICAL_EPS
        }
    } else {
        d.x
    };
    -d.y / dx
}
