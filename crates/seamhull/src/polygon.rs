//! Convex polygon with a circular vertex ring, interior points, and
//! triangulation diagonals.

use crate::error::HullError;
use crate::geom::{Edge, Point};

/// Index into a polygon's vertex ring; arithmetic wraps modulo ring length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexId(pub usize);

/// Immutable convex boundary plus the interior bookkeeping of the merge
/// steps that produced it.
///
/// Invariants:
/// - `ring` is non-empty and coordinate-distinct; index arithmetic is
///   circular.
/// - `diagonals` holds each undirected segment at most once, in insertion
///   order.
/// - Extremes are fixed at construction: one linear scan with strict
///   comparisons, so the earliest vertex in scan order wins ties.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Polygon {
    ring: Vec<Point>,
    interior: Vec<Point>,
    diagonals: Vec<Edge>,
    pub min_x: Point,
    pub min_y: Point,
    pub max_x: Point,
    pub max_y: Point,
}

impl Polygon {
    /// Boundary-only polygon; duplicate coordinates in `vertices` collapse
    /// to the first occurrence.
    pub fn new(vertices: Vec<Point>) -> Result<Self, HullError> {
        Self::with_parts(vertices, Vec::new(), Vec::new())
    }

    /// Full constructor used by the merge step. Ring vertices are dedupped
    /// by coordinate, diagonals by undirected segment.
    pub fn with_parts(
        vertices: Vec<Point>,
        interior: Vec<Point>,
        diagonals: Vec<Edge>,
    ) -> Result<Self, HullError> {
        let mut ring: Vec<Point> = Vec::with_capacity(vertices.len());
        for v in vertices {
            if !ring.contains(&v) {
                ring.push(v);
            }
        }
        let first = *ring
            .first()
            .ok_or(HullError::InvalidInput("polygon needs at least one vertex"))?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first, first, first, first);
        for &v in &ring {
            if v.x < min_x.x {
                min_x = v;
            }
            if v.y < min_y.y {
                min_y = v;
            }
            if v.x > max_x.x {
                max_x = v;
            }
            if v.y > max_y.y {
                max_y = v;
            }
        }
        let mut unique: Vec<Edge> = Vec::with_capacity(diagonals.len());
        for d in diagonals {
            if !unique.iter().any(|e| e.connects_same(&d)) {
                unique.push(d);
            }
        }
        Ok(Self {
            ring,
            interior,
            diagonals: unique,
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    #[inline]
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    #[inline]
    pub fn interior(&self) -> &[Point] {
        &self.interior
    }

    #[inline]
    pub fn diagonals(&self) -> &[Edge] {
        &self.diagonals
    }

    #[inline]
    pub fn ring_len(&self) -> usize {
        self.ring.len()
    }

    /// Ring position of `p`. Looking up a point that is not a ring vertex is
    /// a programming-contract violation and panics.
    pub fn position_of(&self, p: &Point) -> VertexId {
        VertexId(
            self.ring
                .iter()
                .position(|q| q == p)
                .expect("point is not a ring vertex"),
        )
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Point {
        self.ring[id.0 % self.ring.len()]
    }

    #[inline]
    pub fn next_id(&self, id: VertexId) -> VertexId {
        VertexId((id.0 + 1) % self.ring.len())
    }

    #[inline]
    pub fn prev_id(&self, id: VertexId) -> VertexId {
        VertexId((id.0 + self.ring.len() - 1) % self.ring.len())
    }

    /// Ring successor of `p` (circular).
    pub fn next_vertex(&self, p: &Point) -> Point {
        self.vertex(self.next_id(self.position_of(p)))
    }

    /// Ring predecessor of `p` (circular).
    pub fn prev_vertex(&self, p: &Point) -> Point {
        self.vertex(self.prev_id(self.position_of(p)))
    }
}
