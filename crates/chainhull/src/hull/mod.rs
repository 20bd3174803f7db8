//! Convex hulls of integer point sets (Andrew's monotone chain).
//!
//! Purpose
//! - Turn an unordered point set (duplicates allowed) into the strictly convex
//!   boundary polygon that contains it.
//!
//! Output convention
//! - Starts at the lexicographically smallest point and runs clockwise
//!   (y axis up): the left-to-right chain first, then the right-to-left one.
//! - Collinear boundary points are dropped; no closing duplicate.
//! - Inputs with 0 or 1 points come back unchanged; all-identical inputs give
//!   one point; two distinct extremes give a 2-vertex segment.
//!
//! Code cross-refs: `HullBuilder`, `orient::cross`, `point::COORD_LIMIT`

mod builder;

use nalgebra::Vector2;

use crate::error::HullError;
use crate::orient::cross;
use crate::point::Point;

pub use builder::HullBuilder;

/// Ordered hull boundary.
///
/// Invariants:
/// - Vertices are distinct input points.
/// - Consecutive triples turn strictly clockwise (for 3+ vertices).
///
/// Serialized as its vertex list. Deserializing recomputes the hull of the
/// listed points, so the invariants hold for any input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Hull {
    vertices: Vec<Point>,
}

/// Hull of `points`.
///
/// Pre: every coordinate satisfies `|v| < COORD_LIMIT`; otherwise turn tests
/// may be wrong. Use `try_compute_hull` to have that checked.
pub fn compute_hull(points: &[Point]) -> Hull {
    if points.len() <= 1 {
        return Hull {
            vertices: points.to_vec(),
        };
    }
    let mut pts = points.to_vec();
    pts.sort_unstable();

    let mut b = HullBuilder::with_capacity(pts.len() + 1);
    for &p in &pts {
        b.push(p);
    }
    b.seal_chain();
    for &p in pts.iter().rev() {
        b.push(p);
    }
    b.finish()
}

/// Like `compute_hull`, but rejects out-of-range coordinates first.
pub fn try_compute_hull(points: &[Point]) -> Result<Hull, HullError> {
    if let Some((index, &point)) = points.iter().enumerate().find(|(_, p)| !p.in_range()) {
        return Err(HullError::CoordinateOutOfRange { index, point });
    }
    Ok(compute_hull(points))
}

/// Tuple-in, tuple-out form of `compute_hull`.
pub fn compute_hull_pairs(points: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let pts: Vec<Point> = points.iter().copied().map(Point::from).collect();
    compute_hull(&pts).into_iter().map(Into::into).collect()
}

impl Hull {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.vertices.iter()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }

    /// Inside-or-on-boundary test with exact integer arithmetic.
    ///
    /// Degenerate hulls behave as their point sets: empty, a single point, or
    /// a closed segment.
    pub fn contains(&self, p: Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => *a == p,
            [a, b] => on_segment(*a, *b, p),
            vs => {
                // clockwise boundary: p must never be strictly left of an edge
                let n = vs.len();
                (0..n).all(|i| cross(vs[i], vs[(i + 1) % n], p) <= 0)
            }
        }
    }

    /// Twice the enclosed area (0 for fewer than 3 vertices).
    pub fn twice_area(&self) -> i128 {
        let vs = &self.vertices;
        if vs.len() < 3 {
            return 0;
        }
        // fan from vs[0]; every term has the same sign on a convex polygon
        let signed: i128 = (1..vs.len() - 1)
            .map(|i| cross(vs[0], vs[i], vs[i + 1]))
            .sum();
        signed.abs()
    }

    /// Mean of the vertices (not the area centroid).
    pub fn vertex_mean(&self) -> Option<Vector2<f64>> {
        if self.vertices.is_empty() {
            return None;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vector2::<f64>::zeros(), |acc, p| acc + p.to_vec2_f64());
        Some(sum / self.vertices.len() as f64)
    }

    /// Axis-aligned bounds as `(min corner, max corner)`.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = *self.vertices.first()?;
        let bb = self.vertices.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        Some(bb)
    }
}

#[inline]
fn on_segment(a: Point, b: Point, p: Point) -> bool {
    cross(a, b, p) == 0
        && a.x.min(b.x) <= p.x
        && p.x <= a.x.max(b.x)
        && a.y.min(b.y) <= p.y
        && p.y <= a.y.max(b.y)
}

impl IntoIterator for Hull {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl From<Hull> for Vec<Point> {
    fn from(h: Hull) -> Self {
        h.vertices
    }
}

impl TryFrom<Vec<Point>> for Hull {
    type Error = HullError;
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        try_compute_hull(&points)
    }
}
