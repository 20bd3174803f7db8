//! Integer points in the plane.
//!
//! - `Point`: `(x, y)` with lexicographic ordering (x first, then y).
//! - `COORD_LIMIT`: exclusive bound on `|x|`, `|y|` that keeps `cross` exact.
//!
//! Code cross-refs: `orient::cross`, `hull::compute_hull`

use std::fmt;

use nalgebra::Vector2;

/// Exclusive bound on coordinate magnitudes.
///
/// For `|x|, |y| < 2^62` every coordinate difference fits in 63 bits, each
/// product in 126 bits, and the difference of two products in `i128`.
pub const COORD_LIMIT: i64 = 1 << 62;

/// A point of the integer plane.
///
/// The derived `Ord` compares `x` first and breaks ties by `y`, which is the
/// sweep order of the monotone chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// True if both coordinates satisfy `|v| < COORD_LIMIT`.
    #[inline]
    pub fn in_range(&self) -> bool {
        self.x.unsigned_abs() < COORD_LIMIT as u64 && self.y.unsigned_abs() < COORD_LIMIT as u64
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<i64> {
        Vector2::new(self.x, self.y)
    }

    /// Lossy conversion for float consumers (exact for `|v| <= 2^53`).
    #[inline]
    pub fn to_vec2_f64(self) -> Vector2<f64> {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<[i64; 2]> for Point {
    #[inline]
    fn from([x, y]: [i64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for [i64; 2] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl From<Vector2<i64>> for Point {
    #[inline]
    fn from(v: Vector2<i64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_lexicographic() {
        let mut pts = vec![
            Point::new(1, 0),
            Point::new(0, 5),
            Point::new(0, -1),
            Point::new(-3, 9),
        ];
        pts.sort();
        assert_eq!(
            pts,
            vec![
                Point::new(-3, 9),
                Point::new(0, -1),
                Point::new(0, 5),
                Point::new(1, 0)
            ]
        );
    }

    #[test]
    fn range_check_boundary() {
        assert!(Point::new(COORD_LIMIT - 1, -(COORD_LIMIT - 1)).in_range());
        assert!(!Point::new(COORD_LIMIT, 0).in_range());
        assert!(!Point::new(0, -COORD_LIMIT).in_range());
        assert!(!Point::new(i64::MIN, 0).in_range());
    }

    #[test]
    fn conversions() {
        let p: Point = (3, -4).into();
        assert_eq!(p, Point::new(3, -4));
        let t: (i64, i64) = p.into();
        assert_eq!(t, (3, -4));
        assert_eq!(Point::from(p.to_vec2()), p);
        assert_eq!(p.to_vec2_f64(), Vector2::new(3.0, -4.0));
        assert_eq!(p.to_string(), "(3, -4)");
    }
}
