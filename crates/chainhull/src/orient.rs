use crate::point::Point;

/// Turn direction of the path `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Twice the signed area of triangle `a, b, c`: `(b − a) × (c − a)`.
///
/// Positive when `c` lies left of the ray `a → b`, negative when right, zero
/// when the three points are collinear. Exact for coordinates below
/// `COORD_LIMIT` in magnitude.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> i128 {
    let abx = b.x as i128 - a.x as i128;
    let aby = b.y as i128 - a.y as i128;
    let acx = c.x as i128 - a.x as i128;
    let acy = c.y as i128 - a.y as i128;
    abx * acy - aby * acx
}

#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    match cross(a, b, c).signum() {
        1 => Orientation::CounterClockwise,
        -1 => Orientation::Clockwise,
        _ => Orientation::Collinear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::COORD_LIMIT;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn sign_convention() {
        let o = Point::new(0, 0);
        let e = Point::new(1, 0);
        assert_eq!(cross(o, e, Point::new(0, 1)), 1);
        assert_eq!(cross(o, e, Point::new(0, -1)), -1);
        assert_eq!(cross(o, e, Point::new(7, 0)), 0);
        assert_eq!(orientation(o, e, Point::new(3, 2)), Orientation::CounterClockwise);
        assert_eq!(orientation(o, e, Point::new(3, -2)), Orientation::Clockwise);
        assert_eq!(orientation(o, e, Point::new(-3, 0)), Orientation::Collinear);
    }

    #[test]
    fn antisymmetric_in_last_two() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mut p = || Point::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000));
            let (a, b, c) = (p(), p(), p());
            assert_eq!(cross(a, b, c), -cross(a, c, b));
            // cyclic shifts keep the sign
            assert_eq!(cross(a, b, c), cross(b, c, a));
        }
    }

    #[test]
    fn exact_at_coordinate_limit() {
        let m = COORD_LIMIT - 1;
        let a = Point::new(-m, -m);
        let b = Point::new(m, -m);
        let c = Point::new(-m, m);
        let side = 2 * m as i128;
        assert_eq!(cross(a, b, c), side * side);
        assert_eq!(cross(a, c, b), -(side * side));
    }
}
