//! Property checks for `compute_hull` over arbitrary small and wide clouds.

use chainhull::{compute_hull, cross, Point};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn point(r: i64) -> impl Strategy<Value = Point> {
    (-r..=r, -r..=r).prop_map(|(x, y)| Point::new(x, y))
}

fn cloud() -> impl Strategy<Value = Vec<Point>> {
    prop_oneof![
        prop::collection::vec(point(4), 0..40),
        prop::collection::vec(point(1_000_000_000), 0..40),
    ]
}

proptest! {
    #[test]
    fn every_input_point_is_covered(pts in cloud()) {
        let h = compute_hull(&pts);
        for p in &pts {
            prop_assert!(h.contains(*p), "{p} outside {h:?}");
        }
    }

    #[test]
    fn vertices_are_distinct_input_points(pts in cloud()) {
        let h = compute_hull(&pts);
        let input: BTreeSet<Point> = pts.iter().copied().collect();
        let verts: BTreeSet<Point> = h.iter().copied().collect();
        prop_assert_eq!(verts.len(), h.len());
        prop_assert!(verts.is_subset(&input));
    }

    #[test]
    fn hull_of_hull_is_itself(pts in cloud()) {
        let h = compute_hull(&pts);
        prop_assert_eq!(compute_hull(h.vertices()), h);
    }

    #[test]
    fn input_order_does_not_matter(pts in cloud(), rot in 0usize..64) {
        let h = compute_hull(&pts);
        let mut reordered = pts.clone();
        reordered.reverse();
        if !reordered.is_empty() {
            let k = rot % reordered.len();
            reordered.rotate_left(k);
        }
        prop_assert_eq!(compute_hull(&reordered), h);
    }

    #[test]
    fn boundary_is_strictly_clockwise(pts in cloud()) {
        let h = compute_hull(&pts);
        let vs = h.vertices();
        if vs.len() >= 3 {
            let n = vs.len();
            for i in 0..n {
                prop_assert!(cross(vs[i], vs[(i + 1) % n], vs[(i + 2) % n]) < 0);
            }
        }
    }

    #[test]
    fn collinear_sets_keep_two_extremes(
        start in point(1000),
        dx in -5i64..=5,
        dy in -5i64..=5,
        steps in prop::collection::vec(0i64..50, 3..20),
    ) {
        prop_assume!(dx != 0 || dy != 0);
        let pts: Vec<Point> = steps
            .iter()
            .map(|&k| Point::new(start.x + k * dx, start.y + k * dy))
            .collect();
        let distinct: BTreeSet<Point> = pts.iter().copied().collect();
        let h = compute_hull(&pts);
        let expected: Vec<Point> = match distinct.len() {
            1 => vec![*distinct.iter().next().unwrap()],
            _ => vec![*distinct.iter().next().unwrap(), *distinct.iter().next_back().unwrap()],
        };
        prop_assert_eq!(h.into_vec(), expected);
    }
}
