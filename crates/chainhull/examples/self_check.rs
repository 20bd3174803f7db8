//! Usage demo: two fixed point sets whose hull sizes are known.
//! Prints `true` twice.

use chainhull::{compute_hull, Point};

fn main() {
    let hull1 = compute_hull(&[
        Point::new(0, 0),
        Point::new(3, 0),
        Point::new(0, 3),
        Point::new(1, 1),
    ]);
    println!("{}", hull1.len() == 3);

    let hull2 = compute_hull(&[Point::new(0, 0), Point::new(0, 0)]);
    println!("{}", hull2.len() == 1);
}
