//! Convex hulls of integer point sets in the plane.
//!
//! - `Point`: integer coordinates, lexicographic order.
//! - `cross` / `orientation`: exact turn test (`i128` arithmetic).
//! - `compute_hull` / `HullBuilder`: Andrew's monotone chain, strict
//!   convexity, clockwise output starting at the smallest point.
//! - `Hull`: the boundary plus containment, area, and bounds queries.
//! - `rand`: reproducible random clouds.
//!
//! Coordinates must satisfy `|v| < COORD_LIMIT` for the turn test to stay
//! exact. `compute_hull` trusts the caller; `try_compute_hull` checks.

pub mod error;
pub mod hull;
pub mod orient;
pub mod point;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use hull::{compute_hull, compute_hull_pairs, try_compute_hull, Hull, HullBuilder};
pub use orient::{cross, orientation, Orientation};
pub use point::{Point, COORD_LIMIT};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{compute_hull, try_compute_hull, Hull, HullBuilder};
    pub use crate::orient::{cross, orientation, Orientation};
    pub use crate::point::{Point, COORD_LIMIT};
    pub use crate::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::HullError;
}
