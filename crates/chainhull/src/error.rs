use crate::point::{Point, COORD_LIMIT};

/// Errors reported by the checked hull entry point.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    #[error("point #{index} {point} exceeds the coordinate limit ±{limit}", limit = COORD_LIMIT - 1)]
    CoordinateOutOfRange { index: usize, point: Point },
}
