//! Error types for trueno-segment operations.

use crate::geometry::Vector2;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-segment operations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The normal of a zero-length line has no direction.
    #[error("Degenerate line at {at} has no normal")]
    DegenerateNormal {
        /// The shared start/end point.
        at: Vector2,
    },

    /// An endpoint coordinate is NaN or infinite.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// A snapped endpoint lies beyond the exactly representable grid range.
    #[error("Coordinate out of exact grid range: ({x}, {y})")]
    CoordinateOutOfRange {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },
}
