//! # Trueno-Segment
//!
//! A 2D line-segment primitive: geometric queries (length, center, normal,
//! bounding box) and Bresenham rasterization onto the integer grid.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_segment::prelude::*;
//!
//! let line = Line::from_coords(0.0, 0.0, 4.0, 2.0);
//! assert_eq!(line.center(), Vector2::new(2.0, 1.0));
//!
//! let points: Vec<Vector2> = line.rasterize().collect();
//! assert_eq!(points.len(), 5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for all value types
//!
//! ## Diagnostics
//!
//! Bounds caching, rasterization and degenerate normals emit `tracing`
//! events at `trace`/`debug` level. No subscriber is installed here.
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric value types (vectors, rectangles).
pub mod geometry;

/// Directed line segments with cached bounds.
pub mod line;

/// Grid rasterization.
pub mod render;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-segment operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use trueno_segment::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Rect, Vector2};
    pub use crate::line::Line;
    pub use crate::render::{Cells, GridLine, RasterOptions, Rounding};
}
