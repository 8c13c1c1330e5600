//! Directed line segments.
//!
//! A [`Line`] owns its two endpoints and lazily derives its bounding box.
//!
//! # Bounds caching
//!
//! [`Line::bounds`] is computed on first read and stored for the lifetime of
//! the instance. Nothing invalidates it: after `set`, `invert` or a direct
//! write to `start`/`end`, later reads still return the box of the endpoints
//! as they were at the first read. Build a new `Line` when fresh bounds are
//! needed.

use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::geometry::{Rect, Vector2};
use crate::render::{self, GridLine, RasterOptions};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A directed segment from `start` to `end`.
///
/// `Line::default()` places both endpoints at the origin.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// Start point.
    pub start: Vector2,
    /// End point.
    pub end: Vector2,
    #[cfg_attr(feature = "serde", serde(skip))]
    bounds: OnceLock<Rect>,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Vector2, end: Vector2) -> Self {
        Self {
            start,
            end,
            bounds: OnceLock::new(),
        }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Vector2::new(x0, y0), Vector2::new(x1, y1))
    }

    /// Create a line, rejecting NaN or infinite endpoints.
    pub fn try_new(start: Vector2, end: Vector2) -> Result<Self> {
        ensure_finite(start)?;
        ensure_finite(end)?;
        Ok(Self::new(start, end))
    }

    /// Replace both endpoints. Cached bounds are kept as they are.
    pub fn set(&mut self, start: Vector2, end: Vector2) {
        self.start = start;
        self.end = end;
    }

    /// Swap `start` and `end` in place.
    ///
    /// ```
    /// use trueno_segment::prelude::*;
    ///
    /// let mut line = Line::from_coords(0.0, 0.0, 3.0, 4.0);
    /// line.invert().invert();
    /// assert_eq!(line.start, Vector2::new(0.0, 0.0));
    /// ```
    pub fn invert(&mut self) -> &mut Self {
        std::mem::swap(&mut self.start, &mut self.end);
        self
    }

    /// Axis-aligned bounding box, computed once on first access.
    ///
    /// The cache is never invalidated; see the module documentation.
    pub fn bounds(&self) -> Rect {
        *self.bounds.get_or_init(|| {
            let rect = Rect::from_points(self.start, self.end);
            tracing::trace!(
                x = rect.position.x,
                y = rect.position.y,
                width = rect.width,
                height = rect.height,
                "cached line bounds"
            );
            rect
        })
    }

    /// Whether the bounds cache has been filled.
    pub fn has_cached_bounds(&self) -> bool {
        self.bounds.get().is_some()
    }

    /// Vector from `start` to `end`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.direction().magnitude()
    }

    /// Midpoint of the segment. Equals `start` for a zero-length line.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        self.start + self.direction() / 2.0
    }

    /// Whether `start` and `end` coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Unit vector perpendicular to the line (counter-clockwise of the direction).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateNormal`] when the line has zero length.
    pub fn normal(&self) -> Result<Vector2> {
        self.direction().perp().try_normalize().ok_or_else(|| {
            tracing::debug!(
                x = self.start.x,
                y = self.start.y,
                "normal of zero-length line"
            );
            Error::DegenerateNormal { at: self.start }
        })
    }

    /// Like [`Line::normal`], but a zero-length line yields [`Vector2::ZERO`].
    #[must_use]
    pub fn normal_or_zero(&self) -> Vector2 {
        self.normal().unwrap_or(Vector2::ZERO)
    }

    /// Grid points from `start` to `end` using Bresenham's algorithm.
    ///
    /// Endpoints are truncated toward zero. Each call walks the current
    /// endpoints afresh.
    ///
    /// ```
    /// use trueno_segment::prelude::*;
    ///
    /// let points: Vec<_> = Line::from_coords(0.0, 0.0, 3.0, 0.0).rasterize().collect();
    /// assert_eq!(points.len(), 4);
    /// assert_eq!(points[3], Vector2::new(3.0, 0.0));
    /// ```
    pub fn rasterize(&self) -> GridLine {
        self.rasterize_with(RasterOptions::default())
    }

    /// Grid points using the given snapping options.
    pub fn rasterize_with(&self, options: RasterOptions) -> GridLine {
        render::rasterize(self.start, self.end, options)
    }

    /// Like [`Line::rasterize_with`], but rejects endpoints whose grid points
    /// would not be exact: NaN or infinite coordinates, and snapped
    /// coordinates beyond [`render::MAX_EXACT_COORD`].
    pub fn try_rasterize(&self, options: RasterOptions) -> Result<GridLine> {
        render::try_rasterize(self.start, self.end, options)
    }
}

fn ensure_finite(p: Vector2) -> Result<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteCoordinate { x: p.x, y: p.y })
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl From<(Vector2, Vector2)> for Line {
    fn from((start, end): (Vector2, Vector2)) -> Self {
        Self::new(start, end)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
