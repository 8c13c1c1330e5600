//! Bresenham grid rasterization.
//!
//! Converts a segment into the ordered sequence of integer grid points that
//! approximate it, both endpoints included.
//!
//! Points come out as `(i32, i32)` cells through [`GridLine::cells`] or
//! [`GridLine::next_cell`], and as [`Vector2`] through the `Iterator` impl.
//! The `Vector2` form is exact only while every coordinate lies within
//! [`MAX_EXACT_COORD`] of the origin; beyond that `f32` cannot tell
//! neighbouring cells apart.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::geometry::Vector2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest grid coordinate magnitude that `f32` represents exactly (2^24).
pub const MAX_EXACT_COORD: i32 = 1 << 24;

/// How floating-point endpoints snap to the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rounding {
    /// Drop the fractional part (toward zero).
    #[default]
    Truncate,
    /// Nearest integer, halves away from zero.
    Round,
    /// Largest integer not greater than the value.
    Floor,
}

impl Rounding {
    /// Snap a coordinate to the grid.
    ///
    /// Values outside the `i32` range saturate; NaN snaps to 0.
    #[must_use]
    pub fn snap(self, value: f32) -> i32 {
        let snapped = match self {
            Self::Truncate => value.trunc(),
            Self::Round => value.round(),
            Self::Floor => value.floor(),
        };
        snapped as i32
    }
}

/// Options controlling rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterOptions {
    /// Endpoint snapping policy.
    pub rounding: Rounding,
}

impl RasterOptions {
    /// Create options with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the snapping policy.
    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }
}

/// Iterator over the grid points of a segment, start to end.
///
/// Yields exactly `max(dx, dy) + 1` points. Once the end point has been
/// produced the iterator is exhausted for good.
#[derive(Debug, Clone)]
pub struct GridLine {
    x: i64,
    y: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    remaining: usize,
}

impl GridLine {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let (x1, y1) = (i64::from(x1), i64::from(y1));
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let remaining = usize::try_from(dx.max(dy) + 1).unwrap_or(usize::MAX);

        tracing::trace!(x0, y0, x1, y1, points = remaining, "rasterizing segment");

        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            remaining,
        }
    }

    /// Next cell to be yielded, if any.
    #[must_use]
    pub fn current_cell(&self) -> Option<(i32, i32)> {
        (self.remaining > 0).then_some((self.x as i32, self.y as i32))
    }

    /// Snapped end cell.
    #[must_use]
    pub fn end_cell(&self) -> (i32, i32) {
        (self.x1 as i32, self.y1 as i32)
    }

    /// Next point to be yielded, if any.
    #[must_use]
    pub fn current(&self) -> Option<Vector2> {
        self.current_cell().map(cell_to_vector)
    }

    /// Snapped end point.
    #[must_use]
    pub fn end(&self) -> Vector2 {
        cell_to_vector(self.end_cell())
    }

    /// Advance the walk by one cell.
    ///
    /// Walk positions always lie between the two `i32` endpoints, so the
    /// returned cell is exact for the whole `i32` range.
    pub fn next_cell(&mut self) -> Option<(i32, i32)> {
        let cell = self.current_cell()?;
        if self.x == self.x1 && self.y == self.y1 {
            self.remaining = 0;
        } else {
            self.remaining -= 1;
            self.step();
        }
        Some(cell)
    }

    /// Iterate over integer cells instead of [`Vector2`] points.
    #[must_use]
    pub fn cells(self) -> Cells {
        Cells { line: self }
    }

    fn step(&mut self) {
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
    }
}

fn cell_to_vector((x, y): (i32, i32)) -> Vector2 {
    Vector2::new(x as f32, y as f32)
}

impl Iterator for GridLine {
    type Item = Vector2;

    fn next(&mut self) -> Option<Vector2> {
        self.next_cell().map(cell_to_vector)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for GridLine {}

impl FusedIterator for GridLine {}

/// Integer cells of a [`GridLine`], see [`GridLine::cells`].
#[derive(Debug, Clone)]
pub struct Cells {
    line: GridLine,
}

impl Iterator for Cells {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        self.line.next_cell()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.line.size_hint()
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}

/// Rasterize the segment `start -> end` after snapping both endpoints.
///
/// Coordinates beyond [`MAX_EXACT_COORD`] are walked exactly but lose
/// precision as [`Vector2`] items; use [`GridLine::cells`] for them, or
/// [`try_rasterize`] to reject them.
pub fn rasterize(start: Vector2, end: Vector2, options: RasterOptions) -> GridLine {
    let snap = |v: f32| options.rounding.snap(v);
    GridLine::new(snap(start.x), snap(start.y), snap(end.x), snap(end.y))
}

/// Like [`rasterize`], but rejects endpoints whose points would not be exact.
///
/// # Errors
///
/// [`Error::NonFiniteCoordinate`] for NaN or infinite endpoints and
/// [`Error::CoordinateOutOfRange`] when a snapped coordinate exceeds
/// [`MAX_EXACT_COORD`] in magnitude.
pub fn try_rasterize(start: Vector2, end: Vector2, options: RasterOptions) -> Result<GridLine> {
    for p in [start, end] {
        if !p.is_finite() {
            return Err(Error::NonFiniteCoordinate { x: p.x, y: p.y });
        }
        let (x, y) = (options.rounding.snap(p.x), options.rounding.snap(p.y));
        if x.unsigned_abs() > MAX_EXACT_COORD.unsigned_abs()
            || y.unsigned_abs() > MAX_EXACT_COORD.unsigned_abs()
        {
            return Err(Error::CoordinateOutOfRange { x: p.x, y: p.y });
        }
    }
    Ok(rasterize(start, end, options))
}

/// Rasterize a segment between integer grid points.
///
/// The full `i32` range is supported through [`GridLine::cells`];
/// [`Vector2`] items are exact only within [`MAX_EXACT_COORD`].
pub fn grid_points(x0: i32, y0: i32, x1: i32, y1: i32) -> GridLine {
    GridLine::new(x0, y0, x1, y1)
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
