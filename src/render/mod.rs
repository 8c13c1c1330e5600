//! Grid rasterization of segments.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer error-term stepping, one grid point per
//!   step along the major axis
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod raster;

pub use raster::{
    grid_points, rasterize, try_rasterize, Cells, GridLine, RasterOptions, Rounding,
    MAX_EXACT_COORD,
};
