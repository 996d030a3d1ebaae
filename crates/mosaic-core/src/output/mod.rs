//! Output types for the pixelation pipeline.
//!
//! - [`Tile`]: one averaged block, positioned by row and column
//! - [`flatten`]: grid to row-major tile list
//! - [`Mosaic`]: tiles plus the grid and working-image dimensions, the
//!   value handed to a renderer

mod mosaic;
mod tile;

pub use mosaic::Mosaic;
pub use tile::{flatten, Tile};
