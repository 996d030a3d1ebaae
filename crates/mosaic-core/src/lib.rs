//! mosaic-core: turn an image into a grid of averaged-color tiles
//!
//! This library reduces a decoded RGBA image to a coarse grid of square
//! blocks, each collapsed to its mean color, and optionally snaps those
//! colors onto a fixed catalog palette. The result describes a mosaic built
//! from discrete colored pieces; rendering it is left to the caller.
//!
//! # Quick Start
//!
//! The [`Pixelator`] builder is the primary entry point:
//!
//! ```
//! use mosaic_core::preprocess::PixelBuffer;
//! use mosaic_core::{Palette, Pixelator};
//!
//! let palette = Palette::from_hex(&["#05131d", "#ffffff", "#c91a09"]).unwrap();
//! let image = PixelBuffer::filled(64, 48, [210, 40, 30, 255]).unwrap();
//!
//! let mosaic = Pixelator::new(8).palette(palette).pixelate(&image).unwrap();
//!
//! assert_eq!(mosaic.grid_dimensions(), (6, 8));
//! assert_eq!(mosaic.tiles()[0].color.to_string(), "#c91a09");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer (RGBA, caller-decoded)
//!     |
//!     v
//! fit_within + resample     (optional: keep aspect ratio inside a box)
//!     |
//!     v
//! reduce                    (diameter x diameter blocks -> running means)
//!     |
//!     v
//! Grid                      (nb_rows x nb_cols, trailing partial blocks dropped)
//!     |
//!     v
//! flatten                   (row-major Tile list)
//!     |
//!     v
//! Palette::closest          (optional: snap each tile to the catalog)
//!     |
//!     v
//! Mosaic                    (tiles + grid and image dimensions)
//! ```
//!
//! Each stage is also available on its own ([`reduce`], [`flatten`],
//! [`Palette::closest`], [`preprocess::fit_within`]).
//!
//! # Numerics
//!
//! Block means are accumulated with the running update
//! `mean += (sample - mean) / count` in `f64`, then rounded half away from
//! zero. Palette distances are plain Euclidean distances in 8-bit RGB,
//! compared as exact integers; among equally close entries the first one in
//! catalog order wins.
//!
//! # Features
//!
//! - `parallel`: reduce grid rows on the rayon thread pool.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod preprocess;
pub mod reduce;

#[cfg(test)]
mod domain_tests;

pub use api::{snap_tiles, MosaicError, Pixelator};
pub use color::{HexColor, Rgb};
pub use output::{flatten, Mosaic, Tile};
pub use palette::{closest_color, Palette, PaletteEntry, PaletteMatch, ParseColorError};
pub use preprocess::PixelBuffer;
pub use reduce::{reduce, Grid};
