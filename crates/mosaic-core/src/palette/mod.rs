//! Palette types and nearest-color matching
//!
//! A [`Palette`] is an ordered catalog of reference colors (for example the
//! colors a tile manufacturer sells). [`Palette::closest`] snaps an arbitrary
//! color onto the catalog.

mod error;
mod palette;

pub use error::ParseColorError;
pub use palette::{closest_color, Palette, PaletteEntry, PaletteMatch};
