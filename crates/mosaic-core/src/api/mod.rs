//! Public API for the mosaic-core crate.
//!
//! This module provides the high-level API: [`Pixelator`] builder and
//! [`MosaicError`] unified error type.

mod builder;
mod error;

pub use builder::{snap_tiles, Pixelator};
pub use error::MosaicError;
