//! Unified error type for the mosaic-core public API.

use thiserror::Error;

use crate::palette::ParseColorError;

/// Unified error type for the mosaic-core public API.
///
/// Every variant is a precondition violation detected before any pixel is
/// processed. The computation is deterministic, so none of them is worth
/// retrying.
///
/// # Example
///
/// ```
/// use mosaic_core::{MosaicError, Palette};
///
/// fn catalog() -> Result<Palette, MosaicError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MosaicError {
    /// A size that must be at least 1 was zero
    #[error("invalid {what}: {value} (must be at least 1)")]
    InvalidDimension {
        /// Which parameter was rejected ("diameter", "width", ...)
        what: &'static str,
        /// The rejected value
        value: u32,
    },

    /// Pixel buffer length does not equal `width * height * 4`
    #[error("pixel buffer has {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    BufferSizeMismatch {
        /// Buffer width in pixels
        width: u32,
        /// Buffer height in pixels
        height: u32,
        /// Required byte length
        expected: usize,
        /// Supplied byte length
        actual: usize,
    },

    /// A hex color could not be decoded
    #[error("malformed color: {0}")]
    MalformedColor(#[from] ParseColorError),

    /// Palette snapping was requested against a palette with no entries
    #[error("palette has no entries to match against")]
    EmptyPalette,
}

impl MosaicError {
    /// Reject `value` unless it is at least 1.
    pub(crate) fn check_dimension(what: &'static str, value: u32) -> Result<u32, Self> {
        if value == 0 {
            Err(Self::InvalidDimension { what, value })
        } else {
            Ok(value)
        }
    }
}
