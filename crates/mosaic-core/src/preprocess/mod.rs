//! Preparing decoded pixels for reduction
//!
//! - [`PixelBuffer`]: validated row-major RGBA input
//! - [`fit_within`]: aspect-preserving target dimensions inside a box
//! - [`resample`]: area-aware resize of a buffer to planned dimensions
//!
//! ```
//! use mosaic_core::preprocess::{fit_within, resample, PixelBuffer};
//!
//! let image = PixelBuffer::filled(1000, 500, [10, 20, 30, 255]).unwrap();
//! let (w, h) = fit_within(image.width(), image.height(), 500, 500).unwrap();
//! assert_eq!((w, h), (500, 250));
//!
//! let working = resample(&image, w, h).unwrap();
//! assert_eq!(working.pixel(499, 249), Some([10, 20, 30, 255]));
//! ```

mod buffer;
mod resize;

pub use buffer::PixelBuffer;
pub use resize::{fit_within, resample};
