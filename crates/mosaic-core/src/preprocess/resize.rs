//! Aspect-ratio planning and area-aware resampling.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use super::buffer::PixelBuffer;
use crate::api::MosaicError;

/// Compute the largest dimensions with the source aspect ratio that fit
/// inside `max_width x max_height`.
///
/// `scale = min(max_width / source_width, max_height / source_height)` and
/// each dimension is `floor(source * scale)`. The result never exceeds the
/// box; the aspect ratio is kept up to one pixel of rounding per dimension.
/// Sources smaller than the box are scaled up.
///
/// A very thin source can floor to zero in one dimension; buffers of that
/// size are rejected downstream.
///
/// # Errors
///
/// [`MosaicError::InvalidDimension`] if any input is zero.
///
/// # Example
///
/// ```
/// use mosaic_core::preprocess::fit_within;
///
/// assert_eq!(fit_within(1000, 500, 500, 500).unwrap(), (500, 250));
/// assert_eq!(fit_within(500, 1000, 500, 500).unwrap(), (250, 500));
/// ```
pub fn fit_within(
    source_width: u32,
    source_height: u32,
    max_width: u32,
    max_height: u32,
) -> Result<(u32, u32), MosaicError> {
    MosaicError::check_dimension("source width", source_width)?;
    MosaicError::check_dimension("source height", source_height)?;
    MosaicError::check_dimension("max width", max_width)?;
    MosaicError::check_dimension("max height", max_height)?;

    let scale = (max_width as f64 / source_width as f64)
        .min(max_height as f64 / source_height as f64);

    let width = (source_width as f64 * scale).floor() as u32;
    let height = (source_height as f64 * scale).floor() as u32;

    // Guard against float drift pushing past the box
    Ok((width.min(max_width), height.min(max_height)))
}

/// Resize a buffer to `width x height` with a triangle (linear) filter.
///
/// The filter support widens with the reduction ratio, so on a downscale
/// every source pixel contributes to the output pixel covering it. A
/// uniform image stays uniform at any size. Returns a copy when the
/// dimensions already match.
///
/// # Errors
///
/// [`MosaicError::InvalidDimension`] if `width` or `height` is zero.
pub fn resample(buffer: &PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer, MosaicError> {
    MosaicError::check_dimension("width", width)?;
    MosaicError::check_dimension("height", height)?;

    // Fast path – no scaling required.
    if buffer.dimensions() == (width, height) {
        return Ok(buffer.clone());
    }

    let (src_w, src_h) = buffer.dimensions();
    let source = RgbaImage::from_raw(src_w, src_h, buffer.data().to_vec()).ok_or(
        MosaicError::BufferSizeMismatch {
            width: src_w,
            height: src_h,
            expected: src_w as usize * src_h as usize * PixelBuffer::CHANNELS,
            actual: buffer.data().len(),
        },
    )?;

    let resized = imageops::resize(&source, width, height, FilterType::Triangle);
    PixelBuffer::new(width, height, resized.into_raw())
}
