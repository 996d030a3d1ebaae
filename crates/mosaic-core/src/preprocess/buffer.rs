//! Row-major RGBA pixel buffer

use crate::api::MosaicError;

/// A decoded image: `width * height` pixels, 4 bytes each (R, G, B, A),
/// stored row by row.
///
/// The constructor guarantees non-zero dimensions and an exact byte length,
/// so consumers never index out of bounds on a well-formed buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Wrap raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// - [`MosaicError::InvalidDimension`] if `width` or `height` is zero
    /// - [`MosaicError::BufferSizeMismatch`] if `data.len() != width * height * 4`
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, MosaicError> {
        MosaicError::check_dimension("width", width)?;
        MosaicError::check_dimension("height", height)?;

        let expected = Self::byte_len(width, height);
        if expected != Some(data.len()) {
            return Err(MosaicError::BufferSizeMismatch {
                width,
                height,
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A buffer where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, MosaicError> {
        let pixels = (width as usize).saturating_mul(height as usize);
        Self::new(width, height, rgba.repeat(pixels))
    }

    fn byte_len(width: u32, height: u32) -> Option<usize> {
        (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(Self::CHANNELS)
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The raw RGBA bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the raw RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The RGBA value at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        let px = &self.data[idx..idx + Self::CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }
}
