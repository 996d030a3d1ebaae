//! PNG decoding into RGBA pixel buffers

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use mosaic_core::PixelBuffer;

use crate::error::AppError;

/// Decode a PNG file into an RGBA8 buffer
pub fn load_png(path: impl AsRef<Path>) -> Result<PixelBuffer, AppError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let buffer = decode_png(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        "Decoded image"
    );
    Ok(buffer)
}

/// Decode PNG data into an RGBA8 buffer.
///
/// Palette, low bit depth and 16-bit images are expanded to 8 bits per
/// channel. Grayscale is replicated into the three color channels and images
/// without alpha become opaque.
pub fn decode_png<R: Read>(reader: R) -> Result<PixelBuffer, AppError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(unsupported(info.color_type, info.bit_depth));
    }

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        other => return Err(unsupported(other, info.bit_depth)),
    };

    Ok(PixelBuffer::new(info.width, info.height, rgba)?)
}

/// Decode an in-memory PNG
pub fn decode_png_bytes(bytes: &[u8]) -> Result<PixelBuffer, AppError> {
    decode_png(bytes)
}

fn unsupported(color_type: png::ColorType, bit_depth: png::BitDepth) -> AppError {
    AppError::UnsupportedImage {
        color_type: format!("{color_type:?}"),
        bit_depth: bit_depth as u8,
    }
}
