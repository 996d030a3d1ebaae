//! The block reducer

use super::grid::Grid;
use super::mean::BlockMean;
use crate::api::MosaicError;
use crate::color::Rgb;
use crate::preprocess::PixelBuffer;

/// Average every whole `diameter x diameter` block of `buffer`.
///
/// Cells are computed in row-major order. Within a cell, pixels are visited
/// row by row and folded into a [`BlockMean`]. Trailing rows and columns
/// that do not fill a whole block belong to no cell.
///
/// With the `parallel` feature, grid rows are reduced on the rayon pool;
/// the result is identical.
///
/// # Errors
///
/// [`MosaicError::InvalidDimension`] if `diameter` is zero.
///
/// # Example
///
/// ```
/// use mosaic_core::preprocess::PixelBuffer;
/// use mosaic_core::reduce;
///
/// let image = PixelBuffer::filled(10, 7, [255, 0, 0, 255]).unwrap();
/// let grid = reduce(&image, 3).unwrap();
///
/// assert_eq!(grid.dimensions(), (2, 3));
/// assert_eq!(grid.hex(1, 2).unwrap().to_string(), "#ff0000");
/// ```
pub fn reduce(buffer: &PixelBuffer, diameter: u32) -> Result<Grid, MosaicError> {
    MosaicError::check_dimension("diameter", diameter)?;

    let d = diameter as usize;
    let width = buffer.width() as usize;
    let nb_rows = buffer.height() as usize / d;
    let nb_cols = width / d;

    let blocks = BlockLayout {
        data: buffer.data(),
        width,
        diameter: d,
        nb_cols,
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<BlockMean>> = {
        use rayon::prelude::*;
        (0..nb_rows)
            .into_par_iter()
            .map(|row| blocks.reduce_row(row))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<BlockMean>> = (0..nb_rows).map(|row| blocks.reduce_row(row)).collect();

    Ok(Grid::new(nb_rows, nb_cols, diameter, rows.concat()))
}

/// Borrowed view of the pixel data with block geometry.
struct BlockLayout<'a> {
    data: &'a [u8],
    width: usize,
    diameter: usize,
    nb_cols: usize,
}

impl BlockLayout<'_> {
    fn reduce_row(&self, row: usize) -> Vec<BlockMean> {
        (0..self.nb_cols)
            .map(|col| self.reduce_block(row, col))
            .collect()
    }

    fn reduce_block(&self, row: usize, col: usize) -> BlockMean {
        let stride = self.width * PixelBuffer::CHANNELS;
        let top = row * self.diameter;
        let left = col * self.diameter;
        let mut mean = BlockMean::default();

        for dy in 0..self.diameter {
            let line = (top + dy) * stride;
            for dx in 0..self.diameter {
                let idx = line + (left + dx) * PixelBuffer::CHANNELS;
                // Unreachable for floor-sized grids over a validated buffer
                let Some(px) = self.data.get(idx..idx + PixelBuffer::CHANNELS) else {
                    continue;
                };
                mean.push(Rgb::new(px[0], px[1], px[2]));
            }
        }

        mean
    }
}
