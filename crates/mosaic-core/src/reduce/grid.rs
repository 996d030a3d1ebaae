//! Reduced color grid

use super::mean::BlockMean;
use crate::color::{HexColor, Rgb};

/// The averaged colors of every whole block, row-major.
///
/// `nb_rows = floor(height / diameter)` and `nb_cols = floor(width /
/// diameter)` of the buffer it was reduced from. A diameter larger than the
/// image yields an empty grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    nb_rows: usize,
    nb_cols: usize,
    diameter: u32,
    cells: Vec<BlockMean>,
}

impl Grid {
    pub(crate) fn new(nb_rows: usize, nb_cols: usize, diameter: u32, cells: Vec<BlockMean>) -> Self {
        debug_assert_eq!(
            cells.len(),
            nb_rows * nb_cols,
            "cells length ({}) must match nb_rows * nb_cols ({}x{})",
            cells.len(),
            nb_rows,
            nb_cols,
        );
        Self {
            nb_rows,
            nb_cols,
            diameter,
            cells,
        }
    }

    /// Number of block rows.
    #[inline]
    pub fn nb_rows(&self) -> usize {
        self.nb_rows
    }

    /// Number of block columns.
    #[inline]
    pub fn nb_cols(&self) -> usize {
        self.nb_cols
    }

    /// `(nb_rows, nb_cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nb_rows, self.nb_cols)
    }

    /// Block edge length in source pixels.
    #[inline]
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Number of cells (`nb_rows * nb_cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no whole block fit in the image.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The running mean of the cell at `(row, col)`.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<&BlockMean> {
        if row >= self.nb_rows || col >= self.nb_cols {
            return None;
        }
        self.cells.get(row * self.nb_cols + col)
    }

    /// Rounded color of the cell at `(row, col)`.
    #[inline]
    pub fn color(&self, row: usize, col: usize) -> Option<Rgb> {
        self.cell(row, col).map(BlockMean::color)
    }

    /// Hex color of the cell at `(row, col)`.
    #[inline]
    pub fn hex(&self, row: usize, col: usize) -> Option<HexColor> {
        self.cell(row, col).map(BlockMean::hex)
    }

    /// Iterate over rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[BlockMean]> + '_ {
        // chunks(0) panics; an empty grid has no cells to chunk anyway
        self.cells.chunks(self.nb_cols.max(1))
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[BlockMean] {
        &self.cells
    }
}
