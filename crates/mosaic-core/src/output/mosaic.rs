//! Mosaic: the complete result of pixelating one image.

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Tiles plus the dimensions a renderer needs to lay them out.
///
/// `width` and `height` describe the working image after any resize;
/// `nb_rows` and `nb_cols` the tile grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mosaic {
    width: u32,
    height: u32,
    diameter: u32,
    nb_rows: usize,
    nb_cols: usize,
    tiles: Vec<Tile>,
}

impl Mosaic {
    /// Assemble a mosaic from its parts.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `tiles.len() == nb_rows * nb_cols`.
    pub fn new(
        width: u32,
        height: u32,
        diameter: u32,
        nb_rows: usize,
        nb_cols: usize,
        tiles: Vec<Tile>,
    ) -> Self {
        debug_assert_eq!(
            tiles.len(),
            nb_rows * nb_cols,
            "tiles length ({}) must match nb_rows * nb_cols ({}x{})",
            tiles.len(),
            nb_rows,
            nb_cols,
        );
        Self {
            width,
            height,
            diameter,
            nb_rows,
            nb_cols,
            tiles,
        }
    }

    /// Working image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Working image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile edge length in source pixels.
    #[inline]
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Number of tile rows.
    #[inline]
    pub fn nb_rows(&self) -> usize {
        self.nb_rows
    }

    /// Number of tile columns.
    #[inline]
    pub fn nb_cols(&self) -> usize {
        self.nb_cols
    }

    /// `(nb_rows, nb_cols)`.
    #[inline]
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (self.nb_rows, self.nb_cols)
    }

    /// Tiles in row-major order.
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Consume the mosaic, returning its tiles.
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    /// The tile at `(row, col)`.
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.nb_rows || col >= self.nb_cols {
            return None;
        }
        self.tiles.get(row * self.nb_cols + col)
    }
}
