//! Tile descriptors and grid flattening

use serde::{Deserialize, Serialize};

use crate::color::HexColor;
use crate::reduce::Grid;

/// One mosaic piece: a block's color and its position in the grid.
///
/// Renderers place a tile at `(col_index * diameter, row_index * diameter)`
/// and should rely on these indices rather than on list position.
///
/// Serializes with camelCase keys:
/// `{"diameter":5,"color":"#aabbcc","rowIndex":0,"colIndex":1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Block edge length in source pixels
    pub diameter: u32,
    /// Averaged (or palette-snapped) color
    pub color: HexColor,
    /// Grid row, top to bottom
    pub row_index: usize,
    /// Grid column, left to right
    pub col_index: usize,
}

impl Tile {
    /// The same tile with a different color.
    #[inline]
    pub fn with_color(self, color: HexColor) -> Self {
        Self { color, ..self }
    }
}

/// Flatten a grid into tiles, row 0 first, columns left to right.
///
/// Produces exactly `nb_rows * nb_cols` tiles with unique in-range indices.
///
/// ```
/// use mosaic_core::preprocess::PixelBuffer;
/// use mosaic_core::{flatten, reduce};
///
/// let grid = reduce(&PixelBuffer::filled(6, 4, [0, 0, 0, 255]).unwrap(), 2).unwrap();
/// let tiles = flatten(&grid);
///
/// assert_eq!(tiles.len(), 6);
/// assert_eq!((tiles[4].row_index, tiles[4].col_index), (1, 1));
/// ```
pub fn flatten(grid: &Grid) -> Vec<Tile> {
    let diameter = grid.diameter();

    grid.rows()
        .enumerate()
        .flat_map(|(row_index, row)| {
            row.iter().enumerate().map(move |(col_index, cell)| Tile {
                diameter,
                color: cell.hex(),
                row_index,
                col_index,
            })
        })
        .collect()
}
