//! Block-wise color averaging
//!
//! [`reduce`] partitions a [`PixelBuffer`](crate::preprocess::PixelBuffer)
//! into `diameter x diameter` blocks and averages each one into a [`Grid`]
//! cell. Pixels past the last whole block in either direction are dropped.
//!
//! ```text
//!  width = 7, diameter = 3  ->  nb_cols = 2
//!
//!  +-----+-----+-+
//!  | 0,0 | 0,1 |x|   x: trailing columns/rows that do not fill a block
//!  +-----+-----+-+      are excluded from every cell
//!  | 1,0 | 1,1 |x|
//!  +-----+-----+-+
//!  |  x  |  x  |x|
//! ```

mod block;
mod grid;
mod mean;

pub use block::reduce;
pub use grid::Grid;
pub use mean::BlockMean;
