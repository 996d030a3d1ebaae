//! Pixelator builder -- the primary ergonomic entry point for the crate.
//!
//! [`Pixelator`] chains resize planning, block reduction, flattening and
//! optional palette snapping behind a fluent configuration.

use crate::api::MosaicError;
use crate::output::{flatten, Mosaic, Tile};
use crate::palette::Palette;
use crate::preprocess::{fit_within, resample, PixelBuffer};
use crate::reduce::{reduce, Grid};

/// High-level pixelation builder.
///
/// # Design
///
/// - Constructor requires the tile diameter
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - [`pixelate()`](Self::pixelate) takes `&self` so the builder is
///   **reusable** across images; a new diameter means a new builder
/// - Invalid settings are reported by `pixelate()`, before any pixel work
///
/// # Example
///
/// ```
/// use mosaic_core::preprocess::PixelBuffer;
/// use mosaic_core::{Palette, Pixelator};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let pixelator = Pixelator::new(5).bounds(100, 100).palette(palette);
///
/// let image = PixelBuffer::filled(400, 200, [230, 230, 230, 255]).unwrap();
/// let mosaic = pixelator.pixelate(&image).unwrap();
///
/// assert_eq!((mosaic.width(), mosaic.height()), (100, 50));
/// assert_eq!(mosaic.grid_dimensions(), (10, 20));
/// assert!(mosaic.tiles().iter().all(|t| t.color.to_string() == "#ffffff"));
/// ```
#[derive(Debug, Clone)]
pub struct Pixelator {
    diameter: u32,
    bounds: Option<(u32, u32)>,
    palette: Option<Palette>,
}

impl Pixelator {
    /// Create a pixelator producing tiles of `diameter x diameter` pixels.
    ///
    /// No resize and no palette snapping by default.
    pub fn new(diameter: u32) -> Self {
        Self {
            diameter,
            bounds: None,
            palette: None,
        }
    }

    /// Fit the image inside `max_width x max_height` (keeping its aspect
    /// ratio) before reducing.
    #[inline]
    pub fn bounds(mut self, max_width: u32, max_height: u32) -> Self {
        self.bounds = Some((max_width, max_height));
        self
    }

    /// Snap every tile color to the closest entry of `palette`.
    #[inline]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// The configured tile diameter.
    #[inline]
    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    /// Compute the working dimensions for a source image.
    ///
    /// Returns the source dimensions unchanged when no bounds are set.
    pub fn plan(&self, width: u32, height: u32) -> Result<(u32, u32), MosaicError> {
        match self.bounds {
            Some((max_width, max_height)) => fit_within(width, height, max_width, max_height),
            None => Ok((width, height)),
        }
    }

    /// Resize (if bounded) and reduce `image` to a color grid.
    pub fn grid(&self, image: &PixelBuffer) -> Result<Grid, MosaicError> {
        self.validate()?;
        self.working_grid(image).map(|(_, grid)| grid)
    }

    /// Run the full pipeline on `image`.
    ///
    /// 1. Plan working dimensions and resample (when bounds are set)
    /// 2. Reduce to a grid of block means
    /// 3. Flatten to row-major tiles
    /// 4. Snap tile colors to the palette (when one is set)
    ///
    /// # Errors
    ///
    /// - [`MosaicError::InvalidDimension`] for a zero diameter or bound, or
    ///   when the planned size collapses to zero
    /// - [`MosaicError::EmptyPalette`] if a palette with no entries was set
    pub fn pixelate(&self, image: &PixelBuffer) -> Result<Mosaic, MosaicError> {
        self.validate()?;
        let ((width, height), grid) = self.working_grid(image)?;

        let tiles = match &self.palette {
            Some(palette) => snap_tiles(flatten(&grid), palette)?,
            None => flatten(&grid),
        };

        Ok(Mosaic::new(
            width,
            height,
            self.diameter,
            grid.nb_rows(),
            grid.nb_cols(),
            tiles,
        ))
    }

    fn working_grid(&self, image: &PixelBuffer) -> Result<((u32, u32), Grid), MosaicError> {
        let (width, height) = self.plan(image.width(), image.height())?;
        let grid = if (width, height) == image.dimensions() {
            reduce(image, self.diameter)?
        } else {
            reduce(&resample(image, width, height)?, self.diameter)?
        };
        Ok(((width, height), grid))
    }

    fn validate(&self) -> Result<(), MosaicError> {
        MosaicError::check_dimension("diameter", self.diameter)?;
        if let Some((max_width, max_height)) = self.bounds {
            MosaicError::check_dimension("max width", max_width)?;
            MosaicError::check_dimension("max height", max_height)?;
        }
        if self.palette.as_ref().is_some_and(Palette::is_empty) {
            return Err(MosaicError::EmptyPalette);
        }
        Ok(())
    }
}

/// Replace every tile color with its closest palette color.
///
/// # Errors
///
/// [`MosaicError::EmptyPalette`] if `palette` has no entries.
pub fn snap_tiles(tiles: Vec<Tile>, palette: &Palette) -> Result<Vec<Tile>, MosaicError> {
    tiles
        .into_iter()
        .map(|tile| {
            palette
                .closest_hex(tile.color)
                .map(|color| tile.with_color(color))
                .ok_or(MosaicError::EmptyPalette)
        })
        .collect()
}
