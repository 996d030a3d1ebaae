use std::collections::HashMap;
use std::path::Path;

use mosaic_core::{HexColor, Mosaic, Palette, PixelBuffer, Pixelator, Tile};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{AppConfig, RoundTile, TileConfig};
use crate::services::image_loader;

/// Serializable result of one pixelation run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MosaicReport {
    /// Working image width after resizing
    pub width: u32,
    /// Working image height after resizing
    pub height: u32,
    pub diameter: u32,
    /// Physical tile height, carried from the configuration
    pub tile_height: u32,
    pub nb_rows: usize,
    pub nb_cols: usize,
    /// Parts needed per color, most used first
    pub parts: Vec<PartCount>,
    /// Row-major tile list
    pub tiles: Vec<Tile>,
}

/// How many tiles of one color a mosaic uses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartCount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub piece: RoundTile,
    pub count: usize,
}

impl MosaicReport {
    /// Render the report as pretty JSON
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self).map_err(|e| AppError::Output(e.to_string()))
    }

    /// Render the report as YAML
    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|e| AppError::Output(e.to_string()))
    }
}

/// Runs the pixelation pipeline with settings from the configuration
#[derive(Debug, Clone)]
pub struct MosaicService {
    tile: TileConfig,
    bounds: Option<(u32, u32)>,
    palette: Option<Palette>,
}

impl MosaicService {
    /// Create a service using the configured tile size and bounds, without
    /// palette snapping
    pub fn new(config: &AppConfig) -> Self {
        Self {
            tile: config.tile,
            bounds: Some((config.bounds.max_width, config.bounds.max_height)),
            palette: None,
        }
    }

    /// Override the tile diameter
    pub fn with_diameter(mut self, diameter: u32) -> Self {
        self.tile.diameter = diameter;
        self
    }

    /// Override (or with `None`, disable) the resize bounds
    pub fn with_bounds(mut self, bounds: Option<(u32, u32)>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Snap tile colors to `palette`
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// The configured core pipeline
    pub fn pixelator(&self) -> Pixelator {
        let mut pixelator = Pixelator::new(self.tile.diameter);
        if let Some((max_width, max_height)) = self.bounds {
            pixelator = pixelator.bounds(max_width, max_height);
        }
        if let Some(ref palette) = self.palette {
            pixelator = pixelator.palette(palette.clone());
        }
        pixelator
    }

    /// Pixelate a decoded image
    pub fn render(&self, image: &PixelBuffer) -> Result<MosaicReport, AppError> {
        let mosaic = self.pixelator().pixelate(image)?;
        tracing::info!(
            width = mosaic.width(),
            height = mosaic.height(),
            rows = mosaic.nb_rows(),
            cols = mosaic.nb_cols(),
            snapped = self.palette.is_some(),
            "Pixelated image"
        );
        Ok(self.report(mosaic))
    }

    /// Decode a PNG file and pixelate it
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<MosaicReport, AppError> {
        let image = image_loader::load_png(path)?;
        self.render(&image)
    }

    fn report(&self, mosaic: Mosaic) -> MosaicReport {
        let parts = self.count_parts(mosaic.tiles(), mosaic.diameter());

        MosaicReport {
            width: mosaic.width(),
            height: mosaic.height(),
            diameter: mosaic.diameter(),
            tile_height: self.tile.height,
            nb_rows: mosaic.nb_rows(),
            nb_cols: mosaic.nb_cols(),
            parts,
            tiles: mosaic.into_tiles(),
        }
    }

    fn count_parts(&self, tiles: &[Tile], diameter: u32) -> Vec<PartCount> {
        let mut counts: HashMap<HexColor, usize> = HashMap::new();
        for tile in tiles {
            *counts.entry(tile.color).or_default() += 1;
        }

        let mut parts: Vec<PartCount> = counts
            .into_iter()
            .map(|(color, count)| PartCount {
                name: self.color_name(color),
                piece: RoundTile::new(diameter, self.tile.height, color),
                count,
            })
            .collect();
        parts.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.piece.color().to_string().cmp(&b.piece.color().to_string()))
        });
        parts
    }

    fn color_name(&self, color: HexColor) -> Option<String> {
        self.palette
            .as_ref()?
            .entries()
            .iter()
            .find(|entry| entry.hex == color)
            .and_then(|entry| entry.name.clone())
    }
}
