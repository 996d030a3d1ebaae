use mosaic_core::HexColor;
use serde::Serialize;

/// A physical round tile: a short cylinder of one catalog color.
///
/// Diameter and height only change together, through
/// [`with_dimensions`](Self::with_dimensions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundTile {
    diameter: u32,
    height: u32,
    color: HexColor,
}

impl RoundTile {
    pub fn new(diameter: u32, height: u32, color: HexColor) -> Self {
        Self {
            diameter,
            height,
            color,
        }
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn color(&self) -> HexColor {
        self.color
    }

    /// Same color, new size
    pub fn with_dimensions(self, diameter: u32, height: u32) -> Self {
        Self {
            diameter,
            height,
            ..self
        }
    }

    /// Same size, new color
    pub fn with_color(self, color: HexColor) -> Self {
        Self { color, ..self }
    }
}
