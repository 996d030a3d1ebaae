//! Palette catalog files
//!
//! A catalog is either a bare list of entries or a mapping with a `colors`
//! list. Both YAML and JSON are accepted; the parser is chosen by file
//! extension.
//!
//! ```yaml
//! colors:
//!   - { name: White, hex: "#ffffff" }
//!   - { name: Black, hex: "#05131d" }
//! ```

use std::path::{Path, PathBuf};

use mosaic_core::{Palette, PaletteEntry};
use serde::Deserialize;

use crate::assets::AssetLoader;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PaletteDocument {
    Catalog { colors: Vec<PaletteEntry> },
    List(Vec<PaletteEntry>),
}

impl PaletteDocument {
    fn into_entries(self) -> Vec<PaletteEntry> {
        match self {
            PaletteDocument::Catalog { colors } => colors,
            PaletteDocument::List(entries) => entries,
        }
    }
}

/// Parse a catalog document.
///
/// `name` selects the format (`.json` is parsed as JSON, anything else as
/// YAML) and labels errors. An empty catalog is rejected.
pub fn parse_palette(name: &str, content: &[u8]) -> Result<Palette, AppError> {
    let error = |message: String| AppError::PaletteFile {
        path: PathBuf::from(name),
        message,
    };

    let is_json = Path::new(name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let document: PaletteDocument = if is_json {
        serde_json::from_slice(content).map_err(|e| error(e.to_string()))?
    } else {
        serde_yaml::from_slice(content).map_err(|e| error(e.to_string()))?
    };

    let palette = Palette::new(document.into_entries());
    if palette.is_empty() {
        return Err(error("catalog has no colors".to_string()));
    }
    Ok(palette)
}

/// Load the palette selected by `loader` (file or embedded default)
pub fn load_palette(loader: &AssetLoader) -> Result<Palette, AppError> {
    let (name, content) = loader.read_palette()?;
    let palette = parse_palette(&name, &content)?;
    tracing::debug!(palette = %name, colors = palette.len(), "Loaded palette");
    Ok(palette)
}
