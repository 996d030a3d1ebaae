use crate::assets::AssetLoader;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tile geometry
    #[serde(default)]
    pub tile: TileConfig,

    /// Bounding box images are fitted into before reduction
    #[serde(default)]
    pub bounds: BoundsConfig,

    /// Palette catalog used by `--catalog` (relative to the config file)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<PathBuf>,
}

/// Size of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileConfig {
    /// Edge length of a block in source pixels
    #[serde(default = "default_diameter")]
    pub diameter: u32,

    /// Physical height of a round tile
    #[serde(default = "default_tile_height")]
    pub height: u32,
}

fn default_diameter() -> u32 {
    5
}

fn default_tile_height() -> u32 {
    3
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            diameter: default_diameter(),
            height: default_tile_height(),
        }
    }
}

/// Resize bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundsConfig {
    #[serde(default = "default_max_side")]
    pub max_width: u32,

    #[serde(default = "default_max_side")]
    pub max_height: u32,
}

fn default_max_side() -> u32 {
    500
}

impl Default for BoundsConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_side(),
            max_height: default_max_side(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    ///
    /// A config that cannot be read, parsed or validated is reported and
    /// replaced by the defaults.
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        diameter = config.tile.diameter,
                        max_width = config.bounds.max_width,
                        max_height = config.bounds.max_height,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        // An empty or comment-only document is a null value
        if content.trim().lines().all(|l| l.trim().is_empty() || l.trim_start().starts_with('#')) {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero tile or bound sizes
    pub fn validate(&self) -> Result<(), AppError> {
        let checks = [
            ("tile.diameter", self.tile.diameter),
            ("tile.height", self.tile.height),
            ("bounds.max_width", self.bounds.max_width),
            ("bounds.max_height", self.bounds.max_height),
        ];
        match checks.iter().find(|(_, value)| *value == 0) {
            Some((key, _)) => Err(AppError::Config(format!("{key} must be at least 1"))),
            None => Ok(()),
        }
    }

    /// Resolve the configured palette path against `base`
    pub fn palette_path(&self, base: &Path) -> Option<PathBuf> {
        self.palette.as_ref().map(|p| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        })
    }
}
