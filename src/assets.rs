//! Asset loading with embedded fallbacks
//!
//! Config and palette files are compiled into the binary. Either can be
//! replaced by a file on disk:
//!
//! - Config: if `CONFIG_FILE` is set and the file exists it is used,
//!   otherwise the embedded `config.yaml` is
//! - Palette: an explicitly configured palette file must exist; without one
//!   the embedded default catalog is used

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Embedded palette catalogs
#[derive(RustEmbed)]
#[folder = "palettes/"]
#[include = "*.yaml"]
#[include = "*.json"]
struct EmbeddedPalettes;

/// File name of the catalog used when no palette file is configured
pub const DEFAULT_PALETTE: &str = "round-tiles.yaml";

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Config,
    Palettes,
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem override
#[derive(Debug, Clone, Default)]
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// External palette file path (flag, PALETTE_FILE env var or config)
    palette_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the user configured them. If `None`,
    /// embedded assets are used.
    pub fn new(config_file: Option<PathBuf>, palette_file: Option<PathBuf>) -> Self {
        Self {
            config_file,
            palette_file,
        }
    }

    /// Create a loader from the `CONFIG_FILE` and `PALETTE_FILE` env vars
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
            std::env::var("PALETTE_FILE").ok().map(PathBuf::from),
        )
    }

    /// Replace the palette file (a CLI flag overrides the environment)
    pub fn with_palette_file(mut self, palette_file: Option<PathBuf>) -> Self {
        if palette_file.is_some() {
            self.palette_file = palette_file;
        }
        self
    }

    /// The configured external config path, if any
    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// The configured external palette path, if any
    pub fn palette_file(&self) -> Option<&Path> {
        self.palette_file.as_deref()
    }

    /// Directory that relative paths inside the config resolve against.
    ///
    /// The parent of the external config file when one is in use, the
    /// working directory otherwise.
    pub fn config_dir(&self) -> PathBuf {
        self.config_file
            .as_deref()
            .filter(|path| path.exists())
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    /// Read the config file
    ///
    /// If an external path is configured and exists, uses that.
    /// Otherwise falls back to embedded config.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
            tracing::debug!(path = %path.display(), "Config file not found, using embedded");
        }

        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Read the palette catalog
    ///
    /// Returns the raw bytes together with a name used to pick the parser
    /// (by extension) and to label errors.
    pub fn read_palette(&self) -> io::Result<(String, Cow<'static, [u8]>)> {
        if let Some(ref path) = self.palette_file {
            tracing::trace!(path = %path.display(), "Loading palette from filesystem");
            let data = fs::read(path).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {e}", path.display()))
            })?;
            return Ok((path.display().to_string(), Cow::Owned(data)));
        }

        EmbeddedPalettes::get(DEFAULT_PALETTE)
            .map(|f| {
                tracing::trace!(palette = DEFAULT_PALETTE, "Loading palette from embedded assets");
                (DEFAULT_PALETTE.to_string(), f.data)
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded palette not found: {DEFAULT_PALETTE}"),
                )
            })
    }

    /// Describe where the config comes from (for status output)
    pub fn config_source(&self) -> String {
        match self.config_file {
            Some(ref path) if path.exists() => path.display().to_string(),
            Some(_) => "embedded (file not found)".to_string(),
            None => "embedded".to_string(),
        }
    }

    /// Describe where the palette comes from (for status output)
    pub fn palette_source(&self) -> String {
        match self.palette_file {
            Some(ref path) => path.display().to_string(),
            None => format!("embedded ({DEFAULT_PALETTE})"),
        }
    }

    /// Extract embedded assets to the filesystem (init command)
    ///
    /// The config goes to the configured path or `./config.yaml`, palettes
    /// to `./palettes/`. Existing files are skipped unless `force` is set.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        self.init_in(Path::new("."), categories, force)
    }

    /// Like [`init`](Self::init) with default locations under `root`
    pub fn init_in(
        &self,
        root: &Path,
        categories: &[AssetCategory],
        force: bool,
    ) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for category in categories {
            match category {
                AssetCategory::Config => {
                    let path = self
                        .config_file
                        .clone()
                        .unwrap_or_else(|| root.join("config.yaml"));

                    if !force && path.exists() {
                        report.skipped.push(path.display().to_string());
                        continue;
                    }
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    if let Some(data) = EmbeddedConfig::get("config.yaml") {
                        fs::write(&path, &*data.data)?;
                        report.written.push(path.display().to_string());
                    }
                }
                AssetCategory::Palettes => {
                    let dir = root.join("palettes");
                    fs::create_dir_all(&dir)?;

                    for file in EmbeddedPalettes::iter() {
                        let path = dir.join(file.as_ref());
                        if !force && path.exists() {
                            report.skipped.push(path.display().to_string());
                            continue;
                        }
                        if let Some(data) = EmbeddedPalettes::get(&file) {
                            fs::write(&path, &*data.data)?;
                            report.written.push(path.display().to_string());
                        }
                    }
                }
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        match category {
            AssetCategory::Config => vec!["config.yaml".to_string()],
            AssetCategory::Palettes => {
                let mut files: Vec<String> =
                    EmbeddedPalettes::iter().map(|s| s.to_string()).collect();
                files.sort();
                files
            }
        }
    }
}
