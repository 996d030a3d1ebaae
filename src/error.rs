use std::path::PathBuf;

use mosaic_core::MosaicError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("Unsupported image: {color_type} at {bit_depth} bits per sample")]
    UnsupportedImage {
        color_type: String,
        bit_depth: u8,
    },

    #[error("Mosaic error: {0}")]
    Mosaic(#[from] MosaicError),

    #[error("Palette file {}: {message}", path.display())]
    PaletteFile { path: PathBuf, message: String },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl From<png::DecodingError> for AppError {
    fn from(e: png::DecodingError) -> Self {
        AppError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_decode() {
        let error = AppError::Decode("bad signature".to_string());
        assert_eq!(error.to_string(), "PNG decode error: bad signature");
    }

    #[test]
    fn test_app_error_unsupported_image() {
        let error = AppError::UnsupportedImage {
            color_type: "Indexed".to_string(),
            bit_depth: 4,
        };
        assert_eq!(
            error.to_string(),
            "Unsupported image: Indexed at 4 bits per sample"
        );
    }

    #[test]
    fn test_app_error_palette_file() {
        let error = AppError::PaletteFile {
            path: PathBuf::from("colors.yaml"),
            message: "empty catalog".to_string(),
        };
        assert_eq!(error.to_string(), "Palette file colors.yaml: empty catalog");
    }

    #[test]
    fn test_app_error_config() {
        let error = AppError::Config("missing tile section".to_string());
        assert_eq!(error.to_string(), "Config error: missing tile section");
    }

    #[test]
    fn test_app_error_from_mosaic_error() {
        let app_error: AppError = MosaicError::EmptyPalette.into();
        match app_error {
            AppError::Mosaic(MosaicError::EmptyPalette) => {}
            _ => panic!("Expected Mosaic variant"),
        }
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let app_error: AppError = io.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert_eq!(app_error.to_string(), "IO error: gone");
    }
}
