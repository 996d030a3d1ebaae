pub mod image_loader;
pub mod mosaic_service;

pub use image_loader::{decode_png, decode_png_bytes, load_png};
pub use mosaic_service::{MosaicReport, MosaicService, PartCount};
