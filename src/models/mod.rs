pub mod config;
pub mod palette_file;
pub mod piece;

pub use config::{AppConfig, BoundsConfig, TileConfig};
pub use palette_file::{load_palette, parse_palette};
pub use piece::RoundTile;
