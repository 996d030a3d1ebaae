//! Color types and the hex codec
//!
//! Two representations of the same 24-bit color:
//!
//! - [`Rgb`]: three 8-bit channels. Use for arithmetic (averaging, distance).
//! - [`HexColor`]: the canonical `"#rrggbb"` form handed to renderers and
//!   read from palette catalogs.
//!
//! # Example
//!
//! ```
//! use mosaic_core::{HexColor, Rgb};
//!
//! let orange: HexColor = "#FF8000".parse().unwrap();
//! assert_eq!(orange.to_rgb(), Rgb::new(255, 128, 0));
//!
//! // Encoding always yields lowercase, zero-padded channels
//! assert_eq!(Rgb::new(1, 2, 3).to_hex().to_string(), "#010203");
//! ```

mod hex;
mod rgb;

pub use hex::HexColor;
pub use rgb::Rgb;
