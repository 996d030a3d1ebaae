//! 8-bit RGB color type

use std::fmt;
use std::str::FromStr;

use super::hex::{parse_hex, HexColor};
use crate::palette::ParseColorError;

/// A color with three 8-bit channels.
///
/// Alpha is not carried: block averages and palette entries are opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from floating point channel means.
    ///
    /// Each channel is rounded half away from zero and clamped to 0..=255.
    ///
    /// # Example
    /// ```
    /// use mosaic_core::Rgb;
    /// assert_eq!(Rgb::from_means(127.5, 0.49, 300.0), Rgb::new(128, 0, 255));
    /// ```
    #[inline]
    pub fn from_means(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: round_channel(r),
            g: round_channel(g),
            b: round_channel(b),
        }
    }

    /// Encode as a canonical `#rrggbb` hex color.
    #[inline]
    pub fn to_hex(self) -> HexColor {
        HexColor::from(self)
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Exact integer arithmetic; the maximum value is `3 * 255^2`.
    #[inline]
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Euclidean distance in RGB space.
    #[inline]
    pub fn distance(self, other: Rgb) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }
}

#[inline]
fn round_channel(value: f64) -> u8 {
    // NaN saturates to 0 through the cast
    value.round().clamp(0.0, 255.0) as u8
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a `#rrggbb` / `rrggbb` hex string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
