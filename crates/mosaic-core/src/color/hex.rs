//! Canonical `#rrggbb` color strings

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;
use crate::palette::ParseColorError;

/// A color in its canonical hex form: `#` followed by two lowercase,
/// zero-padded hex digits per channel.
///
/// Parsing accepts either case and an optional leading `#`; the value is
/// always written back in canonical form, so for any lowercase `#rrggbb`
/// string `s`, `s.parse::<HexColor>()?.to_string() == s`.
///
/// Serializes as a plain string.
///
/// # Example
///
/// ```
/// use mosaic_core::HexColor;
///
/// let hex: HexColor = "#A0B1C2".parse().unwrap();
/// assert_eq!(hex.to_string(), "#a0b1c2");
///
/// assert!("#12345".parse::<HexColor>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(Rgb);

impl HexColor {
    /// Decode into RGB channels.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        self.0
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        Self(rgb)
    }
}

impl From<HexColor> for Rgb {
    fn from(hex: HexColor) -> Self {
        hex.0
    }
}

impl FromStr for HexColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).map(Self)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(hex: HexColor) -> Self {
        hex.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Decode `#rrggbb` or `rrggbb` into channels.
///
/// The six digits are read as one 24-bit integer: red is bits 16..24, green
/// bits 8..16, blue bits 0..8.
pub(crate) fn parse_hex(s: &str) -> Result<Rgb, ParseColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);

    if digits.len() != 6 {
        return Err(ParseColorError::InvalidLength {
            input: s.to_string(),
        });
    }
    // from_str_radix would accept a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHex {
            input: s.to_string(),
        });
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_| ParseColorError::InvalidHex {
        input: s.to_string(),
    })?;

    Ok(Rgb::new(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    ))
}
