//! Ordered color catalog with nearest-color matching.

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;
use crate::color::{HexColor, Rgb};

/// One catalog color, optionally labelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Human readable label ("Bright Red", "Dark Bluish Gray", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The catalog color
    pub hex: HexColor,
}

impl PaletteEntry {
    /// Create a labelled entry.
    pub fn new(name: impl Into<String>, hex: HexColor) -> Self {
        Self {
            name: Some(name.into()),
            hex,
        }
    }

    /// Create an entry without a label.
    pub fn unnamed(hex: HexColor) -> Self {
        Self { name: None, hex }
    }
}

/// Result of a palette lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteMatch<'a> {
    /// Position of the entry in the palette
    pub index: usize,
    /// The matched entry
    pub entry: &'a PaletteEntry,
    /// Euclidean RGB distance between the query and the entry
    pub distance: f64,
}

/// An ordered catalog of reference colors.
///
/// Order only matters for tie-breaking: when several entries are equally
/// close to a query, the one listed first wins. Duplicate colors are
/// allowed (a catalog may sell the same shade under two names) and empty
/// palettes are representable; lookups on an empty palette return `None`.
///
/// Deserializes from a plain list of `{ name, hex }` entries.
///
/// # Example
///
/// ```
/// use mosaic_core::{Palette, Rgb};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff", "#ff0000"]).unwrap();
///
/// let best = palette.closest(Rgb::new(200, 30, 40)).unwrap();
/// assert_eq!(best.index, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Create a palette from catalog entries, keeping their order.
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self { entries }
    }

    /// Create an unlabelled palette from hex strings.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseColorError`] encountered.
    pub fn from_hex(colors: &[&str]) -> Result<Self, ParseColorError> {
        let entries = colors
            .iter()
            .map(|s| s.parse().map(PaletteEntry::unnamed))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(entries))
    }

    /// Create an unlabelled palette from RGB colors.
    pub fn from_colors(colors: &[Rgb]) -> Self {
        colors
            .iter()
            .map(|&c| PaletteEntry::unnamed(c.to_hex()))
            .collect()
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entry at the given index.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<&PaletteEntry> {
        self.entries.get(idx)
    }

    /// All entries in catalog order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Find the entry closest to `color` by Euclidean RGB distance.
    ///
    /// Linear scan in catalog order. An entry replaces the current best only
    /// when strictly closer, so the first of several equidistant entries
    /// wins. Distances are compared as exact integer squares.
    ///
    /// Returns `None` when the palette is empty.
    pub fn closest(&self, color: Rgb) -> Option<PaletteMatch<'_>> {
        nearest(&self.entries, color).map(|(index, dist)| PaletteMatch {
            index,
            entry: &self.entries[index],
            distance: (dist as f64).sqrt(),
        })
    }

    /// Snap a hex color onto the catalog.
    ///
    /// Returns `None` when the palette is empty.
    #[inline]
    pub fn closest_hex(&self, color: HexColor) -> Option<HexColor> {
        self.closest(color.to_rgb()).map(|m| m.entry.hex)
    }
}

impl FromIterator<PaletteEntry> for Palette {
    fn from_iter<I: IntoIterator<Item = PaletteEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Find the palette color closest to a hex query.
///
/// String-level convenience over [`Palette::closest`] for callers that hold
/// raw catalog entries.
///
/// # Errors
///
/// Returns [`ParseColorError`] if `query` is not a valid hex color.
///
/// # Example
///
/// ```
/// use mosaic_core::{closest_color, PaletteEntry};
///
/// let catalog = vec![
///     PaletteEntry::new("Black", "#000000".parse().unwrap()),
///     PaletteEntry::new("White", "#ffffff".parse().unwrap()),
/// ];
/// let best = closest_color("#d0d0d0", &catalog).unwrap();
/// assert_eq!(best.unwrap().to_string(), "#ffffff");
///
/// assert_eq!(closest_color("#d0d0d0", &[]).unwrap(), None);
/// ```
pub fn closest_color(
    query: &str,
    palette: &[PaletteEntry],
) -> Result<Option<HexColor>, ParseColorError> {
    let query: Rgb = query.parse()?;
    Ok(nearest(palette, query).map(|(index, _)| palette[index].hex))
}

/// Index and squared distance of the first entry nearest to `color`.
///
/// Only a strictly smaller distance replaces the current best.
fn nearest(entries: &[PaletteEntry], color: Rgb) -> Option<(usize, u32)> {
    let mut best: Option<(usize, u32)> = None;

    for (i, entry) in entries.iter().enumerate() {
        let dist = color.distance_squared(entry.hex.to_rgb());
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((i, dist));
        }
    }

    best
}
