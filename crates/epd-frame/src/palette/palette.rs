//! Palette of panel colors with 4-bit codes and nearest-color matching.

use std::collections::HashSet;

use super::error::PaletteError;
use crate::color::Rgb;

/// Smallest palette accepted.
pub const MIN_PALETTE_LEN: usize = 2;

/// Largest palette accepted: one nibble holds 16 distinct codes.
pub const MAX_PALETTE_LEN: usize = 16;

/// Largest code that fits in a nibble.
pub const MAX_CODE: u8 = 0x0F;

/// One named panel color and the code the display driver expects for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    name: String,
    color: Rgb,
    code: u8,
}

impl PaletteEntry {
    /// Create an entry. Validation happens when the entry joins a [`Palette`].
    pub fn new(name: impl Into<String>, color: Rgb, code: u8) -> Self {
        Self {
            name: name.into(),
            color,
            code,
        }
    }

    /// Entry name, e.g. `"white"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry color as matched against image pixels.
    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// 4-bit code written into the frame for this color.
    #[inline]
    pub fn code(&self) -> u8 {
        self.code
    }
}

/// An ordered, validated set of panel colors.
///
/// Entry order is part of the contract: when two entries are equally close
/// to a pixel, the earlier one wins. Codes need not be contiguous (the
/// 6-color panel skips `0x4`).
///
/// Colors are additionally kept in a fixed-size array so the per-pixel
/// nearest-color scan runs over contiguous `Rgb` values only.
///
/// # Example
///
/// ```
/// use epd_frame::{Palette, PaletteEntry, Rgb};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new("black", Rgb::BLACK, 0x0),
///     PaletteEntry::new("white", Rgb::WHITE, 0x1),
/// ])
/// .unwrap();
///
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_nearest(Rgb::new(40, 40, 40)).0, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    colors: [Rgb; MAX_PALETTE_LEN],
}

impl Palette {
    /// Create a palette from its entries, in matching order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::InvalidSize`] unless there are 2..=16 entries
    /// - [`PaletteError::CodeOutOfRange`] if a code exceeds `0xF`
    /// - [`PaletteError::DuplicateCode`], [`PaletteError::DuplicateColor`],
    ///   [`PaletteError::DuplicateName`] for repeated entries
    ///
    /// Colors and names must be unique as well as codes: a repeated color
    /// would leave its later entry unreachable, and names are lookup keys
    /// for the background policy and configuration.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if !(MIN_PALETTE_LEN..=MAX_PALETTE_LEN).contains(&entries.len()) {
            return Err(PaletteError::InvalidSize {
                len: entries.len(),
                min: MIN_PALETTE_LEN,
                max: MAX_PALETTE_LEN,
            });
        }

        let mut codes = HashSet::new();
        let mut colors = HashSet::new();
        let mut names = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.code > MAX_CODE {
                return Err(PaletteError::CodeOutOfRange {
                    name: entry.name.clone(),
                    code: entry.code,
                });
            }
            if !codes.insert(entry.code) {
                return Err(PaletteError::DuplicateCode {
                    index,
                    code: entry.code,
                });
            }
            if !colors.insert(entry.color) {
                return Err(PaletteError::DuplicateColor {
                    index,
                    color: entry.color,
                });
            }
            if !names.insert(entry.name.to_ascii_lowercase()) {
                return Err(PaletteError::DuplicateName {
                    index,
                    name: entry.name.clone(),
                });
            }
        }

        Ok(Self::from_entries(entries))
    }

    /// Create a palette from `(name, hex color, code)` triples.
    ///
    /// # Example
    ///
    /// ```
    /// use epd_frame::Palette;
    ///
    /// let palette = Palette::from_hex(&[
    ///     ("black", "#000000", 0x0),
    ///     ("white", "#FFF", 0x1),
    ///     ("red", "#C85032", 0x3),
    /// ])
    /// .unwrap();
    /// assert_eq!(palette.code(2), 0x3);
    /// ```
    pub fn from_hex(entries: &[(&str, &str, u8)]) -> Result<Self, PaletteError> {
        let entries = entries
            .iter()
            .map(|&(name, hex, code)| {
                let color = hex.parse().map_err(|source| PaletteError::ParseColor {
                    name: name.to_string(),
                    source,
                })?;
                Ok(PaletteEntry::new(name, color, code))
            })
            .collect::<Result<Vec<_>, PaletteError>>()?;
        Self::new(entries)
    }

    /// The 6-color Spectra panel palette.
    ///
    /// Colors are the measured appearance of the inks, not the ideal primaries,
    /// and code `0x4` is unused by the panel driver.
    pub fn six_color() -> Self {
        Self::from_entries(vec![
            PaletteEntry::new("black", Rgb::new(0, 0, 0), 0x0),
            PaletteEntry::new("white", Rgb::new(255, 255, 255), 0x1),
            PaletteEntry::new("yellow", Rgb::new(255, 255, 0), 0x2),
            PaletteEntry::new("red", Rgb::new(200, 80, 50), 0x3),
            PaletteEntry::new("blue", Rgb::new(100, 120, 180), 0x5),
            PaletteEntry::new("green", Rgb::new(200, 200, 80), 0x6),
        ])
    }

    /// The 7-color ACeP panel palette with contiguous codes `0x0..=0x6`.
    pub fn seven_color() -> Self {
        Self::from_entries(vec![
            PaletteEntry::new("black", Rgb::new(0, 0, 0), 0x0),
            PaletteEntry::new("white", Rgb::new(255, 255, 255), 0x1),
            PaletteEntry::new("green", Rgb::new(0, 255, 0), 0x2),
            PaletteEntry::new("blue", Rgb::new(0, 0, 255), 0x3),
            PaletteEntry::new("red", Rgb::new(255, 0, 0), 0x4),
            PaletteEntry::new("yellow", Rgb::new(255, 255, 0), 0x5),
            PaletteEntry::new("orange", Rgb::new(255, 128, 0), 0x6),
        ])
    }

    // Entries must already be valid; the presets are checked through `new` in tests.
    fn from_entries(entries: Vec<PaletteEntry>) -> Self {
        let mut colors = [Rgb::BLACK; MAX_PALETTE_LEN];
        for (slot, entry) in colors.iter_mut().zip(&entries) {
            *slot = entry.color;
        }
        Self { entries, colors }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: palettes hold at least two entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in matching order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry at the given index.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// Code at the given index.
    #[inline]
    pub fn code(&self, idx: usize) -> u8 {
        self.entries[idx].code
    }

    /// Index of the entry carrying `code`, if any.
    pub fn index_of_code(&self, code: u8) -> Option<usize> {
        self.entries.iter().position(|e| e.code == code)
    }

    /// Index of the entry named `name` (ASCII case-insensitive), if any.
    pub fn index_of_name(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Find the nearest palette color by squared Euclidean RGB distance.
    ///
    /// Returns `(index, distance)`. Ties go to the earliest entry.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (usize, u32) {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &candidate) in self.colors[..self.entries.len()].iter().enumerate() {
            let dist = color.distance_squared(candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Fill color for letterbox borders.
    ///
    /// The entry named `white` when the palette has one, otherwise the entry
    /// closest to pure white. Callers wanting anything else pass an explicit
    /// background to the pipeline.
    pub fn background(&self) -> Rgb {
        match self.index_of_name("white") {
            Some(idx) => self.color(idx),
            None => self.color(self.find_nearest(Rgb::WHITE).0),
        }
    }
}
