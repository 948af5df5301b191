//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::num::ParseIntError;

use thiserror::Error;

use crate::color::Rgb;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 characters)")]
    InvalidLength,
    /// Character that is not a hexadecimal digit
    #[error("invalid hex character '{0}'")]
    InvalidCharacter(char),
    /// Hex digits that did not parse as a channel value
    #[error("invalid hex color: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// Every variant is a configuration problem: palettes are validated once,
/// when they are built, so an invalid code can never reach the frame packer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// Too few or too many entries for a 4-bit frame
    #[error("palette must have between {min} and {max} entries, got {len}")]
    InvalidSize {
        /// Number of entries supplied
        len: usize,
        /// Smallest accepted palette
        min: usize,
        /// Largest accepted palette
        max: usize,
    },
    /// A code does not fit in one nibble
    #[error("code {code} of palette entry '{name}' does not fit in 4 bits (0-15)")]
    CodeOutOfRange {
        /// Name of the offending entry
        name: String,
        /// The rejected code
        code: u8,
    },
    /// Two entries share a code
    #[error("duplicate palette code {code} at index {index}")]
    DuplicateCode {
        /// Index where the duplicate was found
        index: usize,
        /// The repeated code
        code: u8,
    },
    /// Two entries share a color
    #[error("duplicate palette color {color} at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
        /// The repeated color
        color: Rgb,
    },
    /// Two entries share a name
    #[error("duplicate palette entry name '{name}' at index {index}")]
    DuplicateName {
        /// Index where the duplicate was found
        index: usize,
        /// The repeated name
        name: String,
    },
    /// Invalid hex color string for an entry
    #[error("invalid color for palette entry '{name}': {source}")]
    ParseColor {
        /// Name of the offending entry
        name: String,
        /// Underlying parse failure
        #[source]
        source: ParseColorError,
    },
}
