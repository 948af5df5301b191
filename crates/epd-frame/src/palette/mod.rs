//! Palette types and utilities
//!
//! This module provides the [`Palette`] value object, its entries, and the
//! error types for parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, PaletteEntry, MAX_CODE, MAX_PALETTE_LEN, MIN_PALETTE_LEN};
