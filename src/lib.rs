//! epaper-convert - image to e-paper frame conversion
//!
//! Decodes image files, resolves panel and palette settings from YAML
//! configuration and drives the [`epd_frame`] pipeline. This library exposes
//! modules for integration testing.

pub mod config;
pub mod convert;
pub mod error;

pub use config::AppConfig;
pub use convert::{ConvertSettings, ConversionSummary};
pub use error::ConvertError;
