#![allow(clippy::module_inception)]

//! epd-frame: turn decoded images into packed frames for color e-paper panels
//!
//! The pipeline has three stages:
//!
//! 1. **Geometry** ([`normalize`]) - rotate portrait sources, pre-scale
//!    oversized ones and fit the result onto the panel canvas
//! 2. **Quantization** ([`quantize`]) - map every pixel to a palette entry,
//!    optionally with Floyd-Steinberg error diffusion
//! 3. **Packing** ([`pack`]) - store the device codes two pixels per byte
//!
//! # Quick Start
//!
//! The [`FramePipeline`] builder runs all three:
//!
//! ```
//! use epd_frame::{FitPolicy, FramePipeline, Palette, PanelSpec};
//! use image::{DynamicImage, Rgb, RgbImage};
//!
//! let pipeline = FramePipeline::new(PanelSpec::EPD_7IN3, Palette::six_color())?;
//!
//! let photo = DynamicImage::ImageRgb8(RgbImage::from_pixel(1600, 1200, Rgb([255, 255, 255])));
//! let frame = pipeline.render(&photo, FitPolicy::CropFill, true)?;
//!
//! assert_eq!(frame.len(), 192_000);
//! assert_eq!(frame.as_bytes()[0], 0x11); // two white pixels
//! # Ok::<(), epd_frame::FrameError>(())
//! ```
//!
//! # Stages by hand
//!
//! ```
//! use epd_frame::{normalize, pack, quantize, FitPolicy, GeometryOptions, Palette};
//! use image::{DynamicImage, RgbImage};
//!
//! let src = DynamicImage::ImageRgb8(RgbImage::new(480, 800));
//! let canvas = normalize(&src, &GeometryOptions::new(800, 480, FitPolicy::LetterboxFit))?;
//! let indexed = quantize(&canvas, &Palette::seven_color(), false);
//! let frame = pack(&indexed, 800, 480)?;
//!
//! assert_eq!(frame.len(), 800 * 480 / 2);
//! # Ok::<(), epd_frame::FrameError>(())
//! ```
//!
//! # Palettes
//!
//! A [`Palette`] is an ordered list of 2 to 16 named colors, each with the
//! 4-bit code the panel driver expects. Codes need not be contiguous: the
//! six-color preset leaves `0x4` unused. Matching uses squared Euclidean
//! distance in RGB and, on a tie, the entry listed first.
//!
//! # Determinism
//!
//! Every stage is a pure function of its inputs. The same image, panel,
//! palette, fit policy and dither flag always produce the same bytes.

pub mod api;
pub mod color;
pub mod frame;
pub mod geometry;
pub mod output;
pub mod palette;
pub mod panel;
pub mod quantize;

#[cfg(test)]
mod domain_tests;

pub use api::{ErrorKind, FrameError, FramePipeline};
pub use color::Rgb;
pub use frame::{pack, pack_codes, Frame};
pub use geometry::{normalize, normalize_rgb, FitPolicy, GeometryOptions, ParseFitPolicyError};
pub use output::QuantizedImage;
pub use palette::{Palette, PaletteEntry, PaletteError, ParseColorError};
pub use panel::{PanelSpec, DEFAULT_PRESCALE};
pub use quantize::quantize;
