//! Floyd-Steinberg error diffusion.

use image::RgbImage;

use crate::palette::Palette;

use super::{diffuse_with_kernel, Quantize, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion.
///
/// Pixels are visited row by row, left to right in every row. The error
/// between the wanted color and the chosen palette color goes to the
/// unvisited neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Shares that would land outside the image are dropped.
pub struct FloydSteinberg;

impl Quantize for FloydSteinberg {
    fn quantize(&self, image: &RgbImage, palette: &Palette) -> Vec<u8> {
        diffuse_with_kernel(image, palette, &FLOYD_STEINBERG)
    }
}
