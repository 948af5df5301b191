//! Plain nearest-color mapping.

use image::RgbImage;

use crate::palette::Palette;

use super::Quantize;

/// Maps every pixel independently to its nearest palette entry.
///
/// No error is carried between pixels, so flat regions stay flat and
/// gradients band.
pub struct NearestColor;

impl Quantize for NearestColor {
    fn quantize(&self, image: &RgbImage, palette: &Palette) -> Vec<u8> {
        image
            .pixels()
            .map(|&p| palette.find_nearest(p.into()).0 as u8)
            .collect()
    }
}
