//! Palette-indexed image produced by [`quantize`](crate::quantize).

use image::RgbImage;

use crate::api::FrameError;
use crate::color::Rgb;
use crate::palette::Palette;

/// Palette indices in row-major order, with dimensions and the palette used.
///
/// # Example
///
/// ```
/// use epd_frame::{Palette, QuantizedImage};
///
/// let palette = Palette::seven_color();
/// // 2x2 checkerboard of black (index 0) and orange (index 6)
/// let image = QuantizedImage::new(vec![0, 6, 6, 0], 2, 2, palette).unwrap();
///
/// assert_eq!(image.code_at(1, 0), 0x6);
/// assert_eq!(image.to_rgb().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedImage {
    indices: Vec<u8>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl QuantizedImage {
    /// Wrap palette indices computed elsewhere.
    ///
    /// There must be exactly one index per pixel and every index must name a
    /// palette entry; both are precondition violations otherwise.
    pub fn new(
        indices: Vec<u8>,
        width: u32,
        height: u32,
        palette: Palette,
    ) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize;
        if indices.len() != expected {
            return Err(FrameError::CodeCount {
                expected,
                actual: indices.len(),
            });
        }
        if let Some((pixel, &index)) = indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| usize::from(i) >= palette.len())
        {
            return Err(FrameError::IndexOutOfPalette {
                index,
                pixel,
                len: palette.len(),
            });
        }
        Ok(Self::from_quantizer(indices, width, height, palette))
    }

    // Quantizer output is correct by construction.
    pub(crate) fn from_quantizer(
        indices: Vec<u8>,
        width: u32,
        height: u32,
        palette: Palette,
    ) -> Self {
        debug_assert_eq!(indices.len(), width as usize * height as usize);
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn index_at(&self, x: u32, y: u32) -> usize {
        self.indices[y as usize * self.width as usize + x as usize] as usize
    }

    /// Device code of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    pub fn code_at(&self, x: u32, y: u32) -> u8 {
        self.palette.code(self.index_at(x, y))
    }

    /// Palette color of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    pub fn color_at(&self, x: u32, y: u32) -> Rgb {
        self.palette.color(self.index_at(x, y))
    }

    /// Device codes in row-major order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.indices
            .iter()
            .map(move |&idx| self.palette.code(idx as usize))
    }

    /// Flat `[R, G, B, ...]` bytes using the palette colors.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }

    /// Render as an RGB image, for previews.
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| self.color_at(x, y).into())
    }
}
