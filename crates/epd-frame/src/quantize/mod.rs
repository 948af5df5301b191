//! Palette quantization.
//!
//! Maps each pixel of a normalized RGB image to an index into a
//! [`Palette`]. Two strategies implement [`Quantize`]:
//!
//! - [`FloydSteinberg`]: error diffusion, left-to-right on every row
//! - [`NearestColor`]: independent nearest-color mapping
//!
//! Distances are squared Euclidean in plain RGB. On a tie the entry listed
//! first in the palette wins.
//!
//! # Example
//!
//! ```
//! use epd_frame::{quantize, Palette};
//! use image::{Rgb, RgbImage};
//!
//! let img = RgbImage::from_pixel(4, 2, Rgb([250, 250, 250]));
//! let quantized = quantize(&img, &Palette::six_color(), true);
//!
//! assert_eq!(quantized.indices().len(), 8);
//! assert!(quantized.codes().all(|code| code == 0x1));
//! ```

mod floyd_steinberg;
mod kernel;
mod nearest;

pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use nearest::NearestColor;

use image::RgbImage;
use tracing::debug;

use crate::color::Rgb;
use crate::output::QuantizedImage;
use crate::palette::Palette;

/// A strategy that turns an RGB image into palette indices.
pub trait Quantize {
    /// Quantize an image to palette indices.
    ///
    /// Returns one index per pixel in row-major order, each in
    /// `0..palette.len()`.
    fn quantize(&self, image: &RgbImage, palette: &Palette) -> Vec<u8>;
}

/// Quantize `image` to `palette`, with Floyd-Steinberg diffusion when
/// `dither` is set.
pub fn quantize(image: &RgbImage, palette: &Palette, dither: bool) -> QuantizedImage {
    let (width, height) = image.dimensions();
    debug!(width, height, colors = palette.len(), dither, "Quantizing image");

    let indices = if dither {
        FloydSteinberg.quantize(image, palette)
    } else {
        NearestColor.quantize(image, palette)
    };
    QuantizedImage::from_quantizer(indices, width, height, palette.clone())
}

/// Error buffer for error diffusion.
///
/// Keeps only the rows the kernel can reach (`max_dy + 1`) instead of a
/// full-image buffer.
///
/// 1. Create with `new(width, row_depth)`
/// 2. For each row, read with `get_accumulated(x)` and diffuse with
///    `add_error(x, dy, error)`
/// 3. Call `advance_row()` when the row is done
#[derive(Debug)]
pub struct ErrorBuffer {
    /// rows[0] is the current row, rows[1] the next, and so on.
    rows: Vec<Vec<[f32; 3]>>,
    width: usize,
}

impl ErrorBuffer {
    /// Create a zeroed buffer `row_depth` rows deep.
    pub fn new(width: usize, row_depth: usize) -> Self {
        Self {
            rows: (0..row_depth).map(|_| vec![[0.0; 3]; width]).collect(),
            width,
        }
    }

    /// Error accumulated so far for a pixel of the current row.
    #[inline]
    pub fn get_accumulated(&self, x: usize) -> [f32; 3] {
        self.rows[0][x]
    }

    /// Add error to a pixel `row_offset` rows below the current one.
    ///
    /// Out-of-bounds targets are ignored.
    #[inline]
    pub fn add_error(&mut self, x: usize, row_offset: usize, error: [f32; 3]) {
        if x < self.width && row_offset < self.rows.len() {
            for (acc, e) in self.rows[row_offset][x].iter_mut().zip(error) {
                *acc += e;
            }
        }
    }

    /// Move to the next row: drop the current one and append a zeroed row.
    pub fn advance_row(&mut self) {
        // [0,1,2] -> [1,2,0]
        self.rows.rotate_left(1);
        if let Some(last) = self.rows.last_mut() {
            last.fill([0.0; 3]);
        }
    }
}

/// Error diffusion loop shared by kernel-based quantizers.
pub(crate) fn diffuse_with_kernel(image: &RgbImage, palette: &Palette, kernel: &Kernel) -> Vec<u8> {
    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);
    let mut output = Vec::with_capacity(width * height);
    let mut error_buf = ErrorBuffer::new(width, kernel.max_dy + 1);

    for (y, row) in image.rows().enumerate() {
        for (x, pixel) in row.enumerate() {
            let accumulated = error_buf.get_accumulated(x);

            // Wanted colors are clamped to [0, 255], so each error is within
            // +-255 and the weights into one pixel sum to 1: accumulated
            // error never exceeds one full channel swing.
            debug_assert!(
                accumulated.iter().all(|e| e.abs() <= 255.0 + 1e-3),
                "accumulated error {accumulated:?} out of bounds at ({x}, {y})"
            );

            let wanted: [f32; 3] = std::array::from_fn(|c| {
                (f32::from(pixel.0[c]) + accumulated[c]).clamp(0.0, 255.0)
            });
            let probe = Rgb::new(
                wanted[0].round() as u8,
                wanted[1].round() as u8,
                wanted[2].round() as u8,
            );

            let (nearest, _dist) = palette.find_nearest(probe);
            output.push(nearest as u8);

            let chosen = palette.color(nearest).to_bytes();
            let error = [
                wanted[0] - f32::from(chosen[0]),
                wanted[1] - f32::from(chosen[1]),
                wanted[2] - f32::from(chosen[2]),
            ];

            spread_error(&mut error_buf, kernel, (x, y), (width, height), error);
        }
        error_buf.advance_row();
    }

    output
}

/// Hand the error of pixel `(x, y)` to its kernel neighbors.
///
/// Shares that would land outside the image are dropped.
pub(crate) fn spread_error(
    error_buf: &mut ErrorBuffer,
    kernel: &Kernel,
    (x, y): (usize, usize),
    (width, height): (usize, usize),
    error: [f32; 3],
) {
    let divisor = f32::from(kernel.divisor);
    for &(dx, dy, weight) in kernel.entries {
        let nx = x as i32 + dx;
        let ny = y + dy as usize;
        if nx < 0 || nx as usize >= width || ny >= height {
            continue;
        }
        let share = f32::from(weight) / divisor;
        error_buf.add_error(
            nx as usize,
            dy as usize,
            [error[0] * share, error[1] * share, error[2] * share],
        );
    }
}
