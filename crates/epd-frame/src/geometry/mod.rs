//! Geometry normalization for panel canvases.
//!
//! [`normalize`] turns a decoded image of any size, orientation and pixel
//! format into an 8-bit RGB image of exactly the panel's size:
//!
//! 1. **Orientation** - portrait sources (height > width) are rotated a
//!    quarter turn counter-clockwise. Square sources are left alone.
//! 2. **Pre-scale** - sources larger than the ceiling (2400x1440 by default)
//!    are downscaled with their aspect ratio preserved. Smaller sources are
//!    never upscaled here.
//! 3. **Fit** - the image is mapped onto the canvas according to the
//!    [`FitPolicy`].
//!
//! All resampling uses a Lanczos3 filter.
//!
//! ```
//! use epd_frame::{normalize, FitPolicy, GeometryOptions};
//! use image::{DynamicImage, RgbImage};
//!
//! let src = DynamicImage::ImageRgb8(RgbImage::new(1600, 1200));
//! let options = GeometryOptions::new(800, 480, FitPolicy::CropFill);
//! let canvas = normalize(&src, &options).unwrap();
//! assert_eq!(canvas.dimensions(), (800, 480));
//! ```

mod fit;
mod normalizer;
mod options;
mod resize;

pub use fit::{FitPolicy, ParseFitPolicyError};
pub use normalizer::{normalize, normalize_rgb};
pub use options::GeometryOptions;
pub use resize::{crop_window, fit_within, resize_lanczos};
