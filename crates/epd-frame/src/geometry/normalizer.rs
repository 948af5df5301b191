//! Geometry normalization: orientation, pre-downscale and canvas fitting.

use image::imageops;
use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::api::FrameError;

use super::resize::{crop_window, fit_within, resize_lanczos};
use super::{FitPolicy, GeometryOptions};

/// Bring an arbitrary decoded image to exactly the target canvas size.
///
/// Non-RGB inputs (grayscale, alpha, 16-bit) are converted to 8-bit RGB
/// first; alpha is dropped.
pub fn normalize(image: &DynamicImage, options: &GeometryOptions) -> Result<RgbImage, FrameError> {
    check_options(options)?;
    check_not_empty(image.width(), image.height())?;

    let rgb = match image {
        DynamicImage::ImageRgb8(rgb) => rgb.clone(),
        other => other.to_rgb8(),
    };
    Ok(normalize_checked(rgb, options))
}

/// [`normalize`] for an image that is already 8-bit RGB.
pub fn normalize_rgb(image: &RgbImage, options: &GeometryOptions) -> Result<RgbImage, FrameError> {
    check_options(options)?;
    check_not_empty(image.width(), image.height())?;
    Ok(normalize_checked(image.clone(), options))
}

fn check_options(options: &GeometryOptions) -> Result<(), FrameError> {
    if options.target_width == 0 || options.target_height == 0 {
        return Err(FrameError::EmptyPanel {
            width: options.target_width,
            height: options.target_height,
        });
    }
    if let Some((width, height)) = options.prescale {
        if width == 0 || height == 0 {
            return Err(FrameError::InvalidPrescale { width, height });
        }
    }
    Ok(())
}

fn check_not_empty(width: u32, height: u32) -> Result<(), FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::EmptyImage { width, height });
    }
    Ok(())
}

fn normalize_checked(mut img: RgbImage, options: &GeometryOptions) -> RgbImage {
    let (target_w, target_h) = (options.target_width, options.target_height);

    // Portrait sources are turned a quarter counter-clockwise: the top-right
    // corner becomes the top-left one.
    if img.height() > img.width() {
        debug!(
            width = img.width(),
            height = img.height(),
            "Rotating portrait source to landscape"
        );
        img = imageops::rotate270(&img);
    }

    if let Some((max_w, max_h)) = options.prescale {
        let (w, h) = img.dimensions();
        if w > max_w || h > max_h {
            let (new_w, new_h) = fit_within(w, h, max_w, max_h);
            debug!(max_w, max_h, "Pre-scaling oversized source");
            img = resize_lanczos(&img, new_w, new_h);
        }
    }

    let out = match options.fit {
        FitPolicy::CropFill => crop_fill(&img, target_w, target_h),
        FitPolicy::LetterboxFit => letterbox(&img, options),
        FitPolicy::Stretch => resize_lanczos(&img, target_w, target_h),
    };
    debug_assert_eq!(out.dimensions(), (target_w, target_h));
    out
}

fn crop_fill(img: &RgbImage, target_w: u32, target_h: u32) -> RgbImage {
    let (left, top, crop_w, crop_h) = crop_window(img.width(), img.height(), target_w, target_h);
    debug!(left, top, crop_w, crop_h, "Center-cropping to canvas aspect");
    let window = imageops::crop_imm(img, left, top, crop_w, crop_h).to_image();
    resize_lanczos(&window, target_w, target_h)
}

// Sources that already fit are centered at native size.
fn letterbox(img: &RgbImage, options: &GeometryOptions) -> RgbImage {
    let (target_w, target_h) = (options.target_width, options.target_height);
    let (w, h) = img.dimensions();
    let (new_w, new_h) = if w <= target_w && h <= target_h {
        (w, h)
    } else {
        fit_within(w, h, target_w, target_h)
    };
    let scaled = resize_lanczos(img, new_w, new_h);

    let mut canvas = RgbImage::from_pixel(target_w, target_h, options.background.into());
    let left = i64::from((target_w - new_w) / 2);
    let top = i64::from((target_h - new_h) / 2);
    imageops::replace(&mut canvas, &scaled, left, top);
    canvas
}
