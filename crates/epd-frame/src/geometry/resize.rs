//! Lanczos3 resampling and the size arithmetic behind the fit policies.
//!
//! Sizes are computed with integer cross-multiplication so aspect
//! comparisons are exact.

use image::imageops::{self, FilterType};
use image::RgbImage;
use tracing::debug;

/// Resize to exactly `new_width x new_height` with Lanczos3.
///
/// Returns a copy of the input without resampling when the size already
/// matches.
pub fn resize_lanczos(img: &RgbImage, new_width: u32, new_height: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    if width == new_width && height == new_height {
        debug!(width, height, "Image already at requested size, skipping resize");
        return img.clone();
    }

    debug!(width, height, new_width, new_height, "Resizing image (Lanczos3)");
    imageops::resize(img, new_width, new_height, FilterType::Lanczos3)
}

/// Largest size with the source aspect ratio that fits inside `bound_w x bound_h`.
///
/// May be larger than the source; callers that must never upscale check
/// that first. Both sides are at least 1.
pub fn fit_within(width: u32, height: u32, bound_w: u32, bound_h: u32) -> (u32, u32) {
    let (w, h) = (u64::from(width), u64::from(height));
    let (bw, bh) = (u64::from(bound_w), u64::from(bound_h));

    if w * bh >= h * bw {
        // Width is the limiting side
        let new_h = (h * bw + w / 2) / w;
        (bound_w, narrow(new_h, bound_h))
    } else {
        let new_w = (w * bh + h / 2) / h;
        (narrow(new_w, bound_w), bound_h)
    }
}

/// Centered window of the source with the target's aspect ratio.
///
/// Returns `(left, top, width, height)` in source pixels. Scaling this
/// window to the target is the same as scaling the whole source to cover
/// the target and cutting the overflow, but the resampling cost is bounded
/// by the window instead of the covering size.
pub fn crop_window(
    width: u32,
    height: u32,
    target_w: u32,
    target_h: u32,
) -> (u32, u32, u32, u32) {
    let (w, h) = (u64::from(width), u64::from(height));
    let (tw, th) = (u64::from(target_w), u64::from(target_h));

    if w * th > h * tw {
        // Source is wider than the target: keep full height, trim the sides
        let crop_w = narrow((h * tw + th / 2) / th, width);
        ((width - crop_w) / 2, 0, crop_w, height)
    } else {
        let crop_h = narrow((w * th + tw / 2) / tw, height);
        (0, (height - crop_h) / 2, width, crop_h)
    }
}

// Clamp a computed side into 1..=max.
fn narrow(side: u64, max: u32) -> u32 {
    u32::try_from(side).map_or(max, |side| side.clamp(1, max))
}
