//! Packing device codes into 4-bit frames.

use tracing::debug;

use crate::api::FrameError;
use crate::output::QuantizedImage;
use crate::palette::MAX_CODE;
use crate::panel::PanelSpec;

use super::Frame;

/// Pack a quantized image into a frame for a `width x height` panel.
///
/// The image must have exactly the panel's dimensions. Codes come from the
/// image's palette, which already guarantees they fit in 4 bits.
pub fn pack(image: &QuantizedImage, width: u32, height: u32) -> Result<Frame, FrameError> {
    PanelSpec::new(width, height).validate()?;
    if (image.width(), image.height()) != (width, height) {
        return Err(FrameError::DimensionMismatch {
            width,
            height,
            actual_width: image.width(),
            actual_height: image.height(),
        });
    }

    let codes: Vec<u8> = image.codes().collect();
    Ok(Frame::packed(pack_pairs(&codes), width, height))
}

/// Pack raw device codes, one per pixel in row-major order.
///
/// Every code must be at most `0x0F`.
pub fn pack_codes(codes: &[u8], width: u32, height: u32) -> Result<Frame, FrameError> {
    let panel = PanelSpec::new(width, height);
    panel.validate()?;

    let expected = width as usize * height as usize;
    if codes.len() != expected {
        return Err(FrameError::CodeCount {
            expected,
            actual: codes.len(),
        });
    }
    if let Some((index, &code)) = codes.iter().enumerate().find(|&(_, &c)| c > MAX_CODE) {
        return Err(FrameError::CodeOutOfRange { code, index });
    }

    Ok(Frame::packed(pack_pairs(codes), width, height))
}

// Width is even, so pairs never straddle a row boundary and a flat
// chunking of the row-major codes matches the per-row layout.
fn pack_pairs(codes: &[u8]) -> Vec<u8> {
    let packed: Vec<u8> = codes
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect();
    debug!(pixels = codes.len(), bytes = packed.len(), "Packed 4-bit frame");
    packed
}
