//! Output of the quantization stage.
//!
//! [`QuantizedImage`] keeps one palette index per pixel together with the
//! palette that produced it. The frame packer consumes it; the preview
//! helpers render it back to RGB.

mod quantized_image;

pub use quantized_image::QuantizedImage;
