//! 4-bit panel frames.
//!
//! A frame is the raw byte buffer a panel driver expects: pixels in
//! row-major order, two per byte, the left pixel of each pair in the high
//! nibble. There is no header and no per-row padding, so a frame for a
//! `W x H` panel is exactly `W * H / 2` bytes.
//!
//! ```text
//! byte[row * (W / 2) + k] = (code(2k, row) << 4) | code(2k + 1, row)
//! ```

mod frame;
mod packer;

pub use frame::Frame;
pub use packer::{pack, pack_codes};
