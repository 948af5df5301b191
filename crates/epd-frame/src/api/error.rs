//! Unified error type for the epd-frame public API.
//!
//! [`FrameError`] wraps every failure of the pipeline into a single enum for
//! convenient `?` propagation, and [`FrameError::kind`] classifies it as an
//! input problem, a configuration problem, or a broken precondition between
//! stages. None of them is retryable: the pipeline is deterministic.

use thiserror::Error;

use crate::palette::{PaletteError, ParseColorError};

/// Broad classification of a [`FrameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller handed over data the pipeline cannot work with.
    InvalidInput,
    /// Panel, palette or geometry settings are unusable.
    Configuration,
    /// Data passed between stages does not match the requested frame.
    PreconditionViolation,
}

/// Unified error type for the epd-frame public API.
///
/// # Example
///
/// ```
/// use epd_frame::{ErrorKind, FrameError, Palette};
///
/// fn create_palette() -> Result<Palette, FrameError> {
///     let palette = Palette::from_hex(&[("black", "#000000", 0), ("white", "#FFFFFF", 16)])?;
///     Ok(palette)
/// }
///
/// let err = create_palette().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Configuration);
/// ```
#[derive(Debug, Error)]
pub enum FrameError {
    /// Source image has no pixels
    #[error("input image has zero area ({width}x{height})")]
    EmptyImage {
        /// Source width
        width: u32,
        /// Source height
        height: u32,
    },

    /// Byte buffer handed to [`Frame::from_bytes`](crate::Frame::from_bytes) has the wrong size
    #[error("frame buffer for {width}x{height} must be {expected} bytes, got {actual}")]
    FrameLength {
        /// Panel width
        width: u32,
        /// Panel height
        height: u32,
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// A frame holds a code the palette does not define
    #[error("code {code} at pixel {index} is not defined by the palette")]
    UnknownCode {
        /// The undefined code
        code: u8,
        /// Pixel index in row-major order
        index: usize,
    },

    /// Palette validation failed
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Color parsing failed
    #[error("color parse error: {0}")]
    ParseColor(#[from] ParseColorError),

    /// Panel has no pixels
    #[error("panel dimensions must be non-zero, got {width}x{height}")]
    EmptyPanel {
        /// Panel width
        width: u32,
        /// Panel height
        height: u32,
    },

    /// Panel width cannot be split into pixel pairs
    #[error("panel width {width} is odd; 4-bit frames pack pixels in pairs")]
    OddWidth {
        /// Panel width
        width: u32,
    },

    /// Pre-downscale ceiling has a zero side
    #[error("pre-scale ceiling must be non-zero, got {width}x{height}")]
    InvalidPrescale {
        /// Ceiling width
        width: u32,
        /// Ceiling height
        height: u32,
    },

    /// Quantized image does not have the frame's dimensions
    #[error("quantized image is {actual_width}x{actual_height}, frame expects {width}x{height}")]
    DimensionMismatch {
        /// Frame width
        width: u32,
        /// Frame height
        height: u32,
        /// Image width
        actual_width: u32,
        /// Image height
        actual_height: u32,
    },

    /// Code slice does not have one code per frame pixel
    #[error("expected {expected} pixel codes, got {actual}")]
    CodeCount {
        /// Required number of codes
        expected: usize,
        /// Supplied number of codes
        actual: usize,
    },

    /// Palette index does not name a palette entry
    #[error("palette index {index} at pixel {pixel} is outside a {len}-color palette")]
    IndexOutOfPalette {
        /// The offending index
        index: u8,
        /// Pixel position in row-major order
        pixel: usize,
        /// Palette size
        len: usize,
    },

    /// Raw code does not fit in a nibble
    #[error("code {code} at pixel {index} does not fit in 4 bits")]
    CodeOutOfRange {
        /// The offending code
        code: u8,
        /// Pixel index in row-major order
        index: usize,
    },
}

impl FrameError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FrameError::EmptyImage { .. }
            | FrameError::FrameLength { .. }
            | FrameError::UnknownCode { .. } => ErrorKind::InvalidInput,
            FrameError::Palette(_)
            | FrameError::ParseColor(_)
            | FrameError::EmptyPanel { .. }
            | FrameError::OddWidth { .. }
            | FrameError::InvalidPrescale { .. } => ErrorKind::Configuration,
            FrameError::DimensionMismatch { .. }
            | FrameError::CodeCount { .. }
            | FrameError::IndexOutOfPalette { .. }
            | FrameError::CodeOutOfRange { .. } => ErrorKind::PreconditionViolation,
        }
    }
}
