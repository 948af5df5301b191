//! Packed frame buffer.

use image::RgbImage;

use crate::api::FrameError;
use crate::palette::Palette;

/// A packed 4-bit frame for a `width x height` panel.
///
/// Always `width * height / 2` bytes; see the [module docs](super) for the
/// layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub(crate) fn packed(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(bytes.len(), width as usize * height as usize / 2);
        Self {
            bytes,
            width,
            height,
        }
    }

    /// Wrap an existing frame buffer, for instance one read back from disk.
    pub fn from_bytes(bytes: Vec<u8>, width: u32, height: u32) -> Result<Self, FrameError> {
        crate::panel::PanelSpec::new(width, height).validate()?;
        let expected = width as usize * height as usize / 2;
        if bytes.len() != expected {
            return Err(FrameError::FrameLength {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self::packed(bytes, width, height))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Code of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the frame.
    pub fn code_at(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height, "({x}, {y}) outside frame");
        let index = y as usize * self.width as usize + x as usize;
        let byte = self.bytes[index / 2];
        if index % 2 == 0 {
            byte >> 4
        } else {
            byte & 0x0F
        }
    }

    /// All codes in row-major order.
    pub fn codes(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().flat_map(|&b| [b >> 4, b & 0x0F])
    }

    /// Render the frame with the colors of `palette`, for previews.
    ///
    /// Fails with [`FrameError::UnknownCode`] if the frame holds a code the
    /// palette does not define.
    pub fn to_rgb_image(&self, palette: &Palette) -> Result<RgbImage, FrameError> {
        let mut lut = [None; 16];
        for entry in palette.entries() {
            lut[entry.code() as usize] = Some(entry.color());
        }

        if let Some((index, code)) = self
            .codes()
            .enumerate()
            .find(|&(_, code)| lut[code as usize].is_none())
        {
            return Err(FrameError::UnknownCode { code, index });
        }

        Ok(RgbImage::from_fn(self.width, self.height, |x, y| {
            lut[self.code_at(x, y) as usize]
                .unwrap_or_default()
                .into()
        }))
    }
}
