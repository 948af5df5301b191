//! Panel geometry.

use crate::api::FrameError;

/// Pre-downscale ceiling applied to oversized sources before fitting.
pub const DEFAULT_PRESCALE: (u32, u32) = (2400, 1440);

/// Resolution of an e-paper panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSpec {
    pub width: u32,
    pub height: u32,
}

impl PanelSpec {
    /// 7.3" color panel: 800x480, 192,000-byte frames.
    pub const EPD_7IN3: Self = Self {
        width: 800,
        height: 480,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check the panel can carry a 4-bit frame: non-zero and an even width.
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::EmptyPanel {
                width: self.width,
                height: self.height,
            });
        }
        if self.width % 2 != 0 {
            return Err(FrameError::OddWidth { width: self.width });
        }
        Ok(())
    }

    /// Number of bytes in one frame: two pixels per byte.
    pub const fn frame_len(&self) -> usize {
        (self.width as usize * self.height as usize) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_frame_len() {
        assert_eq!(PanelSpec::EPD_7IN3.frame_len(), 192_000);
        assert!(PanelSpec::EPD_7IN3.validate().is_ok());
    }

    #[test]
    fn test_odd_width_rejected() {
        let err = PanelSpec::new(801, 480).validate().unwrap_err();
        assert!(matches!(err, FrameError::OddWidth { width: 801 }));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            PanelSpec::new(800, 0).validate(),
            Err(FrameError::EmptyPanel { .. })
        ));
        assert!(matches!(
            PanelSpec::new(0, 480).validate(),
            Err(FrameError::EmptyPanel { .. })
        ));
    }
}
