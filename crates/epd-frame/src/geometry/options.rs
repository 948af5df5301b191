//! Geometry options and configuration.

use crate::color::Rgb;
use crate::panel::{PanelSpec, DEFAULT_PRESCALE};

use super::FitPolicy;

/// Configuration for [`normalize`](super::normalize).
///
/// # Defaults
///
/// [`GeometryOptions::new`] takes the two values that have no sensible
/// default, the target size and the fit policy. The rest default to:
/// - Pre-scale ceiling: 2400x1440
/// - Background: white
///
/// # Example
///
/// ```
/// use epd_frame::{FitPolicy, GeometryOptions, Rgb};
///
/// let options = GeometryOptions::new(800, 480, FitPolicy::LetterboxFit)
///     .prescale(None)
///     .background(Rgb::new(230, 230, 220));
///
/// assert_eq!(options.prescale, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryOptions {
    /// Output width in pixels.
    pub target_width: u32,

    /// Output height in pixels.
    pub target_height: u32,

    /// Canvas fitting policy.
    pub fit: FitPolicy,

    /// Sources larger than this (after rotation) are downscaled first,
    /// preserving aspect ratio. `None` disables the step.
    pub prescale: Option<(u32, u32)>,

    /// Fill color for letterbox borders.
    pub background: Rgb,
}

impl GeometryOptions {
    /// Create options for the given target size and fit policy.
    pub fn new(target_width: u32, target_height: u32, fit: FitPolicy) -> Self {
        Self {
            target_width,
            target_height,
            fit,
            prescale: Some(DEFAULT_PRESCALE),
            background: Rgb::WHITE,
        }
    }

    /// Create options targeting a panel.
    pub fn for_panel(panel: PanelSpec, fit: FitPolicy) -> Self {
        Self::new(panel.width, panel.height, fit)
    }

    /// Set or disable the pre-scale ceiling.
    #[inline]
    pub fn prescale(mut self, ceiling: Option<(u32, u32)>) -> Self {
        self.prescale = ceiling;
        self
    }

    /// Set the letterbox background color.
    #[inline]
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }
}
