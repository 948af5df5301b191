//! FramePipeline builder, the primary entry point for the crate.
//!
//! [`FramePipeline`] binds a panel and a palette once and then turns any
//! number of decoded images into packed frames.

use image::{DynamicImage, RgbImage};
use tracing::{debug, info};

use crate::color::Rgb;
use crate::frame::{pack, Frame};
use crate::geometry::{normalize, FitPolicy, GeometryOptions};
use crate::output::QuantizedImage;
use crate::palette::Palette;
use crate::panel::{PanelSpec, DEFAULT_PRESCALE};

use super::FrameError;

/// Full image-to-frame pipeline for one panel and palette.
///
/// - The constructor validates the panel, so a pipeline always targets a
///   frame-compatible geometry
/// - Configuration methods consume and return `self`
/// - [`render()`](Self::render) takes `&self`, so one pipeline serves many
///   images
///
/// # Example
///
/// ```
/// use epd_frame::{FitPolicy, FramePipeline, Palette, PanelSpec};
/// use image::{DynamicImage, RgbImage};
///
/// let pipeline = FramePipeline::new(PanelSpec::new(80, 48), Palette::six_color())?;
/// let image = DynamicImage::ImageRgb8(RgbImage::new(160, 120));
///
/// let frame = pipeline.render(&image, FitPolicy::CropFill, true)?;
/// assert_eq!(frame.len(), 80 * 48 / 2);
/// # Ok::<(), epd_frame::FrameError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FramePipeline {
    panel: PanelSpec,
    palette: Palette,
    prescale: Option<(u32, u32)>,
    background: Rgb,
}

impl FramePipeline {
    /// Create a pipeline for `panel` and `palette`.
    ///
    /// Letterbox borders default to the palette's background color and the
    /// pre-scale ceiling to 2400x1440.
    pub fn new(panel: PanelSpec, palette: Palette) -> Result<Self, FrameError> {
        panel.validate()?;
        let background = palette.background();
        Ok(Self {
            panel,
            palette,
            prescale: Some(DEFAULT_PRESCALE),
            background,
        })
    }

    /// Set or disable the pre-scale ceiling.
    #[inline]
    pub fn prescale(mut self, ceiling: Option<(u32, u32)>) -> Self {
        self.prescale = ceiling;
        self
    }

    /// Override the letterbox background color.
    #[inline]
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    #[inline]
    pub fn panel(&self) -> PanelSpec {
        self.panel
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Geometry options this pipeline uses for `fit`.
    pub fn geometry(&self, fit: FitPolicy) -> GeometryOptions {
        GeometryOptions::for_panel(self.panel, fit)
            .prescale(self.prescale)
            .background(self.background)
    }

    /// Normalize `image` to the panel canvas.
    pub fn normalize(&self, image: &DynamicImage, fit: FitPolicy) -> Result<RgbImage, FrameError> {
        normalize(image, &self.geometry(fit))
    }

    /// Quantize an already normalized image to the palette.
    pub fn quantize(&self, image: &RgbImage, dither: bool) -> QuantizedImage {
        crate::quantize::quantize(image, &self.palette, dither)
    }

    /// Run the whole pipeline: normalize, quantize and pack.
    pub fn render(
        &self,
        image: &DynamicImage,
        fit: FitPolicy,
        dither: bool,
    ) -> Result<Frame, FrameError> {
        self.render_with_preview(image, fit, dither)
            .map(|(frame, _)| frame)
    }

    /// Like [`render()`](Self::render), also returning the quantized image
    /// so callers can write a preview.
    pub fn render_with_preview(
        &self,
        image: &DynamicImage,
        fit: FitPolicy,
        dither: bool,
    ) -> Result<(Frame, QuantizedImage), FrameError> {
        debug!(
            src_width = image.width(),
            src_height = image.height(),
            panel_width = self.panel.width,
            panel_height = self.panel.height,
            %fit,
            dither,
            "Rendering frame"
        );

        let canvas = self.normalize(image, fit)?;
        let quantized = self.quantize(&canvas, dither);
        let frame = pack(&quantized, self.panel.width, self.panel.height)?;

        info!(
            width = frame.width(),
            height = frame.height(),
            bytes = frame.len(),
            colors = self.palette.len(),
            "Frame rendered"
        );
        Ok((frame, quantized))
    }
}
