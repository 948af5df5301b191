//! File-level conversion: decode, render, write.

use std::path::{Path, PathBuf};

use epd_frame::{FitPolicy, Frame, FramePipeline, Palette, PanelSpec};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::error::ConvertError;

/// Fully resolved settings for one conversion
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    pub panel_name: String,
    pub panel: PanelSpec,
    pub palette_name: String,
    pub palette: Palette,
    pub fit: FitPolicy,
    pub dither: bool,
    pub prescale: Option<(u32, u32)>,
}

impl ConvertSettings {
    /// Build the frame pipeline for these settings
    pub fn pipeline(&self) -> Result<FramePipeline, ConvertError> {
        let pipeline = FramePipeline::new(self.panel, self.palette.clone())?.prescale(self.prescale);
        Ok(pipeline)
    }
}

/// Summary printed after a conversion
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PathBuf>,
    pub panel: String,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
    pub palette: String,
    pub colors: usize,
    pub fit: String,
    pub dither: bool,
    pub sha256: String,
}

/// Hex-encoded SHA-256 of the frame bytes
pub fn frame_digest(frame: &Frame) -> String {
    hex::encode(Sha256::digest(frame.as_bytes()))
}

/// Decode an image file, guessing the format from its contents
pub fn decode_image(path: &Path) -> Result<image::DynamicImage, ConvertError> {
    let img = image::ImageReader::open(path)
        .map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| ConvertError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        color = ?img.color(),
        "Decoded image"
    );
    Ok(img)
}

/// Convert `input` into a frame at `output`, optionally writing a PNG preview
pub fn convert_file(
    input: &Path,
    output: &Path,
    preview: Option<&Path>,
    settings: &ConvertSettings,
) -> Result<ConversionSummary, ConvertError> {
    let pipeline = settings.pipeline()?;
    let img = decode_image(input)?;

    let (frame, quantized) = pipeline.render_with_preview(&img, settings.fit, settings.dither)?;

    std::fs::write(output, frame.as_bytes()).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    if let Some(preview) = preview {
        quantized
            .to_rgb_image()
            .save(preview)
            .map_err(|source| ConvertError::Encode {
                path: preview.to_path_buf(),
                source,
            })?;
        debug!(path = %preview.display(), "Wrote preview");
    }

    let summary = ConversionSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        preview: preview.map(Path::to_path_buf),
        panel: settings.panel_name.clone(),
        width: frame.width(),
        height: frame.height(),
        bytes: frame.len(),
        palette: settings.palette_name.clone(),
        colors: settings.palette.len(),
        fit: settings.fit.to_string(),
        dither: settings.dither,
        sha256: frame_digest(&frame),
    };
    info!(
        output = %output.display(),
        bytes = summary.bytes,
        sha256 = %summary.sha256,
        "Converted"
    );
    Ok(summary)
}

/// Read a frame file back
pub fn read_frame(path: &Path, panel: PanelSpec) -> Result<Frame, ConvertError> {
    let bytes = std::fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let frame = Frame::from_bytes(bytes, panel.width, panel.height)?;
    Ok(frame)
}

/// Render an existing frame file to a PNG through `palette`
pub fn inspect_file(
    input: &Path,
    output: &Path,
    panel: PanelSpec,
    palette: &Palette,
) -> Result<Frame, ConvertError> {
    let frame = read_frame(input, panel)?;
    frame
        .to_rgb_image(palette)?
        .save(output)
        .map_err(|source| ConvertError::Encode {
            path: output.to_path_buf(),
            source,
        })?;
    info!(input = %input.display(), output = %output.display(), "Rendered frame preview");
    Ok(frame)
}
