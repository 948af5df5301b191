use std::path::PathBuf;

use epd_frame::{FrameError, ParseFitPolicyError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode preview {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unknown panel: {0}")]
    UnknownPanel(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Invalid fit policy: {0}")]
    Fit(#[from] ParseFitPolicyError),

    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use epd_frame::{ErrorKind, PanelSpec};

    #[test]
    fn test_unknown_palette_message() {
        let error = ConvertError::UnknownPalette("sepia".to_string());
        assert_eq!(error.to_string(), "Unknown palette: sepia");
    }

    #[test]
    fn test_read_error_names_path() {
        let error = ConvertError::Read {
            path: PathBuf::from("/tmp/missing.bin"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "Failed to read /tmp/missing.bin: not found");
    }

    #[test]
    fn test_from_frame_error() {
        let frame_error = PanelSpec::new(801, 480).validate().unwrap_err();
        let error: ConvertError = frame_error.into();
        match error {
            ConvertError::Frame(e) => assert_eq!(e.kind(), ErrorKind::Configuration),
            _ => panic!("Expected Frame variant"),
        }
    }

    #[test]
    fn test_from_fit_error() {
        let error: ConvertError = "zoom".parse::<epd_frame::FitPolicy>().unwrap_err().into();
        assert_eq!(
            error.to_string(),
            "Invalid fit policy: unknown fit policy 'zoom' (expected crop, fit or stretch)"
        );
    }
}
