//! Canvas fitting policies.

use std::fmt;
use std::str::FromStr;

/// How a source of arbitrary aspect ratio is mapped onto the panel canvas.
///
/// There is deliberately no `Default`: which policy suits a picture frame is
/// the caller's decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitPolicy {
    /// Scale until the canvas is covered, then center-crop the overflow.
    ///
    /// Never leaves borders; may discard content.
    CropFill,

    /// Scale until the whole source fits, then center it on a background
    /// canvas.
    ///
    /// Never discards content; may leave uniform borders.
    LetterboxFit,

    /// Resize straight to the canvas, ignoring the aspect ratio.
    Stretch,
}

impl FitPolicy {
    /// Every policy, in declaration order.
    pub const ALL: [FitPolicy; 3] = [
        FitPolicy::CropFill,
        FitPolicy::LetterboxFit,
        FitPolicy::Stretch,
    ];

    /// Short name used in configuration files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            FitPolicy::CropFill => "crop",
            FitPolicy::LetterboxFit => "fit",
            FitPolicy::Stretch => "stretch",
        }
    }
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown fit policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fit policy '{0}' (expected crop, fit or stretch)")]
pub struct ParseFitPolicyError(pub String);

impl FromStr for FitPolicy {
    type Err = ParseFitPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "crop" | "crop-fill" | "fill" => Ok(FitPolicy::CropFill),
            "fit" | "letterbox" | "letterbox-fit" => Ok(FitPolicy::LetterboxFit),
            "stretch" => Ok(FitPolicy::Stretch),
            _ => Err(ParseFitPolicyError(s.to_string())),
        }
    }
}
