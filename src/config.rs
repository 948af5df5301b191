use std::collections::BTreeMap;
use std::path::Path;

use epd_frame::{FitPolicy, Palette, PanelSpec, DEFAULT_PRESCALE};
use serde::Deserialize;

use crate::convert::ConvertSettings;
use crate::error::ConvertError;

/// Name of the built-in 7.3" panel.
pub const DEFAULT_PANEL: &str = "epd7in3";

/// Name of the built-in 6-color palette.
pub const SIX_COLOR: &str = "six-color";

/// Name of the built-in 7-color palette.
pub const SEVEN_COLOR: &str = "seven-color";

/// Application configuration loaded from a YAML file
///
/// Panels and palettes from the file are added to the built-in ones; an
/// entry with a built-in name replaces it.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Panel definitions by name
    #[serde(default)]
    pub panels: BTreeMap<String, PanelConfig>,

    /// Palette definitions by name
    #[serde(default)]
    pub palettes: BTreeMap<String, Vec<PaletteEntryConfig>>,

    /// Settings used when the command line does not override them
    #[serde(default)]
    pub defaults: Defaults,
}

/// Panel resolution
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    pub width: u32,
    pub height: u32,
}

/// One palette color with its device code
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PaletteEntryConfig {
    pub name: String,

    /// Hex color, e.g. "#C85032"
    pub color: String,

    pub code: u8,
}

/// Pre-scale ceiling
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct PrescaleConfig {
    pub width: u32,
    pub height: u32,
}

/// Default conversion settings
#[derive(Debug, Deserialize, Clone)]
pub struct Defaults {
    #[serde(default = "default_panel")]
    pub panel: String,

    #[serde(default = "default_palette")]
    pub palette: String,

    /// Fit policy name: crop, fit or stretch
    #[serde(default = "default_fit")]
    pub fit: String,

    #[serde(default = "default_dither")]
    pub dither: bool,

    /// `null` disables the pre-scale step
    #[serde(default = "default_prescale")]
    pub prescale: Option<PrescaleConfig>,
}

fn default_panel() -> String {
    DEFAULT_PANEL.to_string()
}

fn default_palette() -> String {
    SIX_COLOR.to_string()
}

fn default_fit() -> String {
    FitPolicy::CropFill.to_string()
}

fn default_dither() -> bool {
    true
}

fn default_prescale() -> Option<PrescaleConfig> {
    let (width, height) = DEFAULT_PRESCALE;
    Some(PrescaleConfig { width, height })
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            panel: default_panel(),
            palette: default_palette(),
            fit: default_fit(),
            dither: default_dither(),
            prescale: default_prescale(),
        }
    }
}

/// Command-line overrides applied on top of [`Defaults`]
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub panel: Option<String>,
    pub palette: Option<String>,
    pub fit: Option<FitPolicy>,
    pub dither: Option<bool>,
}

fn palette_config(palette: &Palette) -> Vec<PaletteEntryConfig> {
    palette
        .entries()
        .iter()
        .map(|e| PaletteEntryConfig {
            name: e.name().to_string(),
            color: e.color().to_string(),
            code: e.code(),
        })
        .collect()
}

impl AppConfig {
    /// Load configuration from a YAML file, or the built-ins when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConvertError> {
        let Some(path) = path else {
            tracing::debug!("No configuration file, using built-in defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| ConvertError::Config {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(
            path = %path.display(),
            panels = config.panels.len(),
            palettes = config.palettes.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse YAML and merge it over the built-in panels and palettes
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(content)?;
        let builtin = Self::default();
        for (name, panel) in builtin.panels {
            config.panels.entry(name).or_insert(panel);
        }
        for (name, palette) in builtin.palettes {
            config.palettes.entry(name).or_insert(palette);
        }
        Ok(config)
    }

    /// Look up a panel by name
    pub fn panel(&self, name: &str) -> Result<PanelSpec, ConvertError> {
        self.panels
            .get(name)
            .map(|p| PanelSpec::new(p.width, p.height))
            .ok_or_else(|| ConvertError::UnknownPanel(name.to_string()))
    }

    /// Look up and validate a palette by name
    pub fn palette(&self, name: &str) -> Result<Palette, ConvertError> {
        let entries = self
            .palettes
            .get(name)
            .ok_or_else(|| ConvertError::UnknownPalette(name.to_string()))?;
        let hex: Vec<(&str, &str, u8)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.color.as_str(), e.code))
            .collect();
        let palette = Palette::from_hex(&hex).map_err(epd_frame::FrameError::from)?;
        Ok(palette)
    }

    /// Resolve the settings for one conversion
    pub fn settings(&self, overrides: &Overrides) -> Result<ConvertSettings, ConvertError> {
        let panel_name = overrides
            .panel
            .clone()
            .unwrap_or_else(|| self.defaults.panel.clone());
        let palette_name = overrides
            .palette
            .clone()
            .unwrap_or_else(|| self.defaults.palette.clone());
        let fit = match overrides.fit {
            Some(fit) => fit,
            None => self.defaults.fit.parse()?,
        };

        Ok(ConvertSettings {
            panel: self.panel(&panel_name)?,
            panel_name,
            palette: self.palette(&palette_name)?,
            palette_name,
            fit,
            dither: overrides.dither.unwrap_or(self.defaults.dither),
            prescale: self.defaults.prescale.map(|p| (p.width, p.height)),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut panels = BTreeMap::new();
        panels.insert(
            DEFAULT_PANEL.to_string(),
            PanelConfig {
                width: PanelSpec::EPD_7IN3.width,
                height: PanelSpec::EPD_7IN3.height,
            },
        );

        let mut palettes = BTreeMap::new();
        palettes.insert(SIX_COLOR.to_string(), palette_config(&Palette::six_color()));
        palettes.insert(
            SEVEN_COLOR.to_string(),
            palette_config(&Palette::seven_color()),
        );

        Self {
            panels,
            palettes,
            defaults: Defaults::default(),
        }
    }
}
