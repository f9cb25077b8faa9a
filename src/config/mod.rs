// src/config/mod.rs
//! Color settings for the spectrum and waterfall views.
//!
//! Every field has a default, so a settings document only needs to name what
//! it changes:
//!
//! ```json
//! { "spectrum": { "foreground_colors": [[255, 0, 0], [0, 0, 255]] } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render::{Color, gradient::check_stops};

/// Top-level settings document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub spectrum: SpectrumSettings,
    pub waterfall: WaterfallSettings,
}

/// Stops for the bar view. The background fills each column above its
/// threshold row, the foreground fills it from there down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectrumSettings {
    pub foreground_colors: Vec<Color>,
    pub background_colors: Vec<Color>,
}

impl Default for SpectrumSettings {
    fn default() -> Self {
        Self {
            foreground_colors: vec![
                Color::rgb(112, 180, 255),
                Color::rgb(0, 124, 255),
                Color::rgb(0, 64, 152),
            ],
            background_colors: vec![Color::rgb(0, 7, 36), Color::rgb(0, 23, 58)],
        }
    }
}

/// Stops for the waterfall lookup table, from quiet to loud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterfallSettings {
    pub colors: Vec<Color>,
}

impl Default for WaterfallSettings {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb(0, 0, 32),
                Color::rgb(0, 0, 200),
                Color::rgb(0, 200, 200),
                Color::rgb(240, 240, 0),
                Color::rgb(255, 32, 0),
            ],
        }
    }
}

impl Settings {
    /// Parse and validate a JSON settings document.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Every stop list must be able to form a gradient.
    pub fn validate(&self) -> Result<()> {
        check_stops(&self.spectrum.foreground_colors)?;
        check_stops(&self.spectrum.background_colors)?;
        check_stops(&self.waterfall.colors)?;
        Ok(())
    }
}
