//! Demo configuration file (JSON)
//!
//! Every field has a default, so a partial file (or `{}`) is valid.

use crate::error::ConfigError;
use crate::raster::GradientStyle;
use crate::surface::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// PSF1 font for the byte range
    pub font: Option<PathBuf>,
    /// BDF font imported as the wide table
    pub bdf: Option<PathBuf>,
    pub background: GradientConfig,
    pub lines: Vec<TextLine>,
}

/// Background gradient; `stops` holds 2 to 4 colors, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub stops: Vec<[u8; 3]>,
    pub scanlines: bool,
    pub line_noise: bool,
    pub pixel_noise: bool,
    pub seed: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub x: i32,
    pub y: i32,
    #[serde(default = "white")]
    pub color: [u8; 3],
}

fn white() -> [u8; 3] {
    [255, 255, 255]
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: crate::display::DEFAULT_WIDTH,
            height: crate::display::DEFAULT_HEIGHT,
            vsync: true,
            font: None,
            bdf: None,
            background: GradientConfig::default(),
            lines: vec![
                TextLine {
                    text: "Hello, World!".into(),
                    x: 20,
                    y: 20,
                    color: white(),
                },
                TextLine {
                    text: "Привет, Мир!".into(),
                    x: 20,
                    y: 40,
                    color: [255, 220, 120],
                },
            ],
        }
    }
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            stops: vec![[16, 16, 64], [64, 16, 96], [160, 48, 96]],
            scanlines: true,
            line_noise: true,
            pixel_noise: false,
            seed: 0x5EED,
        }
    }
}

impl GradientConfig {
    /// Unused stop slots repeat the last color. A stop count outside 2..=4
    /// is passed through and renders as two stops.
    pub fn to_style(&self) -> GradientStyle {
        let last = self.stops.last().copied().unwrap_or([0, 0, 0]);
        let mut stops = [Rgb::from(last); 4];
        for (slot, color) in stops.iter_mut().zip(&self.stops) {
            *slot = Rgb::from(*color);
        }

        GradientStyle {
            stops,
            num_stops: i32::try_from(self.stops.len()).unwrap_or(i32::MAX),
            scanlines: self.scanlines,
            line_noise: self.line_noise,
            pixel_noise: self.pixel_noise,
            seed: self.seed,
        }
    }
}
