use egui::Vec2;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

use crate::error::{SketchError, SketchResult};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Bounds, granularity and starting value of a toolbar slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, step: f32, default: f32) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.min..=self.max
    }

    /// Clamp `value` into the range. NaN falls back to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.max(self.min).min(self.max)
    }

    fn validate(&self, field: &'static str) -> SketchResult<()> {
        let finite = [self.min, self.max, self.step, self.default]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(invalid(field, "values must be finite"));
        }
        if self.min > self.max {
            return Err(invalid(
                field,
                format!("min {} is greater than max {}", self.min, self.max),
            ));
        }
        if self.step <= 0.0 {
            return Err(invalid(field, format!("step {} must be positive", self.step)));
        }
        if !self.range().contains(&self.default) {
            return Err(invalid(
                field,
                format!(
                    "default {} is outside {}..={}",
                    self.default, self.min, self.max
                ),
            ));
        }
        Ok(())
    }
}

/// Startup settings for the sketchpad.
///
/// Every field is optional in the JSON form; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Logical canvas size in points
    pub canvas_size: [f32; 2],
    /// Marker line width
    pub width: SliderRange,
    /// Marker hue in degrees
    pub hue: SliderRange,
    /// Sticker rotation in degrees
    pub rotation: SliderRange,
    /// Font size of placed stickers in pixels
    pub sticker_size: f32,
    /// The fixed sticker palette
    pub stickers: Vec<String>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256.0, 256.0],
            width: SliderRange::new(2.0, 36.0, 1.0, 8.0),
            hue: SliderRange::new(0.0, 360.0, 1.0, 210.0),
            rotation: SliderRange::new(0.0, 360.0, 1.0, 0.0),
            sticker_size: 32.0,
            stickers: vec!["🐸".to_owned(), "🌮".to_owned(), "⭐".to_owned()],
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Ignoring config {}: {}",
                    Path::new(&path).display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> SketchResult<()> {
        let [w, h] = self.canvas_size;
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
            return Err(invalid(
                "canvas_size",
                format!("{w}x{h} is not a positive size"),
            ));
        }
        self.width.validate("width")?;
        self.hue.validate("hue")?;
        self.rotation.validate("rotation")?;
        if self.width.min <= 0.0 {
            return Err(invalid("width", "line width must stay positive"));
        }
        if !(self.sticker_size > 0.0 && self.sticker_size.is_finite()) {
            return Err(invalid(
                "sticker_size",
                format!("{} is not a positive font size", self.sticker_size),
            ));
        }
        if self.stickers.iter().any(|glyph| glyph.trim().is_empty()) {
            return Err(invalid("stickers", "glyphs must not be blank"));
        }
        Ok(())
    }

    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_size[0], self.canvas_size[1])
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> SketchError {
    SketchError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
