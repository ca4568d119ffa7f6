use egui::Color32;
use egui::ecolor::Hsva;

use crate::config::{SketchConfig, SliderRange};

const MARKER_SATURATION: f32 = 0.8;
const MARKER_VALUE: f32 = 0.75;

/// Map a hue in degrees onto the marker color wheel
pub fn hue_to_color(hue_degrees: f32) -> Color32 {
    let hue = hue_degrees.rem_euclid(360.0) / 360.0;
    Hsva::new(hue, MARKER_SATURATION, MARKER_VALUE, 1.0).into()
}

/// Live styling applied to new drawables and to the active preview.
///
/// Setters clamp to the configured slider ranges and return the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    width: f32,
    hue: f32,
    rotation: f32,
    sticker_size: f32,
    width_range: SliderRange,
    hue_range: SliderRange,
    rotation_range: SliderRange,
}

impl Default for StyleState {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl StyleState {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            width: config.width.default,
            hue: config.hue.default,
            rotation: config.rotation.default,
            sticker_size: config.sticker_size,
            width_range: config.width,
            hue_range: config.hue,
            rotation_range: config.rotation,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Marker color derived from the hue
    pub fn color(&self) -> Color32 {
        hue_to_color(self.hue)
    }

    /// Sticker rotation in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    pub fn set_width(&mut self, width: f32) -> f32 {
        self.width = self.width_range.clamp(width);
        self.width
    }

    pub fn set_hue(&mut self, hue: f32) -> f32 {
        self.hue = self.hue_range.clamp(hue);
        self.hue
    }

    pub fn set_rotation(&mut self, rotation: f32) -> f32 {
        self.rotation = self.rotation_range.clamp(rotation);
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_clamp_to_ranges() {
        let mut style = StyleState::default();
        assert_eq!(style.set_width(100.0), 36.0);
        assert_eq!(style.set_width(0.5), 2.0);
        assert_eq!(style.set_hue(-10.0), 0.0);
        assert_eq!(style.set_rotation(90.0), 90.0);
    }

    #[test]
    fn test_hue_wraps_around() {
        assert_eq!(hue_to_color(0.0), hue_to_color(360.0));
        assert_ne!(hue_to_color(0.0), hue_to_color(120.0));
    }

    #[test]
    fn test_color_follows_hue() {
        let mut style = StyleState::default();
        let before = style.color();
        style.set_hue(30.0);
        assert_ne!(style.color(), before);
        assert_eq!(style.color(), hue_to_color(30.0));
    }
}
