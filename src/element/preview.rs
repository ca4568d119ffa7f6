use egui::Color32;

use super::{Drawable, PREVIEW_OPACITY, common};
use crate::geometry::Point;
use crate::surface::Surface;

/// Outline showing where and how wide the next marker dot would land
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPreview {
    width: f32,
    color: Color32,
    position: Option<Point>,
}

impl MarkerPreview {
    pub fn new(width: f32, color: Color32) -> Self {
        Self {
            width,
            color,
            position: None,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<Point>) {
        self.position = position;
    }
}

impl Drawable for MarkerPreview {
    fn render(&self, surface: &mut dyn Surface) {
        let Some(position) = self.position else {
            return;
        };

        surface.save();
        surface.set_line_width(1.0);
        surface.set_stroke_color(self.color);
        common::circle_path(surface, position, self.width);
        surface.stroke();
        surface.restore();
    }

    fn drag(&mut self, point: Point) {
        self.position = Some(point);
    }
}

/// Translucent copy of the sticker that a click would place
#[derive(Debug, Clone, PartialEq)]
pub struct StickerPreview {
    glyph: String,
    size: f32,
    rotation_degrees: f32,
    position: Option<Point>,
}

impl StickerPreview {
    pub fn new(glyph: impl Into<String>, size: f32, rotation_degrees: f32) -> Self {
        Self {
            glyph: glyph.into(),
            size,
            rotation_degrees,
            position: None,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn set_rotation_degrees(&mut self, rotation_degrees: f32) {
        self.rotation_degrees = rotation_degrees;
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<Point>) {
        self.position = position;
    }
}

impl Drawable for StickerPreview {
    fn render(&self, surface: &mut dyn Surface) {
        let Some(position) = self.position else {
            return;
        };

        surface.save();
        surface.set_global_alpha(PREVIEW_OPACITY);
        common::draw_glyph(
            surface,
            &self.glyph,
            self.size,
            self.rotation_degrees,
            position,
        );
        surface.restore();
    }

    fn drag(&mut self, point: Point) {
        self.position = Some(point);
    }
}

/// The single preview owned by the session, matching the active tool
#[derive(Debug, Clone, PartialEq)]
pub enum ToolPreview {
    Marker(MarkerPreview),
    Sticker(StickerPreview),
}

impl ToolPreview {
    pub fn position(&self) -> Option<Point> {
        match self {
            ToolPreview::Marker(p) => p.position(),
            ToolPreview::Sticker(p) => p.position(),
        }
    }

    /// Place the preview under the pointer
    pub fn move_to(&mut self, point: Point) {
        self.drag(point);
    }

    /// Hide the preview until the pointer comes back
    pub fn clear_position(&mut self) {
        match self {
            ToolPreview::Marker(p) => p.set_position(None),
            ToolPreview::Sticker(p) => p.set_position(None),
        }
    }

    pub fn as_marker(&self) -> Option<&MarkerPreview> {
        match self {
            ToolPreview::Marker(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_marker_mut(&mut self) -> Option<&mut MarkerPreview> {
        match self {
            ToolPreview::Marker(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&StickerPreview> {
        match self {
            ToolPreview::Sticker(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_sticker_mut(&mut self) -> Option<&mut StickerPreview> {
        match self {
            ToolPreview::Sticker(p) => Some(p),
            _ => None,
        }
    }
}

impl Drawable for ToolPreview {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            ToolPreview::Marker(p) => p.render(surface),
            ToolPreview::Sticker(p) => p.render(surface),
        }
    }

    fn drag(&mut self, point: Point) {
        match self {
            ToolPreview::Marker(p) => p.drag(point),
            ToolPreview::Sticker(p) => p.drag(point),
        }
    }
}
