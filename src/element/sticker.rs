use super::{Drawable, DrawableId, common};
use crate::geometry::Point;
use crate::surface::Surface;

/// An emoji glyph placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: DrawableId,
    position: Point,
    glyph: String,
    /// Font size in pixels
    size: f32,
    rotation_degrees: f32,
}

impl Sticker {
    pub fn new(position: Point, glyph: impl Into<String>, size: f32, rotation_degrees: f32) -> Self {
        Self {
            id: DrawableId::new(),
            position,
            glyph: glyph.into(),
            size,
            rotation_degrees,
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    pub fn position(&self) -> Point {
        self.position
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
}

impl Drawable for Sticker {
    fn render(&self, surface: &mut dyn Surface) {
        common::draw_glyph(
            surface,
            &self.glyph,
            self.size,
            self.rotation_degrees,
            self.position,
        );
    }

    /// Stickers follow the pointer rather than accumulating points
    fn drag(&mut self, point: Point) {
        self.position = point;
    }
}
