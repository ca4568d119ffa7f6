use egui::emath::Rot2;
use egui::{Pos2, Vec2};

/// A canvas-local coordinate. The canvas origin is its top-left corner.
pub type Point = Pos2;

/// Rigid transform (rotation then translation) tracked by a drawing surface.
///
/// Mirrors the 2D canvas model: `translate` moves the origin along the
/// current (possibly rotated) axes, `rotate` turns the axes around the
/// current origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    translation: Vec2,
    angle: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        angle: 0.0,
    };

    /// Offset of the current origin from the canvas origin
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Accumulated rotation in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    fn rotation(&self) -> Rot2 {
        Rot2::from_angle(self.angle)
    }

    pub fn translate(&mut self, offset: Vec2) {
        self.translation += self.rotation() * offset;
    }

    pub fn rotate(&mut self, radians: f32) {
        self.angle += radians;
    }

    /// Map a point from the current local space into canvas space
    pub fn apply(&self, point: Point) -> Point {
        Pos2::ZERO + self.translation + self.rotation() * point.to_vec2()
    }
}
