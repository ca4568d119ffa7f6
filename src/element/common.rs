use egui::Color32;
use std::f32::consts::TAU;

use crate::geometry::Point;
use crate::surface::{Surface, TextAlign, TextBaseline};

/// Opacity of a sticker preview relative to a placed sticker
pub const PREVIEW_OPACITY: f32 = 0.6;

/// Fill used for sticker glyphs (color emoji fonts ignore it)
pub const STICKER_INK: Color32 = Color32::BLACK;

/// Start a fresh path holding a single circle of `diameter` around `center`
pub(crate) fn circle_path(surface: &mut dyn Surface, center: Point, diameter: f32) {
    surface.begin_path();
    surface.arc(center, diameter / 2.0, 0.0, TAU);
}

/// Draw `glyph` centered on `position`, rotated by `rotation_degrees` around it.
/// The surface transform is restored afterwards.
pub(crate) fn draw_glyph(
    surface: &mut dyn Surface,
    glyph: &str,
    size: f32,
    rotation_degrees: f32,
    position: Point,
) {
    surface.save();
    surface.translate(position.to_vec2());
    surface.rotate(rotation_degrees.to_radians());
    surface.set_font_size(size);
    surface.set_text_align(TextAlign::Center);
    surface.set_text_baseline(TextBaseline::Middle);
    surface.set_fill_color(STICKER_INK);
    surface.fill_text(glyph, Point::ZERO);
    surface.restore();
}
