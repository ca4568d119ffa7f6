use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use super::{LineCap, LineJoin, SubPath, Surface, SurfaceContext, text_anchor_offset};
use crate::geometry::Point;

/// Surface backed by an egui [`Painter`].
///
/// Canvas-local coordinates are offset by the top-left corner of the canvas
/// rect on screen. Shapes are appended to the painter's layer, so a
/// redraw must start with a clear to cover the previous frame's content.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    size: Vec2,
    background: Color32,
    context: SurfaceContext,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect, background: Color32) -> Self {
        Self {
            painter,
            origin: canvas_rect.min,
            size: canvas_rect.size(),
            background,
            context: SurfaceContext::default(),
        }
    }

    fn to_screen(&self, point: Pos2) -> Pos2 {
        point + self.origin.to_vec2()
    }

    /// Emulate round caps and joins with discs at the polyline vertices
    fn round_ends(&self, points: &[Pos2], closed: bool, radius: f32, color: Color32) {
        let state = self.context.state;
        let last = points.len().saturating_sub(1);
        for (i, point) in points.iter().enumerate() {
            let is_end = !closed && (i == 0 || i == last);
            let round = if is_end {
                state.line_cap == LineCap::Round
            } else {
                state.line_join == LineJoin::Round
            };
            if round {
                self.painter.circle_filled(*point, radius, color);
            }
        }
    }
}

impl Surface for EguiSurface<'_> {
    fn context(&self) -> &SurfaceContext {
        &self.context
    }

    fn context_mut(&mut self) -> &mut SurfaceContext {
        &mut self.context
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear_rect(&mut self, rect: Rect) {
        let screen = Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max));
        self.painter.rect_filled(screen, 0.0, self.background);
    }

    fn stroke(&mut self) {
        let state = self.context.state;
        let color = state.stroke_paint();
        let stroke = Stroke::new(state.line_width, color);

        for subpath in self.context.path.subpaths() {
            match subpath {
                SubPath::Circle { center, radius } => {
                    self.painter
                        .circle_stroke(self.to_screen(*center), *radius, stroke);
                }
                SubPath::Polyline { points, closed } => {
                    let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                    if screen.len() >= 2 {
                        let shape = if *closed {
                            Shape::closed_line(screen.clone(), stroke)
                        } else {
                            Shape::line(screen.clone(), stroke)
                        };
                        self.painter.add(shape);
                    }
                    self.round_ends(&screen, *closed, state.line_width / 2.0, color);
                }
            }
        }
    }

    fn fill(&mut self) {
        let color = self.context.state.fill_paint();

        for subpath in self.context.path.subpaths() {
            match subpath {
                SubPath::Circle { center, radius } => {
                    self.painter
                        .circle_filled(self.to_screen(*center), *radius, color);
                }
                SubPath::Polyline { points, .. } if points.len() >= 3 => {
                    let screen: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
                    self.painter
                        .add(Shape::convex_polygon(screen, color, Stroke::NONE));
                }
                SubPath::Polyline { .. } => {}
            }
        }
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let state = self.context.state;
        let color = state.fill_paint();
        let galley = self.painter.layout_no_wrap(
            text.to_owned(),
            FontId::proportional(state.font_size),
            color,
        );

        // The text shape rotates around its top-left corner, so resolve the
        // anchor offset in local space before applying the transform.
        let offset = text_anchor_offset(galley.size(), state.text_align, state.text_baseline);
        let top_left = self.to_screen(state.transform.apply(at + offset));

        let shape = TextShape::new(top_left, galley, color).with_angle(state.transform.angle());
        self.painter.add(shape);
    }
}
