use egui::Color32;

use super::{Drawable, DrawableId, common};
use crate::geometry::Point;
use crate::surface::{LineCap, LineJoin, Surface};

/// Freehand marker line: the points it passed through, in order
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStroke {
    id: DrawableId,
    points: Vec<Point>,
    width: f32,
    color: Color32,
}

impl MarkerStroke {
    /// Create a new stroke at `start` with a fixed width and color
    pub fn new(start: Point, width: f32, color: Color32) -> Self {
        Self {
            id: DrawableId::new(),
            points: vec![start],
            width,
            color,
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }
}

impl Drawable for MarkerStroke {
    fn render(&self, surface: &mut dyn Surface) {
        let (first, rest) = match self.points.split_first() {
            Some(split) => split,
            None => return,
        };

        surface.save();
        if rest.is_empty() {
            // A click without movement leaves a dot as wide as the line
            common::circle_path(surface, *first, self.width);
            surface.set_fill_color(self.color);
            surface.fill();
        } else {
            surface.set_stroke_color(self.color);
            surface.set_line_width(self.width);
            surface.set_line_cap(LineCap::Round);
            surface.set_line_join(LineJoin::Round);
            surface.begin_path();
            surface.move_to(*first);
            for point in rest {
                surface.line_to(*point);
            }
            surface.stroke();
        }
        surface.restore();
    }

    fn drag(&mut self, point: Point) {
        self.points.push(point);
    }
}
