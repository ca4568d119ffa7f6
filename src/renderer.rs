// src/renderer.rs
use egui::{Color32, Painter, Rect};

use crate::element::{Drawable, ElementType, ToolPreview};
use crate::state::SketchSession;
use crate::surface::{EguiSurface, Surface};

/// Paper color behind the drawing
pub const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

/// Redraws the whole canvas from session state.
///
/// There is no partial redraw: every pass clears the surface, draws the
/// display list back to front and, unless a gesture is running, the preview
/// on top.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
    redraw_count: u64,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(CANVAS_BACKGROUND)
    }
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            redraw_count: 0,
        }
    }

    /// Number of full redraws performed so far
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    /// Redraw `session` onto any surface
    pub fn redraw(&mut self, surface: &mut dyn Surface, session: &SketchSession) {
        self.render_scene(
            surface,
            session.document().items(),
            session.preview(),
            session.is_drawing(),
        );
    }

    /// Redraw from the raw inputs the picture depends on
    pub fn render_scene(
        &mut self,
        surface: &mut dyn Surface,
        items: &[ElementType],
        preview: &ToolPreview,
        drawing: bool,
    ) {
        surface.clear();
        for item in items {
            item.render(surface);
        }
        if !drawing {
            preview.render(surface);
        }
        self.redraw_count += 1;
    }

    /// Paint `session` into `canvas_rect` with an egui painter
    pub fn paint(&mut self, painter: &Painter, canvas_rect: Rect, session: &SketchSession) {
        let painter = painter.with_clip_rect(canvas_rect);
        let mut surface = EguiSurface::new(&painter, canvas_rect, self.background);
        self.redraw(&mut surface, session);
    }
}
