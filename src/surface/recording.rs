use egui::{Color32, Rect, Vec2};

use super::{LineCap, LineJoin, Path, Surface, SurfaceContext, TextAlign, TextBaseline};
use crate::geometry::Point;

/// A draw operation as it reached the surface, with transform and style resolved
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rect),
    Stroke {
        path: Path,
        color: Color32,
        width: f32,
        cap: LineCap,
        join: LineJoin,
    },
    Fill {
        path: Path,
        color: Color32,
    },
    Text {
        text: String,
        /// Anchor point in canvas space
        anchor: Point,
        /// Rotation of the text axes in radians
        angle: f32,
        font_size: f32,
        align: TextAlign,
        baseline: TextBaseline,
        color: Color32,
    },
}

/// Surface that records every terminal draw call instead of painting.
///
/// Used to observe rendering without a GPU or an egui frame.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Vec2,
    context: SurfaceContext,
    calls: Vec<DrawCall>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Vec2::splat(256.0))
    }
}

impl RecordingSurface {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            context: SurfaceContext::default(),
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of unmatched `save` calls
    pub fn depth(&self) -> usize {
        self.context.depth()
    }

    pub fn text_calls(&self) -> impl Iterator<Item = &DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Text { .. }))
    }
}

impl Surface for RecordingSurface {
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
        self.calls.push(DrawCall::Clear(rect));
    }

    fn stroke(&mut self) {
        let state = self.context.state;
        self.calls.push(DrawCall::Stroke {
            path: self.context.path.clone(),
            color: state.stroke_paint(),
            width: state.line_width,
            cap: state.line_cap,
            join: state.line_join,
        });
    }

    fn fill(&mut self) {
        let state = self.context.state;
        self.calls.push(DrawCall::Fill {
            path: self.context.path.clone(),
            color: state.fill_paint(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Point) {
        let state = self.context.state;
        self.calls.push(DrawCall::Text {
            text: text.to_owned(),
            anchor: state.transform.apply(at),
            angle: state.transform.angle(),
            font_size: state.font_size,
            align: state.text_align,
            baseline: state.text_baseline,
            color: state.fill_paint(),
        });
    }
}
