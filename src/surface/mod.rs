//! The 2D drawing surface every drawable renders onto.
//!
//! The capability set follows the HTML canvas 2D context: a current path,
//! a style/transform state that can be saved and restored, and text with
//! alignment and baseline control. Paths are stored in canvas space, the
//! transform is applied as points are added.
//!
//! Implementations only provide the terminal operations (`clear_rect`,
//! `stroke`, `fill`, `fill_text`); state handling is shared through
//! [`SurfaceContext`].

use egui::{Color32, Pos2, Rect, Vec2};
use std::f32::consts::TAU;

use crate::geometry::{Point, Transform};

mod egui_surface;
mod recording;

pub use egui_surface::EguiSurface;
pub use recording::{DrawCall, RecordingSurface};

/// Segments used to approximate a full turn of a partial arc
const ARC_SEGMENTS: f32 = 48.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

/// Offset from the anchor point to the top-left corner of a text block of `size`
pub fn text_anchor_offset(size: Vec2, align: TextAlign, baseline: TextBaseline) -> Vec2 {
    let x = match align {
        TextAlign::Left => 0.0,
        TextAlign::Center => -size.x / 2.0,
        TextAlign::Right => -size.x,
    };
    let y = match baseline {
        TextBaseline::Top => 0.0,
        TextBaseline::Middle => -size.y / 2.0,
        // Without font metrics the alphabetic baseline sits at the bottom of the block
        TextBaseline::Alphabetic | TextBaseline::Bottom => -size.y,
    };
    Vec2::new(x, y)
}

/// Style and transform state, the unit saved and restored by `save`/`restore`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState {
    pub transform: Transform,
    pub stroke_color: Color32,
    pub fill_color: Color32,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub global_alpha: f32,
    pub font_size: f32,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Transform::IDENTITY,
            stroke_color: Color32::BLACK,
            fill_color: Color32::BLACK,
            line_width: 1.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
            global_alpha: 1.0,
            font_size: 10.0,
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}

impl DrawState {
    /// Stroke color with the global alpha applied
    pub fn stroke_paint(&self) -> Color32 {
        self.stroke_color.gamma_multiply(self.global_alpha)
    }

    /// Fill color with the global alpha applied
    pub fn fill_paint(&self) -> Color32 {
        self.fill_color.gamma_multiply(self.global_alpha)
    }
}

/// One piece of the current path, in canvas space
#[derive(Debug, Clone, PartialEq)]
pub enum SubPath {
    Polyline { points: Vec<Pos2>, closed: bool },
    Circle { center: Pos2, radius: f32 },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    fn move_to(&mut self, point: Pos2) {
        self.subpaths.push(SubPath::Polyline {
            points: vec![point],
            closed: false,
        });
    }

    fn line_to(&mut self, point: Pos2) {
        match self.subpaths.last_mut() {
            Some(SubPath::Polyline { points, closed: false }) => points.push(point),
            // A line with no open subpath starts one, as on a canvas
            _ => self.move_to(point),
        }
    }

    fn close(&mut self) {
        if let Some(SubPath::Polyline { closed, .. }) = self.subpaths.last_mut() {
            *closed = true;
        }
    }

    fn circle(&mut self, center: Pos2, radius: f32) {
        self.subpaths.push(SubPath::Circle { center, radius });
    }
}

/// Shared mutable state behind every [`Surface`] implementation
#[derive(Debug, Clone, Default)]
pub struct SurfaceContext {
    state: DrawState,
    stack: Vec<DrawState>,
    path: Path,
}

impl SurfaceContext {
    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of `save` calls not yet matched by a `restore`
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// A drawing surface sized in logical canvas units.
pub trait Surface {
    fn context(&self) -> &SurfaceContext;

    fn context_mut(&mut self) -> &mut SurfaceContext;

    /// Logical size of the surface
    fn size(&self) -> Vec2;

    /// Reset `rect` (canvas space, transform ignored) to the background
    fn clear_rect(&mut self, rect: Rect);

    /// Outline the current path with the current stroke style
    fn stroke(&mut self);

    /// Fill the current path with the current fill color
    fn fill(&mut self);

    /// Draw `text` anchored at `at` using the current font, alignment and baseline
    fn fill_text(&mut self, text: &str, at: Point);

    fn clear(&mut self) {
        let size = self.size();
        self.clear_rect(Rect::from_min_size(Pos2::ZERO, size));
    }

    fn save(&mut self) {
        let ctx = self.context_mut();
        let state = ctx.state;
        ctx.stack.push(state);
    }

    /// Pop the last saved state. Unbalanced restores are ignored.
    fn restore(&mut self) {
        let ctx = self.context_mut();
        if let Some(state) = ctx.stack.pop() {
            ctx.state = state;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.context_mut().state.transform.translate(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.context_mut().state.transform.rotate(radians);
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.context_mut().state.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color32) {
        self.context_mut().state.fill_color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        if width > 0.0 && width.is_finite() {
            self.context_mut().state.line_width = width;
        }
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.context_mut().state.line_cap = cap;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.context_mut().state.line_join = join;
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        if alpha.is_finite() {
            self.context_mut().state.global_alpha = alpha.clamp(0.0, 1.0);
        }
    }

    fn set_font_size(&mut self, size: f32) {
        if size > 0.0 && size.is_finite() {
            self.context_mut().state.font_size = size;
        }
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.context_mut().state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.context_mut().state.text_baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.context_mut().path = Path::default();
    }

    fn close_path(&mut self) {
        self.context_mut().path.close();
    }

    fn move_to(&mut self, point: Point) {
        let ctx = self.context_mut();
        let point = ctx.state.transform.apply(point);
        ctx.path.move_to(point);
    }

    fn line_to(&mut self, point: Point) {
        let ctx = self.context_mut();
        let point = ctx.state.transform.apply(point);
        ctx.path.line_to(point);
    }

    /// Add an arc around `center`, angles in radians measured clockwise from +x
    fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) {
        let ctx = self.context_mut();
        let sweep = end_angle - start_angle;
        if sweep.abs() >= TAU - f32::EPSILON {
            let center = ctx.state.transform.apply(center);
            ctx.path.circle(center, radius);
            return;
        }

        let segments = ((sweep.abs() / TAU) * ARC_SEGMENTS).ceil().max(1.0) as usize;
        for i in 0..=segments {
            let angle = start_angle + sweep * (i as f32 / segments as f32);
            let local = center + Vec2::angled(angle) * radius;
            let point = ctx.state.transform.apply(local);
            ctx.path.line_to(point);
        }
    }
}
