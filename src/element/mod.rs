use std::fmt;
use uuid::Uuid;

use crate::geometry::Point;
use crate::surface::Surface;

mod common;
pub(crate) mod preview;
pub(crate) mod sticker;
pub(crate) mod stroke;

pub use common::{PREVIEW_OPACITY, STICKER_INK};
pub use preview::{MarkerPreview, StickerPreview, ToolPreview};
pub use sticker::Sticker;
pub use stroke::MarkerStroke;

/// Stable identity of a committed drawable, kept across undo and redo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(Uuid);

impl DrawableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DrawableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The first block is plenty to tell items apart in logs
        let text = self.0.simple().to_string();
        f.write_str(&text[..8])
    }
}

/// Common trait for everything that can be drawn on the canvas
pub trait Drawable {
    /// Draw onto `surface`. Any state changes must be undone before returning.
    fn render(&self, surface: &mut dyn Surface);

    /// Feed a new pointer position while the item is being manipulated
    fn drag(&mut self, point: Point);
}

/// Enumeration of all items that can live in the display list
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Marker(MarkerStroke),
    Sticker(Sticker),
}

impl ElementType {
    pub fn id(&self) -> DrawableId {
        match self {
            ElementType::Marker(m) => m.id(),
            ElementType::Sticker(s) => s.id(),
        }
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            ElementType::Marker(_) => "marker",
            ElementType::Sticker(_) => "sticker",
        }
    }

    pub fn as_marker(&self) -> Option<&MarkerStroke> {
        match self {
            ElementType::Marker(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            ElementType::Sticker(s) => Some(s),
            _ => None,
        }
    }
}

impl Drawable for ElementType {
    fn render(&self, surface: &mut dyn Surface) {
        match self {
            ElementType::Marker(m) => m.render(surface),
            ElementType::Sticker(s) => s.render(surface),
        }
    }

    fn drag(&mut self, point: Point) {
        match self {
            ElementType::Marker(m) => m.drag(point),
            ElementType::Sticker(s) => s.drag(point),
        }
    }
}

impl From<MarkerStroke> for ElementType {
    fn from(marker: MarkerStroke) -> Self {
        ElementType::Marker(marker)
    }
}

impl From<Sticker> for ElementType {
    fn from(sticker: Sticker) -> Self {
        ElementType::Sticker(sticker)
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use egui::Color32;

    /// Create a marker stroke starting at `start`
    pub fn create_marker(start: Point, width: f32, color: Color32) -> ElementType {
        ElementType::Marker(MarkerStroke::new(start, width, color))
    }

    /// Create a sticker placed at `position`
    pub fn create_sticker(
        position: Point,
        glyph: impl Into<String>,
        size: f32,
        rotation_degrees: f32,
    ) -> ElementType {
        ElementType::Sticker(Sticker::new(position, glyph, size, rotation_degrees))
    }
}
