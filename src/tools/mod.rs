use std::fmt;

use crate::element::{ElementType, MarkerPreview, StickerPreview, ToolPreview, factory};
use crate::geometry::Point;

mod palette;
mod style;

pub use palette::StickerPalette;
pub use style::{StyleState, hue_to_color};

/// The active mode, deciding what a gesture creates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Marker,
    Sticker(String),
}

impl Tool {
    pub fn is_marker(&self) -> bool {
        matches!(self, Tool::Marker)
    }

    /// The glyph placed by this tool, if it is a sticker
    pub fn glyph(&self) -> Option<&str> {
        match self {
            Tool::Sticker(glyph) => Some(glyph.as_str()),
            Tool::Marker => None,
        }
    }

    /// Instantiate the drawable a pointer-down at `at` starts
    pub fn create_element(&self, at: Point, style: &StyleState) -> ElementType {
        match self {
            Tool::Marker => factory::create_marker(at, style.width(), style.color()),
            Tool::Sticker(glyph) => factory::create_sticker(
                at,
                glyph.as_str(),
                style.sticker_size(),
                style.rotation(),
            ),
        }
    }

    /// A fresh preview for this tool. It starts without a position.
    pub fn create_preview(&self, style: &StyleState) -> ToolPreview {
        match self {
            Tool::Marker => ToolPreview::Marker(MarkerPreview::new(style.width(), style.color())),
            Tool::Sticker(glyph) => ToolPreview::Sticker(StickerPreview::new(
                glyph.as_str(),
                style.sticker_size(),
                style.rotation(),
            )),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Marker => f.write_str("Marker"),
            Tool::Sticker(glyph) => write!(f, "Sticker({glyph})"),
        }
    }
}
