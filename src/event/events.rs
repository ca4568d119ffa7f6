/// Change notifications fired by the session after every mutation.
///
/// Both kinds lead to the same full redraw; they are kept apart so
/// listeners can tell a display list edit from a preview update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// The display list was mutated
    DrawingChanged,
    /// The preview, the active tool or the style changed
    ToolMoved,
}

impl SketchEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SketchEvent::DrawingChanged => "drawing-changed",
            SketchEvent::ToolMoved => "tool-moved",
        }
    }
}
