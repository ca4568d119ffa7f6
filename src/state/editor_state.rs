use crate::element::DrawableId;

/// Gesture state of the editor.
///
/// ```text
///  ┌──────────┐  pointer down   ┌───────────┐
///  │          ├────────────────►│           │
///  │   Idle   │                 │  Drawing  │──┐ pointer move:
///  │          │◄────────────────┤           │◄─┘ drag the element
///  └──────────┘  pointer up /   └───────────┘
///                leave / undo
/// ```
///
/// While idle, pointer moves drive the preview. While drawing, they extend
/// the element the gesture created; the preview is not rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    /// No active gesture
    #[default]
    Idle,
    /// A gesture is extending the committed element `element`
    Drawing { element: DrawableId },
}

impl EditorState {
    /// Returns true if a gesture is in progress
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }
}
