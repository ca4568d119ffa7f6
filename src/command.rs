/// Toolbar and shortcut actions, executed against the session.
///
/// Panels and shortcuts only produce commands; `SketchSession::execute`
/// applies them and fires the matching notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Undo,
    Redo,
    Clear,
    SelectMarker,
    SelectSticker(String),
    /// Raw text from the custom sticker prompt, not yet validated
    AddCustomSticker(String),
    SetWidth(f32),
    SetHue(f32),
    SetRotation(f32),
}

impl Command {
    pub fn label(&self) -> &'static str {
        match self {
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Clear => "Clear",
            Command::SelectMarker => "Select Marker",
            Command::SelectSticker(_) => "Select Sticker",
            Command::AddCustomSticker(_) => "Add Custom Sticker",
            Command::SetWidth(_) => "Set Width",
            Command::SetHue(_) => "Set Hue",
            Command::SetRotation(_) => "Set Rotation",
        }
    }
}
