//! The sketch session owns every piece of mutable state: the display list,
//! the active tool and its preview, the style values and the gesture state.
//!
//! All mutations go through its methods, each of which fires the matching
//! [`SketchEvent`] right after changing something. Calls that change nothing
//! stay silent.

use crate::command::Command;
use crate::config::SketchConfig;
use crate::document::Document;
use crate::element::{Drawable, ToolPreview};
use crate::event::{EventBus, SketchEvent};
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::tools::{StickerPalette, StyleState, Tool};

use super::EditorState;

#[derive(Debug)]
pub struct SketchSession {
    state: EditorState,
    document: Document,
    tool: Tool,
    style: StyleState,
    palette: StickerPalette,
    preview: ToolPreview,
    event_bus: EventBus,
}

impl Default for SketchSession {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl SketchSession {
    /// Start with an empty canvas and the marker tool
    pub fn new(config: &SketchConfig) -> Self {
        let style = StyleState::new(config);
        let tool = Tool::Marker;
        let preview = tool.create_preview(&style);
        Self {
            state: EditorState::Idle,
            document: Document::new(),
            tool,
            style,
            palette: StickerPalette::new(config.stickers.iter().cloned()),
            preview,
            event_bus: EventBus::new(),
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }

    pub fn preview(&self) -> &ToolPreview {
        &self.preview
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Apply a toolbar or shortcut command
    pub fn execute(&mut self, command: Command) {
        log::debug!("Executing {}", command.label());
        match command {
            Command::Undo => {
                self.undo();
            }
            Command::Redo => {
                self.redo();
            }
            Command::Clear => {
                self.clear();
            }
            Command::SelectMarker => self.select_marker(),
            Command::SelectSticker(glyph) => self.select_sticker(glyph),
            Command::AddCustomSticker(text) => {
                self.add_custom_sticker(&text);
            }
            Command::SetWidth(width) => self.set_width(width),
            Command::SetHue(hue) => self.set_hue(hue),
            Command::SetRotation(rotation) => self.set_rotation(rotation),
        }
    }

    // Display list

    pub fn undo(&mut self) -> bool {
        let ended = self.end_gesture();
        let changed = self.document.undo();
        self.notify_edit(changed, ended);
        changed
    }

    pub fn redo(&mut self) -> bool {
        let ended = self.end_gesture();
        let changed = self.document.redo();
        self.notify_edit(changed, ended);
        changed
    }

    pub fn clear(&mut self) -> bool {
        let ended = self.end_gesture();
        let changed = self.document.clear();
        self.notify_edit(changed, ended);
        changed
    }

    fn notify_edit(&self, changed: bool, gesture_ended: bool) {
        if changed {
            self.event_bus.emit(SketchEvent::DrawingChanged);
        } else if gesture_ended {
            // Nothing to undo, but the preview is visible again
            self.event_bus.emit(SketchEvent::ToolMoved);
        }
    }

    // Tools and style

    pub fn select_marker(&mut self) {
        self.activate(Tool::Marker);
    }

    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        self.activate(Tool::Sticker(glyph.into()));
    }

    /// Add a user supplied glyph to the palette and switch to it.
    ///
    /// Blank input is treated as a cancelled prompt and changes nothing.
    pub fn add_custom_sticker(&mut self, input: &str) -> bool {
        let known = self.palette.glyphs().len();
        match self.palette.add(input) {
            Some(glyph) => {
                if self.palette.glyphs().len() > known {
                    log::info!("Added custom sticker {glyph}");
                }
                self.select_sticker(glyph);
                true
            }
            None => {
                log::debug!("Ignoring blank custom sticker");
                false
            }
        }
    }

    /// Switch tools. The old preview is dropped, the new one has no position.
    fn activate(&mut self, tool: Tool) {
        log::info!("Tool changed: {} -> {}", self.tool, tool);
        self.preview = tool.create_preview(&self.style);
        self.tool = tool;
        self.event_bus.emit(SketchEvent::ToolMoved);
    }

    pub fn set_width(&mut self, width: f32) {
        let width = self.style.set_width(width);
        if let Some(preview) = self.preview.as_marker_mut() {
            preview.set_width(width);
        }
        self.event_bus.emit(SketchEvent::ToolMoved);
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.style.set_hue(hue);
        let color = self.style.color();
        if let Some(preview) = self.preview.as_marker_mut() {
            preview.set_color(color);
        }
        self.event_bus.emit(SketchEvent::ToolMoved);
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        let rotation = self.style.set_rotation(rotation);
        if let Some(preview) = self.preview.as_sticker_mut() {
            preview.set_rotation_degrees(rotation);
        }
        self.event_bus.emit(SketchEvent::ToolMoved);
    }

    // Pointer input

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(position),
            InputEvent::PointerMove { position } => self.pointer_move(position),
            InputEvent::PointerUp { position } => self.pointer_up(position),
            InputEvent::PointerLeave => self.pointer_leave(),
        }
    }

    /// Begin a gesture: commit a new element of the current tool at `at`
    pub fn pointer_down(&mut self, at: Point) {
        // A release we never saw must not leave the old element attached
        self.end_gesture();

        let element = self.tool.create_element(at, &self.style);
        let id = element.id();
        log::debug!("Gesture started: {} {}", element.element_type(), id);
        self.document.commit(element);
        self.state = EditorState::Drawing { element: id };
        self.event_bus.emit(SketchEvent::DrawingChanged);
    }

    pub fn pointer_move(&mut self, at: Point) {
        match self.state {
            EditorState::Drawing { element } => match self.document.item_mut(element) {
                Some(item) => {
                    item.drag(at);
                    self.event_bus.emit(SketchEvent::DrawingChanged);
                }
                None => {
                    // The element left the display list under the gesture
                    self.state = EditorState::Idle;
                    self.move_preview(at);
                }
            },
            EditorState::Idle => self.move_preview(at),
        }
    }

    /// End the gesture; the preview reappears at the release point
    pub fn pointer_up(&mut self, at: Point) {
        if self.end_gesture() {
            self.preview.move_to(at);
            self.event_bus.emit(SketchEvent::ToolMoved);
        }
    }

    /// End any gesture and hide the preview while the pointer is away
    pub fn pointer_leave(&mut self) {
        let ended = self.end_gesture();
        let was_shown = self.preview.position().is_some();
        self.preview.clear_position();
        if ended || was_shown {
            self.event_bus.emit(SketchEvent::ToolMoved);
        }
    }

    fn move_preview(&mut self, at: Point) {
        self.preview.move_to(at);
        self.event_bus.emit(SketchEvent::ToolMoved);
    }

    /// Detach the in-progress element. Returns whether a gesture was active.
    fn end_gesture(&mut self) -> bool {
        match self.state {
            EditorState::Drawing { element } => {
                log::debug!("Gesture ended: {element}");
                self.state = EditorState::Idle;
                true
            }
            EditorState::Idle => false,
        }
    }
}
