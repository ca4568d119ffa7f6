use egui::{Button, Slider};

use crate::command::Command;
use crate::components::ToolButton;
use crate::config::{SketchConfig, SliderRange};
use crate::state::SketchSession;
use crate::tools::Tool;

const MARKER_ICON: &str = "✏";

/// Toolbar: history buttons, tool buttons and style sliders.
///
/// Reads the session and returns the commands the user triggered this
/// frame. Clicking "+" opens the custom sticker prompt.
pub fn tools_panel(
    ui: &mut egui::Ui,
    session: &SketchSession,
    config: &SketchConfig,
    sticker_prompt: &mut Option<String>,
) -> Vec<Command> {
    let mut commands = Vec::new();
    let document = session.document();

    ui.horizontal(|ui| {
        if ui.add_enabled(document.can_undo(), Button::new("Undo")).clicked() {
            commands.push(Command::Undo);
        }
        if ui.add_enabled(document.can_redo(), Button::new("Redo")).clicked() {
            commands.push(Command::Redo);
        }
        if ui.add_enabled(document.can_clear(), Button::new("Clear")).clicked() {
            commands.push(Command::Clear);
        }
    });

    ui.horizontal_wrapped(|ui| {
        let marker_selected = session.tool().is_marker();
        if ToolButton::new(MARKER_ICON, marker_selected)
            .show(ui)
            .on_hover_text("Marker")
            .clicked()
        {
            commands.push(Command::SelectMarker);
        }

        for glyph in session.palette().glyphs() {
            let selected = matches!(session.tool(), Tool::Sticker(g) if g == glyph);
            if ToolButton::new(glyph, selected).show(ui).clicked() {
                commands.push(Command::SelectSticker(glyph.clone()));
            }
        }

        if ToolButton::new("+", false)
            .show(ui)
            .on_hover_text("Add a custom sticker")
            .clicked()
        {
            log::debug!("Opening custom sticker prompt");
            *sticker_prompt = Some(String::new());
        }
    });

    let style = session.style();
    if let Some(width) = slider(ui, "Width", &config.width, style.width()) {
        commands.push(Command::SetWidth(width));
    }
    if let Some(hue) = slider(ui, "Hue", &config.hue, style.hue()) {
        commands.push(Command::SetHue(hue));
    }
    if let Some(rotation) = slider(ui, "Rotation", &config.rotation, style.rotation()) {
        commands.push(Command::SetRotation(rotation));
    }

    commands
}

/// Show a slider for `current`, returning the new value if the user moved it
fn slider(ui: &mut egui::Ui, label: &str, range: &SliderRange, current: f32) -> Option<f32> {
    let mut value = current;
    let response = ui.add(
        Slider::new(&mut value, range.range())
            .step_by(range.step as f64)
            .text(label),
    );
    response.changed().then_some(value)
}

/// One-line text prompt for a custom sticker glyph.
///
/// Submitting returns the raw text; cancelling closes the prompt and
/// returns nothing.
pub fn sticker_prompt(ctx: &egui::Context, prompt: &mut Option<String>) -> Option<Command> {
    let text = prompt.as_mut()?;
    let mut submitted = false;
    let mut cancelled = false;

    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Type an emoji or short text:");
            let response = ui.text_edit_singleline(text);
            response.request_focus();
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                cancelled = true;
            }
            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    submitted = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if submitted {
        prompt.take().map(Command::AddCustomSticker)
    } else {
        if cancelled {
            log::debug!("Custom sticker prompt cancelled");
            *prompt = None;
        }
        None
    }
}
