use egui::{Key, KeyboardShortcut, Modifiers};

use crate::command::Command;
use crate::config::SketchConfig;
use crate::event::{EventHandler, SketchEvent};
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::SketchSession;

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Turns session notifications into egui repaint requests
struct RepaintHandler {
    ctx: egui::Context,
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, event: &SketchEvent) {
        log::trace!("Repaint requested by {}", event.name());
        self.ctx.request_repaint();
    }
}

pub struct SketchpadApp {
    config: SketchConfig,
    session: SketchSession,
    renderer: Renderer,
    input: InputHandler,
    /// Text of the open custom sticker prompt, `None` while closed
    sticker_prompt: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let session = SketchSession::new(&config);
        session.event_bus().subscribe(Box::new(RepaintHandler {
            ctx: cc.egui_ctx.clone(),
        }));

        Self {
            config,
            session,
            renderer: Renderer::default(),
            input: InputHandler::new(),
            sticker_prompt: None,
        }
    }

    fn shortcut_commands(ctx: &egui::Context) -> Vec<Command> {
        ctx.input_mut(|input| {
            let mut commands = Vec::new();
            // Check the shifted variant first, it would otherwise match plain undo
            if input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT) {
                commands.push(Command::Redo);
            }
            if input.consume_shortcut(&UNDO) {
                commands.push(Command::Undo);
            }
            commands
        })
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let prompt_open = self.sticker_prompt.is_some();
        let mut commands = if prompt_open {
            Vec::new()
        } else {
            Self::shortcut_commands(ctx)
        };

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.heading("Sketchpad");
            ui.add_enabled_ui(!prompt_open, |ui| {
                commands.extend(panels::tools_panel(
                    ui,
                    &self.session,
                    &self.config,
                    &mut self.sticker_prompt,
                ));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(
                ui,
                &mut self.session,
                &mut self.renderer,
                &mut self.input,
                &self.config,
                !prompt_open,
            );
        });

        if let Some(command) = panels::sticker_prompt(ctx, &mut self.sticker_prompt) {
            commands.push(command);
        }

        for command in commands {
            self.session.execute(command);
        }
    }
}
