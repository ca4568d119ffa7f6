use crate::config::SketchConfig;
use crate::input::InputHandler;
use crate::renderer::Renderer;
use crate::state::SketchSession;

/// Allocate the fixed-size canvas, feed it pointer input and redraw it
pub fn central_panel(
    ui: &mut egui::Ui,
    session: &mut SketchSession,
    renderer: &mut Renderer,
    input: &mut InputHandler,
    config: &SketchConfig,
    accept_input: bool,
) {
    let (response, painter) =
        ui.allocate_painter(config.canvas_size(), egui::Sense::click_and_drag());
    let canvas_rect = response.rect;

    if accept_input {
        for event in input.process_input(ui.ctx(), canvas_rect) {
            session.handle_input(event);
        }
    } else if let Some(event) = input.reset() {
        // A modal prompt took over; treat it like the pointer leaving
        session.handle_input(event);
    }

    renderer.paint(&painter, canvas_rect, session);
    painter.rect_stroke(
        canvas_rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(160)),
    );
}
