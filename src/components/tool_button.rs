use egui::{Align2, FontId, Response, Sense, Stroke, Ui, Vec2, Widget};

const BUTTON_SIZE: f32 = 32.0;
const GLYPH_SIZE: f32 = 20.0;

/// Square toolbar button showing one glyph, outlined while its tool is active
pub struct ToolButton<'a> {
    pub icon: &'a str,
    pub selected: bool,
}

impl<'a> ToolButton<'a> {
    pub fn new(icon: &'a str, selected: bool) -> Self {
        Self { icon, selected }
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        ui.add(self)
    }
}

impl Widget for ToolButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(BUTTON_SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact_selectable(&response, self.selected);
            let painter = ui.painter();
            painter.rect_filled(rect, visuals.rounding, visuals.weak_bg_fill);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.icon,
                FontId::proportional(GLYPH_SIZE),
                visuals.text_color(),
            );
            if self.selected {
                let accent = ui.visuals().selection.stroke.color;
                painter.rect_stroke(rect, visuals.rounding, Stroke::new(2.0, accent));
            }
        }

        response
    }
}
