use egui::{Context, Pos2, Rect};

use crate::geometry::Point;

/// Pointer events consumed by the session, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Point },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { position: Point },
    /// Primary button was released over the canvas
    PointerUp { position: Point },
    /// Pointer left the canvas
    PointerLeave,
}

/// Translate a screen position into the canvas' own coordinate space
pub fn to_canvas_local(position: Pos2, canvas_rect: Rect) -> Point {
    (position - canvas_rect.min).to_pos2()
}

/// One frame's worth of raw pointer state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Screen position, `None` when the pointer is outside the window
    pub position: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
}

impl PointerSnapshot {
    pub fn from_context(ctx: &Context) -> Self {
        ctx.input(|input| Self {
            position: input.pointer.hover_pos(),
            primary_pressed: input.pointer.primary_pressed(),
            primary_released: input.pointer.primary_released(),
        })
    }
}

/// Handles converting raw egui pointer input into canvas [`InputEvent`]s
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer was over the canvas at the last update
    pub fn is_inside(&self) -> bool {
        self.last_pointer_pos.is_some()
    }

    /// Process this frame's egui input for the canvas occupying `canvas_rect`
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        self.update(PointerSnapshot::from_context(ctx), canvas_rect)
    }

    /// Turn a pointer snapshot into events.
    ///
    /// Within one frame the order is move, down, up, so a press at a new
    /// position first moves there. A pointer that is no longer over the
    /// canvas produces a single leave.
    pub fn update(&mut self, snapshot: PointerSnapshot, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let inside = snapshot.position.filter(|pos| canvas_rect.contains(*pos));

        match inside {
            Some(pos) => {
                let position = to_canvas_local(pos, canvas_rect);
                if self.last_pointer_pos != Some(pos) {
                    events.push(InputEvent::PointerMove { position });
                }
                if snapshot.primary_pressed {
                    events.push(InputEvent::PointerDown { position });
                }
                if snapshot.primary_released {
                    events.push(InputEvent::PointerUp { position });
                }
                self.last_pointer_pos = Some(pos);
            }
            None => {
                if self.last_pointer_pos.take().is_some() {
                    events.push(InputEvent::PointerLeave);
                }
            }
        }

        events
    }

    /// Forget the pointer, emitting a leave if it was over the canvas
    pub fn reset(&mut self) -> Option<InputEvent> {
        self.last_pointer_pos
            .take()
            .map(|_| InputEvent::PointerLeave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), vec2(256.0, 256.0))
    }

    fn at(x: f32, y: f32) -> PointerSnapshot {
        PointerSnapshot {
            position: Some(Pos2::new(x, y)),
            ..Default::default()
        }
    }

    #[test]
    fn test_positions_are_canvas_local() {
        assert_eq!(
            to_canvas_local(Pos2::new(110.0, 70.0), canvas()),
            Pos2::new(10.0, 20.0)
        );
    }

    #[test]
    fn test_move_only_when_position_changes() {
        let mut handler = InputHandler::new();
        let events = handler.update(at(110.0, 60.0), canvas());
        assert_eq!(events, vec![InputEvent::PointerMove { position: Pos2::new(10.0, 10.0) }]);

        let events = handler.update(at(110.0, 60.0), canvas());
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_moves_then_goes_down() {
        let mut handler = InputHandler::new();
        let snapshot = PointerSnapshot {
            primary_pressed: true,
            ..at(120.0, 80.0)
        };
        let events = handler.update(snapshot, canvas());
        let position = Pos2::new(20.0, 30.0);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { position },
                InputEvent::PointerDown { position },
            ]
        );
    }

    #[test]
    fn test_leaving_canvas_emits_single_leave() {
        let mut handler = InputHandler::new();
        handler.update(at(110.0, 60.0), canvas());

        let events = handler.update(at(10.0, 10.0), canvas());
        assert_eq!(events, vec![InputEvent::PointerLeave]);
        assert!(!handler.is_inside());

        let events = handler.update(PointerSnapshot::default(), canvas());
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut handler = InputHandler::new();
        let snapshot = PointerSnapshot {
            primary_pressed: true,
            ..at(5.0, 5.0)
        };
        assert!(handler.update(snapshot, canvas()).is_empty());
    }

    #[test]
    fn test_reset_leaves_only_when_inside() {
        let mut handler = InputHandler::new();
        assert_eq!(handler.reset(), None);
        handler.update(at(110.0, 60.0), canvas());
        assert_eq!(handler.reset(), Some(InputEvent::PointerLeave));
    }
}
