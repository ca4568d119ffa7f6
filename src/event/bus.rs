use std::cell::RefCell;
use std::fmt;

use crate::event::{EventHandler, SketchEvent};

/// Fan-out point for session notifications.
///
/// Handlers are called synchronously, in subscription order, from inside the
/// session method that caused the change. Subscribing takes `&self` so the
/// app can hook in while the session is only borrowed.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Deliver `event` to every handler. Handlers must not emit in turn.
    pub fn emit(&self, event: SketchEvent) {
        log::trace!("Emitting {}", event.name());
        let mut handlers = self.handlers.borrow_mut();
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
    }
}
