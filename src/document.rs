use crate::element::{DrawableId, ElementType};

/// The display list: committed drawables in render order, plus the items
/// taken off its tail by undo.
///
/// Every mutator reports whether it changed anything so the caller can
/// decide whether a redraw is due. Operations that have nothing to act on
/// are no-ops, never errors.
#[derive(Debug, Clone, Default)]
pub struct Document {
    items: Vec<ElementType>,
    redo_stack: Vec<ElementType>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item. Pending redo entries are discarded for good.
    pub fn commit(&mut self, item: ElementType) {
        log::debug!("Committing {} {}", item.element_type(), item.id());
        self.items.push(item);
        self.redo_stack.clear();
    }

    /// Move the most recent item onto the redo stack
    pub fn undo(&mut self) -> bool {
        match self.items.pop() {
            Some(item) => {
                log::debug!("Undo {} {}", item.element_type(), item.id());
                self.redo_stack.push(item);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone item back onto the display list
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(item) => {
                log::debug!("Redo {} {}", item.element_type(), item.id());
                self.items.push(item);
                true
            }
            None => false,
        }
    }

    /// Drop everything, including the redo history
    pub fn clear(&mut self) -> bool {
        if self.items.is_empty() && self.redo_stack.is_empty() {
            return false;
        }
        log::debug!(
            "Clearing {} items and {} redo entries",
            self.items.len(),
            self.redo_stack.len()
        );
        self.items.clear();
        self.redo_stack.clear();
        true
    }

    pub fn items(&self) -> &[ElementType] {
        &self.items
    }

    pub fn redo_stack(&self) -> &[ElementType] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Whether `clear` would change anything
    pub fn can_clear(&self) -> bool {
        self.can_undo() || self.can_redo()
    }

    pub fn item(&self, id: DrawableId) -> Option<&ElementType> {
        self.items.iter().rev().find(|item| item.id() == id)
    }

    /// Find a committed item by id, searching from the most recent
    pub fn item_mut(&mut self, id: DrawableId) -> Option<&mut ElementType> {
        self.items.iter_mut().rev().find(|item| item.id() == id)
    }
}
