use eframe_sketchpad::document::Document;
use eframe_sketchpad::element::{ElementType, factory};
use egui::{Color32, Pos2};

fn stroke(x: f32) -> ElementType {
    factory::create_marker(Pos2::new(x, x), 4.0, Color32::RED)
}

#[test]
fn test_undo_then_redo_restores_exact_list() {
    let mut doc = Document::new();
    for x in [1.0, 2.0, 3.0] {
        doc.commit(stroke(x));
    }
    let before = doc.items().to_vec();

    assert!(doc.undo());
    assert_eq!(doc.len(), 2);
    assert!(doc.redo());

    assert_eq!(doc.items(), before.as_slice());
    assert!(doc.redo_stack().is_empty());
}

#[test]
fn test_commit_clears_redo_stack() {
    let mut doc = Document::new();
    doc.commit(stroke(1.0));
    doc.commit(stroke(2.0));
    doc.undo();
    doc.undo();
    assert_eq!(doc.redo_stack().len(), 2);

    doc.commit(stroke(3.0));
    assert!(doc.redo_stack().is_empty());
    assert!(!doc.can_redo());
}

#[test]
fn test_undo_and_redo_on_empty_are_noops() {
    let mut doc = Document::new();
    assert!(!doc.undo());
    assert!(!doc.redo());
    assert!(doc.is_empty());
    assert!(doc.redo_stack().is_empty());

    doc.commit(stroke(1.0));
    let before = doc.items().to_vec();
    assert!(!doc.redo());
    assert_eq!(doc.items(), before.as_slice());
}

#[test]
fn test_clear_then_undo_has_no_effect() {
    let mut doc = Document::new();
    doc.commit(stroke(1.0));
    doc.commit(stroke(2.0));
    doc.undo();

    assert!(doc.clear());
    assert!(doc.is_empty());
    assert!(doc.redo_stack().is_empty());

    assert!(!doc.undo());
    assert!(!doc.redo());
    assert!(doc.is_empty());
}

#[test]
fn test_clear_when_already_empty_is_noop() {
    let mut doc = Document::new();
    assert!(!doc.can_clear());
    assert!(!doc.clear());
}

#[test]
fn test_clear_with_only_redo_entries() {
    let mut doc = Document::new();
    doc.commit(stroke(1.0));
    doc.undo();
    assert!(doc.can_clear());
    assert!(doc.clear());
    assert!(!doc.can_redo());
}

#[test]
fn test_new_edit_branch_discards_redo() {
    let mut doc = Document::new();
    let a = stroke(1.0);
    let b = stroke(2.0);
    let c = stroke(3.0);

    doc.commit(a.clone());
    doc.commit(b.clone());
    doc.undo();
    assert_eq!(doc.items(), &[a.clone()]);
    assert_eq!(doc.redo_stack(), &[b]);

    doc.commit(c.clone());
    assert_eq!(doc.items(), &[a, c]);
    assert!(doc.redo_stack().is_empty());
}

#[test]
fn test_undo_redo_is_lifo() {
    let mut doc = Document::new();
    let items: Vec<_> = [1.0, 2.0, 3.0].into_iter().map(stroke).collect();
    for item in &items {
        doc.commit(item.clone());
    }

    doc.undo();
    doc.undo();
    // Most recently undone comes back first
    doc.redo();
    assert_eq!(doc.items(), &items[..2]);
    assert_eq!(doc.redo_stack(), &items[2..]);
}

#[test]
fn test_item_lookup_by_id() {
    let mut doc = Document::new();
    let item = stroke(1.0);
    let id = item.id();
    doc.commit(item);
    doc.commit(stroke(2.0));

    assert_eq!(doc.item(id).map(|i| i.id()), Some(id));
    doc.undo();
    doc.undo();
    assert!(doc.item_mut(id).is_none());
}
