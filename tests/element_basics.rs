use eframe_sketchpad::element::{
    Drawable, MarkerPreview, MarkerStroke, PREVIEW_OPACITY, Sticker, StickerPreview, factory,
};
use eframe_sketchpad::surface::{
    DrawCall, DrawState, LineCap, LineJoin, RecordingSurface, SubPath, Surface, TextAlign,
    TextBaseline,
};
use egui::{Color32, Pos2};
use std::f32::consts::FRAC_PI_2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn approx_pos(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < 1e-3
}

#[test]
fn test_single_point_stroke_is_filled_dot() {
    let stroke = MarkerStroke::new(Pos2::new(20.0, 30.0), 8.0, Color32::RED);
    let mut surface = RecordingSurface::default();
    stroke.render(&mut surface);

    assert_eq!(surface.calls().len(), 1);
    match &surface.calls()[0] {
        DrawCall::Fill { path, color } => {
            assert_eq!(*color, Color32::RED);
            match path.subpaths() {
                [SubPath::Circle { center, radius }] => {
                    assert_eq!(*center, Pos2::new(20.0, 30.0));
                    // Diameter equals the line width
                    assert!(approx(*radius * 2.0, 8.0));
                }
                other => panic!("expected a single circle, got {other:?}"),
            }
        }
        other => panic!("expected a fill, got {other:?}"),
    }
}

#[test]
fn test_multi_point_stroke_is_one_polyline() {
    let mut stroke = MarkerStroke::new(Pos2::new(0.0, 0.0), 6.0, Color32::BLUE);
    stroke.drag(Pos2::new(10.0, 0.0));
    stroke.drag(Pos2::new(10.0, 10.0));

    let mut surface = RecordingSurface::default();
    stroke.render(&mut surface);

    assert_eq!(surface.calls().len(), 1);
    match &surface.calls()[0] {
        DrawCall::Stroke {
            path,
            color,
            width,
            cap,
            join,
        } => {
            assert_eq!(*color, Color32::BLUE);
            assert_eq!(*width, 6.0);
            assert_eq!(*cap, LineCap::Round);
            assert_eq!(*join, LineJoin::Round);
            assert_eq!(
                path.subpaths(),
                &[SubPath::Polyline {
                    points: vec![
                        Pos2::new(0.0, 0.0),
                        Pos2::new(10.0, 0.0),
                        Pos2::new(10.0, 10.0)
                    ],
                    closed: false,
                }]
            );
        }
        other => panic!("expected a stroke, got {other:?}"),
    }
}

#[test]
fn test_stroke_render_leaves_state_untouched() {
    let mut stroke = MarkerStroke::new(Pos2::new(0.0, 0.0), 20.0, Color32::GREEN);
    stroke.drag(Pos2::new(5.0, 5.0));

    let mut surface = RecordingSurface::default();
    stroke.render(&mut surface);

    assert_eq!(*surface.context().state(), DrawState::default());
    assert_eq!(surface.depth(), 0);
}

#[test]
fn test_stroke_drag_appends_points() {
    let mut stroke = MarkerStroke::new(Pos2::new(1.0, 1.0), 2.0, Color32::BLACK);
    stroke.drag(Pos2::new(2.0, 2.0));
    stroke.drag(Pos2::new(3.0, 3.0));
    assert_eq!(
        stroke.points(),
        &[Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0), Pos2::new(3.0, 3.0)]
    );
}

#[test]
fn test_sticker_drag_replaces_position() {
    let mut sticker = Sticker::new(Pos2::new(1.0, 1.0), "🐸", 32.0, 0.0);
    sticker.drag(Pos2::new(40.0, 12.0));
    sticker.drag(Pos2::new(41.0, 13.0));
    assert_eq!(sticker.position(), Pos2::new(41.0, 13.0));
}

#[test]
fn test_rotated_sticker_does_not_leak_transform() {
    let rotated = factory::create_sticker(Pos2::new(50.0, 50.0), "⭐", 32.0, 90.0);
    let upright = factory::create_sticker(Pos2::new(10.0, 10.0), "🌮", 24.0, 0.0);

    let mut surface = RecordingSurface::default();
    rotated.render(&mut surface);
    upright.render(&mut surface);

    let texts: Vec<_> = surface.text_calls().cloned().collect();
    assert_eq!(texts.len(), 2);

    match &texts[0] {
        DrawCall::Text {
            text,
            anchor,
            angle,
            font_size,
            align,
            baseline,
            ..
        } => {
            assert_eq!(text, "⭐");
            assert!(approx_pos(*anchor, Pos2::new(50.0, 50.0)));
            assert!(approx(*angle, FRAC_PI_2));
            assert_eq!(*font_size, 32.0);
            assert_eq!(*align, TextAlign::Center);
            assert_eq!(*baseline, TextBaseline::Middle);
        }
        other => panic!("expected text, got {other:?}"),
    }

    match &texts[1] {
        DrawCall::Text { anchor, angle, .. } => {
            assert!(approx_pos(*anchor, Pos2::new(10.0, 10.0)));
            assert!(approx(*angle, 0.0));
        }
        other => panic!("expected text, got {other:?}"),
    }

    assert_eq!(surface.depth(), 0);
    assert!(surface.context().state().transform.is_identity());
}

#[test]
fn test_marker_preview_without_position_draws_nothing() {
    let preview = MarkerPreview::new(8.0, Color32::RED);
    let mut surface = RecordingSurface::default();
    preview.render(&mut surface);
    assert!(surface.calls().is_empty());
}

#[test]
fn test_marker_preview_is_thin_outline() {
    let mut preview = MarkerPreview::new(12.0, Color32::RED);
    preview.drag(Pos2::new(30.0, 40.0));

    let mut surface = RecordingSurface::default();
    surface.set_line_width(7.0);
    preview.render(&mut surface);

    match &surface.calls()[..] {
        [DrawCall::Stroke { path, width, color, .. }] => {
            assert_eq!(*width, 1.0);
            assert_eq!(*color, Color32::RED);
            assert_eq!(
                path.subpaths(),
                &[SubPath::Circle {
                    center: Pos2::new(30.0, 40.0),
                    radius: 6.0
                }]
            );
        }
        other => panic!("expected one outline, got {other:?}"),
    }
    // Shared line width is restored
    assert_eq!(surface.context().state().line_width, 7.0);
}

#[test]
fn test_sticker_preview_is_translucent() {
    let mut preview = StickerPreview::new("🐸", 32.0, 45.0);
    let mut surface = RecordingSurface::default();
    preview.render(&mut surface);
    assert!(surface.calls().is_empty());

    preview.drag(Pos2::new(64.0, 64.0));
    preview.render(&mut surface);

    match &surface.calls()[..] {
        [DrawCall::Text { color, anchor, angle, .. }] => {
            let expected = (255.0 * PREVIEW_OPACITY).round() as i32;
            assert!((color.a() as i32 - expected).abs() <= 1);
            assert!(approx_pos(*anchor, Pos2::new(64.0, 64.0)));
            assert!(approx(*angle, 45f32.to_radians()));
        }
        other => panic!("expected one glyph, got {other:?}"),
    }
    assert_eq!(surface.context().state().global_alpha, 1.0);
}

#[test]
fn test_placed_sticker_is_opaque() {
    let sticker = Sticker::new(Pos2::new(5.0, 5.0), "🐸", 32.0, 0.0);
    let mut surface = RecordingSurface::default();
    sticker.render(&mut surface);

    match &surface.calls()[..] {
        [DrawCall::Text { color, .. }] => assert_eq!(color.a(), 255),
        other => panic!("expected one glyph, got {other:?}"),
    }
}
