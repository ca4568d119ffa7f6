use eframe_sketchpad::element::{Drawable, factory};
use eframe_sketchpad::renderer::{CANVAS_BACKGROUND, Renderer};
use eframe_sketchpad::state::SketchSession;
use eframe_sketchpad::surface::EguiSurface;
use egui::emath::Rot2;
use egui::{Color32, LayerId, Painter, Pos2, RawInput, Rect, Shape, Vec2};
use std::f32::consts::FRAC_PI_2;

fn canvas() -> Rect {
    Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(256.0))
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn approx_pos(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < 1e-3
}

// Paint inside a real egui pass so fonts are loaded, then collect the shapes
fn painted_shapes(draw: impl FnOnce(&Painter)) -> Vec<Shape> {
    let ctx = egui::Context::default();
    let mut draw = Some(draw);
    let output = ctx.run(RawInput::default(), |ctx| {
        if let Some(draw) = draw.take() {
            draw(&ctx.layer_painter(LayerId::background()));
        }
    });
    output
        .shapes
        .into_iter()
        .map(|clipped| clipped.shape)
        .collect()
}

#[test]
fn test_rotated_sticker_is_centered_on_its_position() {
    let sticker = factory::create_sticker(Pos2::new(50.0, 50.0), "⭐", 32.0, 90.0);
    let shapes = painted_shapes(|painter| {
        let mut surface = EguiSurface::new(painter, canvas(), CANVAS_BACKGROUND);
        sticker.render(&mut surface);
    });

    let texts: Vec<_> = shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Text(text) => Some(text),
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), 1);

    let text = texts[0];
    assert!(approx(text.angle, FRAC_PI_2));
    // The text shape pivots on its top-left corner
    let center = text.pos + Rot2::from_angle(text.angle) * (text.galley.size() / 2.0);
    assert!(
        approx_pos(center, canvas().min + Vec2::new(50.0, 50.0)),
        "glyph centered at {center:?}"
    );
}

#[test]
fn test_upright_sticker_after_rotated_one() {
    let rotated = factory::create_sticker(Pos2::new(50.0, 50.0), "⭐", 32.0, 90.0);
    let upright = factory::create_sticker(Pos2::new(10.0, 10.0), "🌮", 32.0, 0.0);
    let shapes = painted_shapes(|painter| {
        let mut surface = EguiSurface::new(painter, canvas(), CANVAS_BACKGROUND);
        rotated.render(&mut surface);
        upright.render(&mut surface);
    });

    let last = shapes
        .iter()
        .rev()
        .find_map(|shape| match shape {
            Shape::Text(text) => Some(text),
            _ => None,
        })
        .expect("text shape");
    assert!(approx(last.angle, 0.0));
    let center = last.pos + last.galley.size() / 2.0;
    assert!(approx_pos(center, canvas().min + Vec2::new(10.0, 10.0)));
}

#[test]
fn test_stroke_is_path_with_round_cap_discs() {
    let mut session = SketchSession::default();
    session.pointer_down(Pos2::new(0.0, 0.0));
    session.pointer_move(Pos2::new(20.0, 0.0));
    let width = session.style().width();
    let color = session.style().color();

    let mut renderer = Renderer::default();
    let shapes = painted_shapes(|painter| renderer.paint(painter, canvas(), &session));

    // Background first
    match shapes.first() {
        Some(Shape::Rect(rect)) => {
            assert_eq!(rect.rect, canvas());
            assert_eq!(rect.fill, CANVAS_BACKGROUND);
        }
        other => panic!("expected the clear rect, got {other:?}"),
    }

    let origin = canvas().min.to_vec2();
    let paths: Vec<_> = shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Path(path) => Some(path),
            _ => None,
        })
        .collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths[0].points,
        vec![Pos2::new(0.0, 0.0) + origin, Pos2::new(20.0, 0.0) + origin]
    );
    assert!(!paths[0].closed);
    assert_eq!(paths[0].stroke.width, width);

    let discs: Vec<_> = shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        })
        .collect();
    // One cap per end; the preview is hidden mid-gesture
    assert_eq!(discs.len(), 2);
    for (disc, end) in discs.iter().zip([Pos2::new(0.0, 0.0), Pos2::new(20.0, 0.0)]) {
        assert!(approx_pos(disc.center, end + origin));
        assert!(approx(disc.radius, width / 2.0));
        assert_eq!(disc.fill, color);
    }
}

#[test]
fn test_single_point_dot_and_preview_outline() {
    let mut session = SketchSession::default();
    session.pointer_down(Pos2::new(30.0, 40.0));
    session.pointer_up(Pos2::new(30.0, 40.0));
    let width = session.style().width();

    let mut renderer = Renderer::default();
    let shapes = painted_shapes(|painter| renderer.paint(painter, canvas(), &session));

    let circles: Vec<_> = shapes
        .iter()
        .filter_map(|shape| match shape {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 2);

    let center = canvas().min + Vec2::new(30.0, 40.0);
    let (dot, outline) = (circles[0], circles[1]);
    assert!(approx_pos(dot.center, center));
    assert!(approx(dot.radius, width / 2.0));
    assert_ne!(dot.fill, Color32::TRANSPARENT);

    // The preview sits on top as a hairline ring
    assert!(approx_pos(outline.center, center));
    assert_eq!(outline.fill, Color32::TRANSPARENT);
    assert_eq!(outline.stroke.width, 1.0);
}
