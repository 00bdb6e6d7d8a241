use super::*;

use std::{
    env, fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::config::AssetSettings;
use shared::domain::{Point, Rect, Rgba, Size};

fn temp_root(tag: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let root = env::temp_dir().join(format!("qyrou_pulse_{tag}_{suffix}"));
    fs::create_dir_all(&root).expect("temp root");
    root
}

fn test_style() -> PanelStyle {
    PanelStyle {
        base: Rgba::rgb(224, 229, 236),
        highlight: Rgba::rgb(255, 255, 255),
        shadow: Rgba::rgb(163, 177, 198),
        radius: 20.0,
        offset: 4.0,
        stroke_width: 2.0,
    }
}

#[test]
fn drag_from_background_moves_window_by_pointer_delta() {
    let mut drag = DragController::new();
    let origin = Point::new(300.0, 200.0);
    let press = Point::new(340.0, 215.0);

    assert!(drag.press(press, origin, PressTarget::Background));
    let moved = drag
        .drag_to(Point::new(press.x + 25.0, press.y - 40.0))
        .expect("dragging");
    assert_eq!(moved, Point::new(325.0, 160.0));

    let back = drag.drag_to(press).expect("still dragging");
    assert_eq!(back, origin);
}

#[test]
fn drag_from_text_input_never_moves_window() {
    let mut drag = DragController::new();
    assert!(!drag.press(
        Point::new(50.0, 700.0),
        Point::new(10.0, 10.0),
        PressTarget::TextInput
    ));
    assert!(!drag.is_dragging());
    assert_eq!(drag.drag_to(Point::new(500.0, 500.0)), None);
    assert!(!drag.release());
}

#[test]
fn control_press_cancels_nothing_and_starts_nothing() {
    let mut drag = DragController::new();
    assert!(!drag.press(Point::ZERO, Point::ZERO, PressTarget::Control));
    assert_eq!(drag.drag_to(Point::new(1.0, 1.0)), None);
}

#[test]
fn release_ends_drag() {
    let mut drag = DragController::new();
    drag.press(Point::new(5.0, 5.0), Point::ZERO, PressTarget::Background);
    assert!(drag.release());
    assert_eq!(drag.drag_to(Point::new(9.0, 9.0)), None);
    assert!(!drag.release());
}

#[test]
fn mask_clips_corners_to_configured_radius() {
    let mask = RoundedMask::new(Size::new(400.0, 300.0), 20.0);
    assert_eq!(mask.radius(), 20.0);

    assert!(mask.contains(Point::new(200.0, 150.0)));
    assert!(mask.contains(Point::new(0.0, 150.0)));
    assert!(mask.contains(Point::new(200.0, 0.0)));

    // Corner pixels fall outside the arc.
    assert!(!mask.contains(Point::new(1.0, 1.0)));
    assert!(!mask.contains(Point::new(399.0, 1.0)));
    assert!(!mask.contains(Point::new(1.0, 299.0)));
    assert!(!mask.contains(Point::new(399.0, 299.0)));

    // On the 45 degree diagonal, just inside the arc.
    let inset = 20.0 - 20.0 / 2f32.sqrt() + 0.5;
    assert!(mask.contains(Point::new(inset, inset)));
    assert!(!mask.contains(Point::new(-1.0, 150.0)));
    assert!(!mask.contains(Point::new(200.0, 301.0)));
}

#[test]
fn mask_recomputed_for_new_size_keeps_radius() {
    let before = RoundedMask::new(Size::new(850.0, 800.0), 24.0);
    let after = RoundedMask::new(Size::new(1000.0, 900.0), 24.0);
    assert_eq!(before.radius(), after.radius());
    assert!(!after.contains(Point::new(999.0, 899.0)));
    assert!(after.contains(Point::new(900.0, 850.0)));
    assert_eq!(after.bounds().size(), Size::new(1000.0, 900.0));
}

#[test]
fn mask_radius_is_clamped_to_half_the_short_side() {
    let mask = RoundedMask::new(Size::new(40.0, 30.0), 100.0);
    assert_eq!(mask.radius(), 15.0);
    assert_eq!(RoundedMask::new(Size::new(40.0, 30.0), -3.0).radius(), 0.0);
    assert_eq!(RoundedMask::new(Size::new(40.0, 30.0), f32::NAN).radius(), 0.0);
    assert!(RoundedMask::new(Size::new(40.0, 30.0), 0.0).contains(Point::ZERO));
}

#[test]
fn mask_radius_never_exceeds_paintable_radius() {
    let mask = RoundedMask::new(Size::new(850.0, 800.0), 300.0);
    assert_eq!(mask.radius(), MAX_CORNER_RADIUS);

    // Just inside the painted 255px arc, outside a 300px one.
    let r = MAX_CORNER_RADIUS;
    let diag = r - r / std::f32::consts::SQRT_2 + 2.0;
    assert!(mask.contains(Point::new(diag, diag)));
}

#[test]
fn raised_panel_draws_outlines_behind_fill() {
    let rect = Rect::from_min_size(Point::new(10.0, 10.0), Size::new(100.0, 60.0));
    let plan = paint_plan(rect, PanelMode::Raised, &test_style());

    assert_eq!(plan.len(), 3);
    match plan[0] {
        PaintOp::Stroke { rect: r, color, .. } => {
            assert_eq!(color, Rgba::rgb(255, 255, 255));
            assert_eq!(r.min, Point::new(6.0, 6.0));
        }
        other => panic!("expected highlight stroke, got {other:?}"),
    }
    match plan[1] {
        PaintOp::Stroke { rect: r, color, .. } => {
            assert_eq!(color, Rgba::rgb(163, 177, 198));
            assert_eq!(r.max, Point::new(114.0, 74.0));
        }
        other => panic!("expected shadow stroke, got {other:?}"),
    }
    assert!(matches!(plan[2], PaintOp::Fill { rect: r, .. } if r == rect));
}

#[test]
fn inset_panel_draws_outlines_inside_fill() {
    let rect = Rect::from_min_size(Point::ZERO, Size::new(200.0, 50.0));
    let plan = paint_plan(rect, PanelMode::Inset, &test_style());

    assert!(matches!(plan[0], PaintOp::Fill { .. }));
    let strokes: Vec<_> = plan
        .iter()
        .filter(|op| matches!(op, PaintOp::Stroke { .. }))
        .collect();
    assert_eq!(strokes.len(), 2);
    for op in &strokes {
        let r = op.rect();
        assert!(r.min.x >= rect.min.x && r.min.y >= rect.min.y);
        assert!(r.max.x <= rect.max.x && r.max.y <= rect.max.y);
    }
    match plan[1] {
        PaintOp::Stroke { color, radius, .. } => {
            assert_eq!(color, Rgba::rgb(163, 177, 198));
            assert_eq!(radius, 16.0);
        }
        other => panic!("expected shadow stroke, got {other:?}"),
    }
}

#[test]
fn send_button_uses_icon_when_asset_exists() {
    let root = temp_root("assets_icon");
    fs::write(root.join("icon_send.png"), b"png").expect("write icon");

    let assets = AssetSettings {
        dir: Some(root.clone()),
        ..AssetSettings::default()
    };
    let resolver = AssetResolver::from_settings(&assets);
    assert_eq!(
        send_button_face(&resolver, &assets),
        SendButtonFace::Icon(root.join("icon_send.png"))
    );

    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn send_button_falls_back_to_glyph_without_asset() {
    let root = temp_root("assets_glyph");
    let assets = AssetSettings {
        send_icon: "missing_send_icon.png".into(),
        ..AssetSettings::default()
    };
    let resolver = AssetResolver::new(vec![root.clone()]);
    assert_eq!(
        send_button_face(&resolver, &assets),
        SendButtonFace::Glyph("➤".into())
    );

    let blank_glyph = AssetSettings {
        send_glyph: "  ".into(),
        ..assets
    };
    assert_eq!(
        send_button_face(&resolver, &blank_glyph),
        SendButtonFace::Glyph("➤".into())
    );

    fs::remove_dir_all(root).expect("cleanup");
}

#[test]
fn resolver_accepts_absolute_paths_and_skips_directories() {
    let root = temp_root("assets_abs");
    let icon = root.join("app.png");
    fs::write(&icon, b"png").expect("write icon");
    fs::create_dir_all(root.join("folder.png")).expect("dir");

    let resolver = AssetResolver::new(vec![root.clone()]);
    assert_eq!(resolver.resolve(icon.to_string_lossy().as_ref()), Some(icon));
    assert_eq!(resolver.resolve("folder.png"), None);
    assert_eq!(resolver.resolve(""), None);

    fs::remove_dir_all(root).expect("cleanup");
}
