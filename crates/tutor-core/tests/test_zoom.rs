use approx::assert_relative_eq;

use tutor_core::zoom::{CursorHint, DragZoom, Offset, OverlayIcon, WheelDirection, ZoomState};

#[test]
fn test_default_is_identity() {
    let state = ZoomState::default();
    assert_eq!(state.scale, 1.0);
    assert_eq!(state.translate, Offset::ZERO);
    assert!(!state.is_zoomed());
    assert_eq!(state.transform(), "translate(0px, 0px) scale(1)");
}

#[test]
fn test_zoom_step_is_a_tenth() {
    let mut state = ZoomState::default();
    state.zoom(1.0);
    assert_relative_eq!(state.scale, 1.1, epsilon = 1e-6);
    state.zoom(2.0);
    assert_relative_eq!(state.scale, 1.3, epsilon = 1e-6);
}

#[test]
fn test_scale_stays_in_bounds_for_any_deltas() {
    let deltas = [
        -5.0, 3.0, 0.5, 40.0, -0.25, 7.0, -100.0, 0.0, 12.5, -3.3, 9.9, 1.0, 1.0, -1.0,
    ];
    let mut state = ZoomState::default();
    for d in deltas {
        state.zoom(d);
        assert!((1.0..=3.0).contains(&state.scale), "scale {} after delta {d}", state.scale);
    }
}

#[test]
fn test_non_finite_deltas_leave_scale_unchanged() {
    let mut state = ZoomState::default();
    state.zoom(f32::NAN);
    assert_eq!(state.scale, 1.0);

    state.zoom(5.0);
    assert_relative_eq!(state.scale, 1.5, epsilon = 1e-6);
    for d in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        state.zoom(d);
        assert_relative_eq!(state.scale, 1.5, epsilon = 1e-6);
    }

    state.toggle();
    assert_eq!(state.scale, 1.0);
    state.toggle();
    assert_eq!(state.scale, 3.0, "toggle still reaches max");
}

#[test]
fn test_drag_zoom_ignores_non_finite_positions() {
    let mut state = ZoomState::default();
    let mut drag = DragZoom::default();
    drag.press(300.0);
    drag.move_to(f32::NAN, true, &mut state);
    assert_eq!(state.scale, 1.0);
    drag.move_to(250.0, true, &mut state);
    assert_relative_eq!(state.scale, 1.05, epsilon = 1e-6);
}

#[test]
fn test_wheel_directions() {
    let mut state = ZoomState::default();
    state.wheel(WheelDirection::Down);
    assert_eq!(state.scale, 1.0, "cannot zoom out below identity");
    state.wheel(WheelDirection::Up);
    state.wheel(WheelDirection::Up);
    assert_relative_eq!(state.scale, 1.2, epsilon = 1e-6);
    state.wheel(WheelDirection::Down);
    assert_relative_eq!(state.scale, 1.1, epsilon = 1e-6);
}

#[test]
fn test_toggle_from_identity_saturates_at_max() {
    let mut state = ZoomState::default();
    state.toggle();
    assert_eq!(state.scale, 3.0);
    assert!(state.is_zoomed());
    assert_eq!(state.overlay_icon(), OverlayIcon::ZoomOut);
}

#[test]
fn test_toggle_when_zoomed_resets_scale_and_translation() {
    let mut state = ZoomState::default();
    state.zoom(4.0);
    state.begin_drag(Offset::new(10.0, 10.0));
    state.drag_to(Offset::new(50.0, 30.0));
    state.end_drag();
    assert_ne!(state.translate, Offset::ZERO);

    state.toggle();
    assert_eq!(state.scale, 1.0);
    assert_eq!(state.translate, Offset::ZERO);
    assert_eq!(state.overlay_icon(), OverlayIcon::ZoomIn);
}

#[test]
fn test_drag_ignored_at_identity() {
    let mut state = ZoomState::default();
    state.begin_drag(Offset::new(5.0, 5.0));
    assert!(!state.dragging);
    state.drag_to(Offset::new(100.0, 100.0));
    assert_eq!(state.translate, Offset::ZERO);
}

#[test]
fn test_drag_pans_relative_to_anchor() {
    let mut state = ZoomState::default();
    state.toggle();
    state.translate = Offset::new(20.0, -10.0);

    state.begin_drag(Offset::new(100.0, 100.0));
    assert_eq!(state.drag_anchor, Some(Offset::new(80.0, 110.0)));
    assert_eq!(state.cursor(), CursorHint::Grabbing);

    state.drag_to(Offset::new(130.0, 90.0));
    assert_eq!(state.translate, Offset::new(50.0, -20.0));
    assert_eq!(state.transform(), "translate(50px, -20px) scale(3)");

    state.end_drag();
    assert!(!state.dragging);
    assert_eq!(state.cursor(), CursorHint::Move);

    // Moving after release does nothing.
    state.drag_to(Offset::new(0.0, 0.0));
    assert_eq!(state.translate, Offset::new(50.0, -20.0));
}

#[test]
fn test_cursor_at_identity_is_pointer() {
    assert_eq!(ZoomState::default().cursor(), CursorHint::Pointer);
}

#[test]
fn test_reset_clears_everything() {
    let mut state = ZoomState::default();
    state.toggle();
    state.begin_drag(Offset::new(1.0, 1.0));
    state.reset();
    assert_eq!(state, ZoomState::default());
}

#[test]
fn test_drag_zoom_upward_zooms_in() {
    let mut state = ZoomState::default();
    let mut drag = DragZoom::default();
    drag.press(300.0);
    drag.move_to(250.0, true, &mut state);
    assert_relative_eq!(state.scale, 1.05, epsilon = 1e-6);
    drag.move_to(200.0, true, &mut state);
    assert_relative_eq!(state.scale, 1.1, epsilon = 1e-6);
    drag.move_to(250.0, true, &mut state);
    assert_relative_eq!(state.scale, 1.05, epsilon = 1e-6);
}

#[test]
fn test_drag_zoom_requires_primary_button() {
    let mut state = ZoomState::default();
    let mut drag = DragZoom::default();
    drag.press(300.0);
    drag.move_to(0.0, false, &mut state);
    assert_eq!(state.scale, 1.0);
}

#[test]
fn test_pan_and_drag_zoom_compound_in_one_gesture() {
    let mut state = ZoomState::default();
    state.zoom(5.0);
    let mut drag = DragZoom::default();

    let start = Offset::new(100.0, 100.0);
    state.begin_drag(start);
    drag.press(start.y);

    let end = Offset::new(100.0, 50.0);
    state.drag_to(end);
    drag.move_to(end.y, true, &mut state);

    assert_eq!(state.translate, Offset::new(0.0, -50.0));
    assert_relative_eq!(state.scale, 1.55, epsilon = 1e-5);
}

#[test]
fn test_first_drag_event_counts_movement_since_press() {
    let mut state = ZoomState::default();
    state.zoom(5.0);
    let mut drag = DragZoom::default();

    // Pressed at y=200; the first move is only reported at y=190.
    let press = Offset::new(50.0, 200.0);
    state.begin_drag(press);
    drag.press(press.y);

    let first = Offset::new(56.0, 190.0);
    state.drag_to(first);
    drag.move_to(first.y, true, &mut state);

    assert_eq!(state.translate, Offset::new(6.0, -10.0));
    assert_relative_eq!(state.scale, 1.51, epsilon = 1e-5);
}
