use dayline_core::time::TimeOfDay;
use dayline_core::viewport::{ViewportController, BASE_HOUR_WIDTH, ZOOM_MAX, ZOOM_MIN};

const TOLERANCE: f32 = 1e-3;

#[test]
fn test_pixels_per_minute_follows_zoom() {
    let mut viewport = ViewportController::new();
    assert!((viewport.pixels_per_minute() - BASE_HOUR_WIDTH / 60.0).abs() < TOLERANCE);

    viewport.apply_zoom(2.0, 0.0);
    assert!((viewport.pixels_per_minute() - 2.0 * BASE_HOUR_WIDTH / 60.0).abs() < TOLERANCE);
}

#[test]
fn test_zoom_clamps_to_exact_bounds() {
    let mut viewport = ViewportController::new();
    viewport.apply_zoom(0.001, 0.0);
    assert_eq!(viewport.zoom(), ZOOM_MIN);

    viewport.apply_zoom(99.0, 0.0);
    assert_eq!(viewport.zoom(), ZOOM_MAX);
}

#[test]
fn test_noop_zoom_leaves_scroll_untouched() {
    let mut viewport = ViewportController::new();
    viewport.pan(300.0);
    let before = viewport.scroll_offset();

    // Clamps back to the current zoom → must not stage any scroll write.
    viewport.apply_zoom(viewport.zoom(), 150.0);
    viewport.commit_pending();
    assert_eq!(viewport.scroll_offset(), before);
}

#[test]
fn test_anchor_invariant() {
    let mut viewport = ViewportController::new();
    viewport.pan(400.0);
    let s0 = viewport.scroll_offset();
    let z0 = viewport.zoom();
    let anchor_x = 250.0;

    viewport.apply_zoom(2.5, anchor_x);
    viewport.commit_pending();

    // The content point under the anchor stays under the anchor:
    // s1 + x == (s0 + x) * (z1 / z0)
    let expected = (s0 + anchor_x) * (viewport.zoom() / z0) - anchor_x;
    assert!(
        (viewport.scroll_offset() - expected).abs() < TOLERANCE,
        "scroll {} != expected {}",
        viewport.scroll_offset(),
        expected
    );
}

#[test]
fn test_zoom_commit_is_deferred_to_next_frame() {
    let mut viewport = ViewportController::new();
    viewport.pan(400.0);
    let before = viewport.scroll_offset();

    viewport.apply_zoom(2.0, 100.0);
    // The scale changes immediately, the scroll write waits for the frame.
    assert_eq!(viewport.zoom(), 2.0);
    assert_eq!(viewport.scroll_offset(), before);

    viewport.commit_pending();
    assert!((viewport.scroll_offset() - (before + 100.0) * 2.0 + 100.0).abs() < TOLERANCE);
}

#[test]
fn test_two_zooms_in_one_frame_compound() {
    let mut viewport = ViewportController::new();
    viewport.pan(120.0);
    let s0 = viewport.scroll_offset();
    let anchor_x = 80.0;

    // Two gesture events arrive before the next paint; the second must see
    // the first one's staged state, not the stale committed offset.
    viewport.apply_zoom(2.0, anchor_x);
    viewport.apply_zoom(4.0, anchor_x);
    viewport.commit_pending();

    let expected = (s0 + anchor_x) * 4.0 - anchor_x;
    assert!((viewport.scroll_offset() - expected).abs() < TOLERANCE);
}

#[test]
fn test_wheel_zoom_compounds_multiplicatively() {
    let mut viewport = ViewportController::new();
    viewport.wheel_zoom(1.0, 0.0);
    viewport.wheel_zoom(1.0, 0.0);
    assert!((viewport.zoom() - 1.21).abs() < TOLERANCE);

    viewport.wheel_zoom(-1.0, 0.0);
    assert!((viewport.zoom() - 1.089).abs() < TOLERANCE);
}

#[test]
fn test_pinch_tracks_latest_baseline() {
    let mut viewport = ViewportController::new();
    viewport.pinch_begin(100.0);
    viewport.pinch_move(200.0, 0.0);
    assert!((viewport.zoom() - 2.0).abs() < TOLERANCE);

    // Baseline refreshed to 200 after the move; returning to 100 halves.
    viewport.pinch_move(100.0, 0.0);
    assert!((viewport.zoom() - 1.0).abs() < TOLERANCE);

    viewport.pinch_end();
}

#[test]
fn test_pinch_zero_baseline_guarded() {
    let mut viewport = ViewportController::new();
    viewport.pinch_begin(0.0);
    // First move with no valid baseline only records one; no zoom jump.
    viewport.pinch_move(150.0, 0.0);
    assert_eq!(viewport.zoom(), 1.0);

    viewport.pinch_move(300.0, 0.0);
    assert!((viewport.zoom() - 2.0).abs() < TOLERANCE);
}

#[test]
fn test_pinch_ignores_degenerate_distance() {
    let mut viewport = ViewportController::new();
    viewport.pinch_begin(100.0);
    viewport.pinch_move(0.0, 0.0);
    assert_eq!(viewport.zoom(), 1.0);
}

#[test]
fn test_pan_clamps_at_zero() {
    let mut viewport = ViewportController::new();
    viewport.pan(-50.0);
    assert_eq!(viewport.scroll_offset(), 0.0);

    viewport.pan(75.0);
    assert_eq!(viewport.scroll_offset(), 75.0);
}

#[test]
fn test_center_on_runs_once() {
    let mut viewport = ViewportController::new();
    let noon = TimeOfDay::parse("12:00");
    viewport.center_on(noon, 1000.0);

    // 720 min * (200/60) px/min - 500
    let expected = 720.0 * BASE_HOUR_WIDTH / 60.0 - 500.0;
    assert!((viewport.scroll_offset() - expected).abs() < TOLERANCE);

    // Subsequent calls (data refresh, zoom change) never re-center.
    viewport.pan(-viewport.scroll_offset());
    viewport.center_on(noon, 1000.0);
    assert_eq!(viewport.scroll_offset(), 0.0);
}

#[test]
fn test_center_on_clamps_early_morning_to_zero() {
    let mut viewport = ViewportController::new();
    viewport.center_on(TimeOfDay::parse("00:30"), 2000.0);
    assert_eq!(viewport.scroll_offset(), 0.0);
}
