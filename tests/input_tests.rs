// Host-side tests for interpolators, input trackers and the cursor follower.

use glam::Vec2;
use page_fx::core::*;

#[test]
fn easing_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    // Out-of-range inputs clamp
    assert_eq!(ease_in_out_cubic(-3.0), 0.0);
    assert_eq!(ease_in_out_cubic(7.0), 1.0);
}

#[test]
fn easing_is_monotonic() {
    let mut prev = ease_in_out_cubic(0.0);
    for i in 1..=100 {
        let v = ease_in_out_cubic(i as f64 / 100.0);
        assert!(v >= prev, "easing decreased at step {i}");
        prev = v;
    }
}

#[test]
fn lerp_basic() {
    assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
    assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    assert!((lerp(2.0, 4.0, 0.25) - 2.5).abs() < 1e-6);
}

#[test]
fn throttle_accepts_first_call_and_drops_inside_window() {
    let mut t = Throttle::new(10.0);
    assert!(t.ready(100.0));
    assert!(!t.ready(105.0));
    assert!(!t.ready(109.9));
    assert!(t.ready(110.0));
    assert!(!t.ready(115.0));
}

#[test]
fn debounce_fires_only_for_latest_call() {
    let mut d = Debounce::new(250);
    let first = d.call();
    let second = d.call();
    let third = d.call();
    assert!(d.is_pending());
    assert!(!d.expire(first));
    assert!(!d.expire(second));
    assert!(d.expire(third));
    assert!(!d.is_pending());
    // A token fires at most once
    assert!(!d.expire(third));
}

#[test]
fn debounce_without_calls_never_fires() {
    let mut d = Debounce::new(250);
    assert!(!d.is_pending());
    assert!(!d.expire(0));
    assert_eq!(d.delay_ms(), 250);
}

#[test]
fn tracker_readers_see_writer_updates() {
    let (writer, reader) = tracker(PointerState::default());
    let second = writer.reader();
    writer.set(PointerState { x: 10.0, y: 20.0 });
    assert_eq!(reader.get(), PointerState { x: 10.0, y: 20.0 });
    assert_eq!(second.get().as_vec2(), Vec2::new(10.0, 20.0));
    assert_eq!(writer.get(), reader.get());
}

#[test]
fn viewport_dimensions_stay_positive() {
    let vp = ViewportState::new(0, 0);
    assert_eq!((vp.width, vp.height), (1, 1));
    assert_eq!(ViewportState::new(800, 600).center(), Vec2::new(400.0, 300.0));
}

#[test]
fn scroll_percent_bounds() {
    assert_eq!(scroll_percent(0.0, 1000.0), 0.0);
    assert!((scroll_percent(250.0, 1000.0) - 25.0).abs() < 1e-9);
    assert_eq!(scroll_percent(1500.0, 1000.0), 100.0);
    // Non-scrollable page
    assert_eq!(scroll_percent(50.0, 0.0), 0.0);
    assert_eq!(scroll_percent(f64::NAN, 1000.0), 0.0);
    assert_eq!(ScrollState::new(-20.0, 1000.0).offset, 0.0);
}

#[test]
fn cursor_dot_tracks_pointer_exactly() {
    let mut c = CursorFollower::new(0.15, 0.2);
    c.point_to(Vec2::new(120.0, 80.0));
    c.step();
    assert_eq!(c.dot, Vec2::new(120.0, 80.0));
    assert!((c.ring.x - 18.0).abs() < 1e-4);
    assert!((c.ring.y - 12.0).abs() < 1e-4);
}

#[test]
fn cursor_ring_converges() {
    let mut c = CursorFollower::new(0.15, 0.2);
    c.point_to(Vec2::new(500.0, 300.0));
    let mut last_dist = c.ring.distance(c.target);
    let mut strict_steps = 0;
    for step in 0..120 {
        c.step();
        let d = c.ring.distance(c.target);
        // f32 stalls about 1e-4 px short of the target
        if last_dist > 1e-3 {
            assert!(d < last_dist, "no progress at step {step}: {d} vs {last_dist}");
            strict_steps += 1;
        } else {
            assert!(d <= last_dist, "moved away at step {step}");
        }
        last_dist = d;
    }
    assert!(strict_steps > 50);
    assert!(last_dist < 0.01, "ring still {last_dist}px away");
}

#[test]
fn cursor_hover_uses_larger_factor() {
    let mut c = CursorFollower::new(0.15, 0.2);
    assert_eq!(c.factor(), 0.15);
    c.set_hover(true);
    assert_eq!(c.factor(), 0.2);
    c.point_to(Vec2::new(100.0, 0.0));
    c.step();
    assert!((c.ring.x - 20.0).abs() < 1e-4);
}

#[test]
fn hover_target_predicate() {
    const NONE: [&str; 0] = [];
    assert!(is_hover_target("A", NONE));
    assert!(is_hover_target("button", NONE));
    assert!(is_hover_target("TEXTAREA", ["x"]));
    assert!(is_hover_target("DIV", ["card", "feature"]));
    assert!(is_hover_target("IMG", ["logo"]));
    assert!(!is_hover_target("DIV", ["card"]));
    assert!(!is_hover_target("SPAN", NONE));
}

#[test]
fn translate_formats_two_decimals() {
    assert_eq!(translate_px(Vec2::new(1.0, -2.5)), "translate(1.00px, -2.50px)");
}
