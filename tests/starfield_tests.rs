// Host-side tests for the star field simulation.

use glam::Vec2;
use page_fx::constants::*;
use page_fx::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(width: u32, height: u32, count: usize) -> StarField {
    StarField::new(ViewportState::new(width, height), count, StdRng::seed_from_u64(7))
}

#[test]
fn star_count_scales_with_width_and_caps() {
    assert_eq!(star_count(500, STAR_WIDTH_DIVISOR, STAR_CAP), 100);
    assert_eq!(star_count(2000, STAR_WIDTH_DIVISOR, STAR_CAP), 200);
    assert_eq!(star_count(3, STAR_WIDTH_DIVISOR, STAR_CAP), 0);
    // A zero divisor is treated as one
    assert_eq!(star_count(40, 0, STAR_CAP), 40);
}

#[test]
fn new_field_places_stars_inside_viewport() {
    let f = field(320, 200, 64);
    assert_eq!(f.stars.len(), 64);
    for s in &f.stars {
        assert!(s.position.x >= 0.0 && s.position.x < 320.0);
        assert!(s.position.y >= 0.0 && s.position.y < 200.0);
        assert!(s.radius >= 0.0 && s.radius < STAR_RADIUS_MAX);
        assert!(s.speed >= STAR_SPEED_MIN && s.speed < STAR_SPEED_MIN + STAR_SPEED_SPAN);
    }
}

#[test]
fn twinkle_stays_in_opacity_window() {
    assert_eq!(twinkle(1.0, 0.03, 0.99), STAR_OPACITY_MAX);
    assert_eq!(twinkle(0.2, 0.03, 0.0), STAR_OPACITY_MIN);
    assert_eq!(twinkle(f32::NAN, 0.03, 0.5), STAR_OPACITY_MIN);
    let mid = twinkle(0.5, 0.02, 0.75);
    assert!((mid - 0.505).abs() < 1e-6);
}

#[test]
fn stepping_keeps_opacity_clamped_and_stars_in_bounds() {
    let mut f = field(100, 50, 20);
    for _ in 0..1000 {
        f.step();
        for s in &f.stars {
            assert!(s.opacity >= STAR_OPACITY_MIN && s.opacity <= STAR_OPACITY_MAX);
            assert!(s.position.y >= 0.0 && s.position.y <= 50.0);
            assert!(s.position.x >= 0.0 && s.position.x < 100.0);
        }
    }
}

#[test]
fn star_wraps_to_top_past_bottom_edge() {
    let mut f = field(100, 50, 1);
    f.stars[0].position = Vec2::new(10.0, 49.99);
    f.stars[0].speed = 0.5;
    f.step();
    assert_eq!(f.stars[0].position.y, 0.0);
}

#[test]
fn resize_changes_bounds_not_positions() {
    let mut f = field(300, 300, 5);
    let before: Vec<Vec2> = f.stars.iter().map(|s| s.position).collect();
    f.resize(ViewportState::new(200, 20));
    assert_eq!(f.bounds(), Vec2::new(200.0, 20.0));
    let after: Vec<Vec2> = f.stars.iter().map(|s| s.position).collect();
    assert_eq!(before, after);
}

#[test]
fn parallax_is_zero_at_center() {
    let vp = ViewportState::new(800, 600);
    assert_eq!(parallax_offset(vp.center(), vp, 20.0), Vec2::ZERO);
    let corner = parallax_offset(Vec2::new(800.0, 600.0), vp, 20.0);
    assert!((corner - Vec2::new(10.0, 10.0)).length() < 1e-5);
}

#[test]
fn fill_styles() {
    assert_eq!(star_fill_style(0.5), "rgba(255, 255, 255, 0.500)");
    assert_eq!(star_fill_style(3.0), "rgba(255, 255, 255, 1.000)");
    assert_eq!(trail_fill_style(STAR_TRAIL_FADE_ALPHA), "rgba(0, 0, 0, 0.100)");
}
