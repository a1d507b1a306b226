// Host-side tests for scroll-driven math, hover transforms and particles.

use glam::Vec2;
use page_fx::constants::*;
use page_fx::core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn header_threshold_is_exclusive() {
    assert!(!header_scrolled(100.0, 100.0));
    assert!(header_scrolled(100.5, 100.0));
}

#[test]
fn hero_parallax_translates_and_fades() {
    let top = hero_parallax(0.0);
    assert_eq!(top, HeroParallax { translate_y: 0.0, opacity: 1.0 });
    let mid = hero_parallax(400.0);
    assert_eq!(mid.translate_y, 200.0);
    assert!((mid.opacity - 0.5).abs() < 1e-12);
    assert_eq!(hero_parallax(2000.0).opacity, 0.0);
}

#[test]
fn card_parallax_window_and_speed() {
    let y = card_parallax(600.0, 300.0, 2).unwrap();
    assert!((y - 27.0).abs() < 1e-9);
    assert_eq!(card_parallax(800.0, 300.0, 0), None);
    assert_eq!(card_parallax(0.0, 500.0, 0), None);
    assert!(card_parallax(0.0, 499.0, 0).unwrap() < 0.0);
}

#[test]
fn smooth_scroll_eases_to_offset_target() {
    let mut s = SmoothScroll::new(0.0, 1080.0, 80.0, 1200.0);
    assert_eq!(s.target(), 1000.0);
    assert_eq!(s.sample(100.0), (0.0, false));
    let (mid, done) = s.sample(700.0);
    assert!((mid - 500.0).abs() < 1e-9);
    assert!(!done);
    assert_eq!(s.sample(1300.0), (1000.0, true));
    assert_eq!(s.sample(5000.0), (1000.0, true));
}

#[test]
fn smooth_scroll_upwards() {
    let mut s = SmoothScroll::new(2000.0, 580.0, 80.0, 1200.0);
    s.sample(0.0);
    let (quarter, _) = s.sample(300.0);
    assert!(quarter < 2000.0 && quarter > 500.0);
    assert_eq!(s.sample(1200.0), (500.0, true));
}

fn card() -> Bounds {
    Bounds {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 100.0,
    }
}

#[test]
fn magnetic_pulls_toward_pointer() {
    let off = magnetic_offset(Vec2::new(110.0, 60.0), card(), MAGNETIC_STRENGTH);
    assert!((off - Vec2::new(2.0, 2.0)).length() < 1e-5);
    assert_eq!(magnetic_offset(card().center(), card(), MAGNETIC_STRENGTH), Vec2::ZERO);
    assert_eq!(
        magnetic_transform(Vec2::new(2.0, -1.0)),
        "translate(2.00px, -1.00px) scale(1.05)"
    );
}

#[test]
fn tilt_leans_toward_pointer() {
    let (rx, ry) = tilt_angles(Vec2::new(150.0, 70.0), card(), TILT_DIVISOR);
    assert!((rx - 2.0).abs() < 1e-5);
    assert!((ry + 5.0).abs() < 1e-5);
    assert_eq!(
        tilt_transform(2.0, -5.0),
        "perspective(1000px) rotateX(2.00deg) rotateY(-5.00deg) translateY(-20px) scale(1.05)"
    );
    assert!(TILT_REST.starts_with("perspective(1000px)"));
}

#[test]
fn particle_parameters_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let p = ParticleSpec::random(&mut rng, PARTICLE_LIFETIME_MIN_MS, PARTICLE_LIFETIME_SPAN_MS);
        assert!(p.size_px >= 2.0 && p.size_px < 6.0);
        assert!(p.left_pct >= 0.0 && p.left_pct < 100.0);
        assert!(p.drift_px.abs() <= PARTICLE_DRIFT_MAX_PX);
        assert!(p.lifetime_ms >= 4000.0 && p.lifetime_ms < 7000.0);
    }
}

#[test]
fn particle_keyframes_rise_and_fade() {
    let p = ParticleSpec {
        size_px: 3.0,
        left_pct: 50.0,
        drift_px: 10.0,
        lifetime_ms: 5000.0,
    };
    let [first, mid, last] = p.keyframes(800.0);
    assert_eq!(first.opacity, 0.0);
    assert_eq!(mid.opacity, 1.0);
    assert_eq!(mid.offset, Some(PARTICLE_FADE_IN_OFFSET));
    assert_eq!(mid.transform, "translateY(-800px) translateX(10.00px)");
    assert_eq!(last.transform, "translateY(-1200px) translateX(20.00px)");
    assert_eq!(last.opacity, 0.0);
    assert!(p.style().contains("left:50.00%"));
}

#[test]
fn particle_census_counts_live_particles() {
    let mut c = ParticleCensus::default();
    c.spawned();
    c.spawned();
    c.retired();
    assert_eq!((c.live(), c.total()), (1, 2));
    c.retired();
    c.retired();
    assert_eq!(c.live(), 0);
}
