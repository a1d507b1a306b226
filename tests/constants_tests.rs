// Host-side tests for constants, their relationships, and config overrides.

use page_fx::config::{EffectsConfig, OVERRIDE_KEYS};
use page_fx::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Timers should be positive
    assert!(PRELOADER_MIN_DISPLAY_MS > 0);
    assert!(PRELOADER_DETACH_DELAY_MS > 0);
    assert!(PARTICLE_INTERVAL_MS > 0);
    assert!(RESIZE_DEBOUNCE_MS > 0);
    assert!(SCROLL_THROTTLE_MS > 0.0);
    assert!(STAR_POINTER_THROTTLE_MS > 0.0);

    // Smoothing factors are fractions, and hover tracks tighter
    assert!(CURSOR_SMOOTHING > 0.0 && CURSOR_SMOOTHING < 1.0);
    assert!(CURSOR_SMOOTHING_HOVER > CURSOR_SMOOTHING && CURSOR_SMOOTHING_HOVER < 1.0);

    // Opacity window sits inside [0, 1]
    assert!(STAR_OPACITY_MIN >= 0.0 && STAR_OPACITY_MIN < STAR_OPACITY_MAX);
    assert!(STAR_OPACITY_MAX <= 1.0);
    assert!(STAR_TRAIL_FADE_ALPHA > 0.0 && STAR_TRAIL_FADE_ALPHA < 1.0);

    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(PARTICLE_FADE_IN_OFFSET > 0.0 && PARTICLE_FADE_IN_OFFSET < 1.0);
}

#[test]
fn konami_sequence_is_ten_keys() {
    assert_eq!(KONAMI_SEQUENCE.len(), 10);
    assert_eq!(KONAMI_SEQUENCE[0], "ArrowUp");
    assert_eq!(KONAMI_SEQUENCE[9], "a");
}

#[test]
fn default_config_mirrors_constants() {
    let cfg = EffectsConfig::default();
    assert_eq!(cfg.preloader_min_ms, PRELOADER_MIN_DISPLAY_MS);
    assert_eq!(cfg.star_cap, STAR_CAP);
    assert_eq!(cfg.cursor_smoothing, CURSOR_SMOOTHING);
    assert_eq!(cfg.cursor_hover_smoothing, CURSOR_SMOOTHING_HOVER);
    assert_eq!(cfg.reveal_threshold, REVEAL_THRESHOLD);
    assert_eq!(cfg.konami_sequence, KONAMI_SEQUENCE);
}

#[test]
fn overrides_replace_values() {
    let mut cfg = EffectsConfig::default();
    cfg.apply_override("preloader-min-ms", "1000").unwrap();
    cfg.apply_override("star-cap", " 120 ").unwrap();
    cfg.apply_override("cursor-hover-smoothing", "0.3").unwrap();
    cfg.apply_override("reveal-threshold", "0.5").unwrap();
    assert_eq!(cfg.preloader_min_ms, 1000);
    assert_eq!(cfg.star_cap, 120);
    assert!((cfg.cursor_hover_smoothing - 0.3).abs() < 1e-6);
    assert!((cfg.reveal_threshold - 0.5).abs() < 1e-6);
}

#[test]
fn bad_overrides_are_rejected_and_leave_defaults() {
    let mut cfg = EffectsConfig::default();
    assert!(cfg.apply_override("nope", "1").is_err());
    assert!(cfg.apply_override("star-cap", "lots").is_err());
    assert!(cfg.apply_override("cursor-smoothing", "1.5").is_err());
    assert!(cfg.apply_override("star-width-divisor", "0").is_err());
    assert_eq!(cfg, EffectsConfig::default());
}

#[test]
fn apply_overrides_collects_every_failure() {
    let mut cfg = EffectsConfig::default();
    let outcome = cfg.apply_overrides([
        ("star-cap", "50"),
        ("unknown-key", "1"),
        ("tilt-divisor", "-2"),
    ]);
    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(outcome.applied, 1);
    assert_eq!(cfg.star_cap, 50);
    let msg = format!("{:#}", outcome.errors[0]);
    assert!(msg.contains("unknown-key"), "unexpected message: {msg}");
}

#[test]
fn every_override_key_is_accepted() {
    for key in OVERRIDE_KEYS {
        let mut cfg = EffectsConfig::default();
        let fractional = [
            "star-fade",
            "cursor-smoothing",
            "cursor-hover-smoothing",
            "reveal-threshold",
        ];
        let value = if fractional.contains(key) { "0.5" } else { "3" };
        assert!(
            cfg.apply_override(key, value).is_ok(),
            "key {key} rejected value {value}"
        );
    }
}

#[test]
fn applied_count_excludes_rejected_overrides() {
    let mut cfg = EffectsConfig::default();
    let outcome = cfg.apply_overrides([("star-cap", "oops"), ("cursor-smoothing", "2")]);
    assert_eq!(outcome.applied, 0);
    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(cfg, EffectsConfig::default());

    let outcome = cfg.apply_overrides([("star-cap", "80"), ("reveal-delay-ms", "250")]);
    assert_eq!(outcome.applied, 2);
    assert!(outcome.errors.is_empty());
}
