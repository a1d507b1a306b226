//! Named options for every effect, defaulting to `constants.rs`.
//!
//! Pages can override individual values with `data-fx-*` attributes on
//! `<body>`; see `OVERRIDE_KEYS`.

use crate::constants::*;
use anyhow::{anyhow, bail, Context};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub preloader_min_ms: u32,
    pub preloader_detach_ms: u32,
    pub star_cap: usize,
    pub star_width_divisor: u32,
    pub star_trail_fade_alpha: f32,
    pub star_parallax_strength: f32,
    pub star_pointer_throttle_ms: f64,
    pub resize_debounce_ms: u32,
    pub cursor_smoothing: f32,
    pub cursor_hover_smoothing: f32,
    pub scroll_throttle_ms: f64,
    pub header_threshold_px: f64,
    pub particle_interval_ms: u32,
    pub particle_lifetime_min_ms: f64,
    pub particle_lifetime_span_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_delay_ms: u32,
    pub smooth_scroll_ms: f64,
    pub smooth_scroll_offset_px: f64,
    pub magnetic_strength: f32,
    pub tilt_divisor: f32,
    pub konami_sequence: &'static [&'static str],
    pub konami_effect_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            preloader_min_ms: PRELOADER_MIN_DISPLAY_MS,
            preloader_detach_ms: PRELOADER_DETACH_DELAY_MS,
            star_cap: STAR_CAP,
            star_width_divisor: STAR_WIDTH_DIVISOR,
            star_trail_fade_alpha: STAR_TRAIL_FADE_ALPHA,
            star_parallax_strength: STAR_PARALLAX_STRENGTH,
            star_pointer_throttle_ms: STAR_POINTER_THROTTLE_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            cursor_smoothing: CURSOR_SMOOTHING,
            cursor_hover_smoothing: CURSOR_SMOOTHING_HOVER,
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            header_threshold_px: HEADER_SCROLLED_THRESHOLD_PX,
            particle_interval_ms: PARTICLE_INTERVAL_MS,
            particle_lifetime_min_ms: PARTICLE_LIFETIME_MIN_MS,
            particle_lifetime_span_ms: PARTICLE_LIFETIME_SPAN_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_delay_ms: REVEAL_DELAY_MS,
            smooth_scroll_ms: SMOOTH_SCROLL_DURATION_MS,
            smooth_scroll_offset_px: SMOOTH_SCROLL_HEADER_OFFSET_PX,
            magnetic_strength: MAGNETIC_STRENGTH,
            tilt_divisor: TILT_DIVISOR,
            konami_sequence: KONAMI_SEQUENCE,
            konami_effect_ms: KONAMI_EFFECT_MS,
        }
    }
}

/// Keys accepted by `apply_override`, without the `data-fx-` prefix.
pub const OVERRIDE_KEYS: &[&str] = &[
    "preloader-min-ms",
    "preloader-detach-ms",
    "star-cap",
    "star-width-divisor",
    "star-fade",
    "star-parallax",
    "resize-debounce-ms",
    "cursor-smoothing",
    "cursor-hover-smoothing",
    "scroll-throttle-ms",
    "header-threshold",
    "particle-interval-ms",
    "particle-lifetime-min-ms",
    "particle-lifetime-span-ms",
    "reveal-threshold",
    "reveal-delay-ms",
    "smooth-scroll-ms",
    "smooth-scroll-offset",
    "magnetic-strength",
    "tilt-divisor",
    "konami-effect-ms",
];

fn parse<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("invalid value {value:?} for {key}"))
}

fn fraction(key: &str, value: &str) -> anyhow::Result<f32> {
    let v: f32 = parse(key, value)?;
    if !(0.0..=1.0).contains(&v) {
        bail!("{key} must be within [0, 1], got {v}");
    }
    Ok(v)
}

fn positive<T>(key: &str, value: &str) -> anyhow::Result<T>
where
    T: FromStr + PartialOrd + Default + Copy + std::fmt::Display,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let v: T = parse(key, value)?;
    if v <= T::default() {
        bail!("{key} must be positive, got {v}");
    }
    Ok(v)
}

#[derive(Debug, Default)]
pub struct OverrideOutcome {
    pub applied: usize,
    pub errors: Vec<anyhow::Error>,
}

impl EffectsConfig {
    pub fn apply_override(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "preloader-min-ms" => self.preloader_min_ms = parse(key, value)?,
            "preloader-detach-ms" => self.preloader_detach_ms = parse(key, value)?,
            "star-cap" => self.star_cap = parse(key, value)?,
            "star-width-divisor" => self.star_width_divisor = positive(key, value)?,
            "star-fade" => self.star_trail_fade_alpha = fraction(key, value)?,
            "star-parallax" => self.star_parallax_strength = parse(key, value)?,
            "resize-debounce-ms" => self.resize_debounce_ms = parse(key, value)?,
            "cursor-smoothing" => self.cursor_smoothing = fraction(key, value)?,
            "cursor-hover-smoothing" => self.cursor_hover_smoothing = fraction(key, value)?,
            "scroll-throttle-ms" => self.scroll_throttle_ms = parse(key, value)?,
            "header-threshold" => self.header_threshold_px = parse(key, value)?,
            "particle-interval-ms" => self.particle_interval_ms = positive(key, value)?,
            "particle-lifetime-min-ms" => self.particle_lifetime_min_ms = positive(key, value)?,
            "particle-lifetime-span-ms" => self.particle_lifetime_span_ms = parse(key, value)?,
            "reveal-threshold" => self.reveal_threshold = fraction(key, value)? as f64,
            "reveal-delay-ms" => self.reveal_delay_ms = parse(key, value)?,
            "smooth-scroll-ms" => self.smooth_scroll_ms = positive(key, value)?,
            "smooth-scroll-offset" => self.smooth_scroll_offset_px = parse(key, value)?,
            "magnetic-strength" => self.magnetic_strength = parse(key, value)?,
            "tilt-divisor" => self.tilt_divisor = positive(key, value)?,
            "konami-effect-ms" => self.konami_effect_ms = parse(key, value)?,
            _ => return Err(anyhow!("unknown option {key}")),
        }
        Ok(())
    }

    /// Apply every `(key, value)` pair, collecting failures instead of
    /// stopping at the first one.
    pub fn apply_overrides<'a>(
        &mut self,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> OverrideOutcome {
        let mut outcome = OverrideOutcome::default();
        for (k, v) in pairs {
            match self.apply_override(k, v) {
                Ok(()) => outcome.applied += 1,
                Err(e) => outcome.errors.push(e),
            }
        }
        outcome
    }
}
