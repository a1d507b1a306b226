//! Scroll-driven math: header state, parallax offsets, smooth anchor scroll.

use crate::constants::*;
use crate::core::interp::{clamp, ease_in_out_cubic};

#[inline]
pub fn header_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Hero translation (px) and opacity for a scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroParallax {
    pub translate_y: f64,
    pub opacity: f64,
}

pub fn hero_parallax(offset: f64) -> HeroParallax {
    HeroParallax {
        translate_y: offset * HERO_PARALLAX_RATE,
        opacity: clamp(1.0 - offset / HERO_FADE_DISTANCE_PX, 0.0, 1.0),
    }
}

/// Card translation for the `index`-th card whose top sits at `card_top`.
/// `None` means the card is outside the parallax window and keeps its
/// last transform.
pub fn card_parallax(offset: f64, card_top: f64, index: usize) -> Option<f64> {
    let rel = offset - card_top;
    if rel <= -CARD_PARALLAX_WINDOW_PX || rel >= CARD_PARALLAX_WINDOW_PX {
        return None;
    }
    let speed = CARD_PARALLAX_BASE + index as f64 * CARD_PARALLAX_STEP;
    Some(rel * speed)
}

/// Eased scroll from the current offset to a target over a fixed duration.
/// The clock starts at the first sampled frame.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    from: f64,
    distance: f64,
    duration_ms: f64,
    start_ms: Option<f64>,
}

impl SmoothScroll {
    pub fn new(from: f64, element_top: f64, header_offset: f64, duration_ms: f64) -> Self {
        let target = element_top - header_offset;
        Self {
            from,
            distance: target - from,
            duration_ms: duration_ms.max(1.0),
            start_ms: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.from + self.distance
    }

    /// Scroll position for the frame at `now_ms`, and whether the scroll is
    /// finished.
    pub fn sample(&mut self, now_ms: f64) -> (f64, bool) {
        let start = *self.start_ms.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        let progress = clamp(elapsed / self.duration_ms, 0.0, 1.0);
        let y = self.from + self.distance * ease_in_out_cubic(progress);
        (y, elapsed >= self.duration_ms)
    }
}
