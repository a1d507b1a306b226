use crate::constants::*;
use crate::core::interp::clamp;
use crate::core::tracker::ViewportState;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    /// Downward motion in px per frame.
    pub speed: f32,
    pub opacity: f32,
    pub twinkle_rate: f32,
}

/// Number of stars for a viewport width: one per `divisor` px, capped.
#[inline]
pub fn star_count(viewport_width: u32, divisor: u32, cap: usize) -> usize {
    ((viewport_width / divisor.max(1)) as usize).min(cap)
}

/// One twinkle step. `random01` is a sample in `[0, 1)`; the result is
/// always inside `[STAR_OPACITY_MIN, STAR_OPACITY_MAX]`.
#[inline]
pub fn twinkle(opacity: f32, twinkle_rate: f32, random01: f32) -> f32 {
    let next = opacity + (random01 - 0.5) * twinkle_rate;
    if !next.is_finite() {
        return STAR_OPACITY_MIN;
    }
    next.clamp(STAR_OPACITY_MIN, STAR_OPACITY_MAX)
}

/// Canvas translation for the pointer parallax: the normalized pointer
/// offset from the viewport center scaled by `strength` px.
#[inline]
pub fn parallax_offset(pointer: Vec2, viewport: ViewportState, strength: f32) -> Vec2 {
    let size = Vec2::new(viewport.width as f32, viewport.height as f32);
    (pointer / size - Vec2::splat(0.5)) * strength
}

pub struct StarField {
    pub stars: Vec<Star>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl StarField {
    pub fn new(viewport: ViewportState, count: usize, mut rng: StdRng) -> Self {
        let width = viewport.width as f32;
        let height = viewport.height as f32;
        let stars = (0..count)
            .map(|_| Star {
                position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                radius: rng.gen::<f32>() * STAR_RADIUS_MAX,
                speed: STAR_SPEED_MIN + rng.gen::<f32>() * STAR_SPEED_SPAN,
                opacity: rng.gen::<f32>(),
                twinkle_rate: STAR_TWINKLE_MIN + rng.gen::<f32>() * STAR_TWINKLE_SPAN,
            })
            .collect();
        Self {
            stars,
            width,
            height,
            rng,
        }
    }

    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Only the wrap bounds change; existing stars keep their coordinates
    /// and fall back inside the canvas on their next wrap.
    pub fn resize(&mut self, viewport: ViewportState) {
        self.width = viewport.width as f32;
        self.height = viewport.height as f32;
    }

    /// Twinkle, fall, and wrap every star once.
    pub fn step(&mut self) {
        for star in &mut self.stars {
            star.opacity = twinkle(star.opacity, star.twinkle_rate, self.rng.gen::<f32>());
            star.position.y += star.speed;
            if star.position.y > self.height {
                star.position.y = 0.0;
                star.position.x = self.rng.gen::<f32>() * self.width;
            }
        }
    }
}

/// `rgba(255, 255, 255, a)` fill for a star, with the alpha clamped.
pub fn star_fill_style(opacity: f32) -> String {
    format!("rgba(255, 255, 255, {:.3})", clamp(opacity as f64, 0.0, 1.0))
}

/// Low-alpha black fill used instead of a hard clear to leave trails.
pub fn trail_fill_style(fade_alpha: f32) -> String {
    format!("rgba(0, 0, 0, {:.3})", clamp(fade_alpha as f64, 0.0, 1.0))
}
