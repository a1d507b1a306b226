use crate::constants::*;
use rand::prelude::*;

/// Randomized parameters for one floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    /// Horizontal start position in percent of the viewport width.
    pub left_pct: f64,
    pub drift_px: f64,
    pub lifetime_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub transform: String,
    pub opacity: f64,
    pub offset: Option<f64>,
}

impl ParticleSpec {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, lifetime_min_ms: f64, lifetime_span_ms: f64) -> Self {
        Self {
            size_px: PARTICLE_SIZE_MIN_PX + rng.gen::<f64>() * PARTICLE_SIZE_SPAN_PX,
            left_pct: rng.gen::<f64>() * 100.0,
            drift_px: (rng.gen::<f64>() * 2.0 - 1.0) * PARTICLE_DRIFT_MAX_PX,
            lifetime_ms: lifetime_min_ms + rng.gen::<f64>() * lifetime_span_ms,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "position:fixed;width:{s:.2}px;height:{s:.2}px;\
             background:rgba(0, 191, 255, 0.5);border-radius:50%;\
             left:{l:.2}%;bottom:-10px;pointer-events:none;z-index:1;\
             box-shadow:0 0 10px rgba(0, 191, 255, 0.8)",
            s = self.size_px,
            l = self.left_pct
        )
    }

    /// Rise one viewport height while fading in, then another half while
    /// fading out and drifting twice as far.
    pub fn keyframes(&self, viewport_height: f64) -> [Keyframe; 3] {
        [
            Keyframe {
                transform: "translateY(0) translateX(0)".to_string(),
                opacity: 0.0,
                offset: None,
            },
            Keyframe {
                transform: format!(
                    "translateY(-{:.0}px) translateX({:.2}px)",
                    viewport_height, self.drift_px
                ),
                opacity: 1.0,
                offset: Some(PARTICLE_FADE_IN_OFFSET),
            },
            Keyframe {
                transform: format!(
                    "translateY(-{:.0}px) translateX({:.2}px)",
                    viewport_height * 1.5,
                    self.drift_px * 2.0
                ),
                opacity: 0.0,
                offset: None,
            },
        ]
    }
}

/// Counts particles between spawn and their finish callback.
#[derive(Clone, Debug, Default)]
pub struct ParticleCensus {
    live: usize,
    spawned: u64,
}

impl ParticleCensus {
    pub fn spawned(&mut self) {
        self.live += 1;
        self.spawned += 1;
    }

    pub fn retired(&mut self) {
        self.live = self.live.saturating_sub(1);
    }

    pub fn live(&self) -> usize {
        self.live
    }

    pub fn total(&self) -> u64 {
        self.spawned
    }
}
