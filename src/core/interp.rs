/// Linear interpolation; `t` is not bounded.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Cubic ease-in-out over `[0, 1]`: `4t³` for the first half, `1 - 4(1-t)³`
/// for the second.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = clamp(t, 0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 4.0 * u * u * u
    }
}

/// Leading-edge rate limiter. Calls arriving inside the window are dropped,
/// not queued.
#[derive(Clone, Debug)]
pub struct Throttle {
    delay_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            last_ms: None,
        }
    }

    /// Returns true when the caller should run now.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.delay_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Trailing-edge debouncer.
///
/// Every `call` supersedes the previous one and hands out a token; the timer
/// armed for that token fires the action only if no later call happened.
#[derive(Clone, Debug)]
pub struct Debounce {
    delay_ms: u32,
    generation: u64,
    pending: bool,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn call(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        self.generation
    }

    /// Called when the timer armed for `token` elapses.
    pub fn expire(&mut self, token: u64) -> bool {
        if self.pending && token == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
