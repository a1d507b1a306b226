//! Frame-loop bookkeeping shared by every self-chaining effect.
//!
//! Each effect owns its own `requestAnimationFrame` chain; there is no
//! central dispatch list and no ordering between effects within a frame.
//! A `LoopHandle` is the only way to end a chain from outside.

use std::cell::Cell;
use std::rc::Rc;

/// Result of one frame of an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue,
    Done,
}

pub trait FrameEffect {
    /// Advance by one displayed frame. `now_ms` is the frame timestamp.
    fn frame(&mut self, now_ms: f64) -> Tick;
}

/// Cancellation token for one frame loop. Clones share the same flag.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.running.set(false);
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one frame of `effect` under `handle`. Returns whether the next frame
/// should be requested.
pub fn run_frame<E: FrameEffect + ?Sized>(effect: &mut E, handle: &LoopHandle, now_ms: f64) -> bool {
    if !handle.is_running() {
        return false;
    }
    match effect.frame(now_ms) {
        Tick::Continue => handle.is_running(),
        Tick::Done => {
            handle.stop();
            false
        }
    }
}
