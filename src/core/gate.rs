/// Preloader gate: opens once both the minimum display time has elapsed and
/// the page has finished loading, in either order.
#[derive(Clone, Debug, Default)]
pub struct LifecycleGate {
    load_complete: bool,
    minimum_elapsed: bool,
    opened: bool,
}

impl LifecycleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true exactly once: on the call that opens the gate.
    pub fn mark_loaded(&mut self) -> bool {
        self.load_complete = true;
        self.try_open()
    }

    /// Returns true exactly once: on the call that opens the gate.
    pub fn mark_minimum_elapsed(&mut self) -> bool {
        self.minimum_elapsed = true;
        self.try_open()
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    pub fn load_complete(&self) -> bool {
        self.load_complete
    }

    pub fn minimum_elapsed(&self) -> bool {
        self.minimum_elapsed
    }

    fn try_open(&mut self) -> bool {
        if self.opened || !(self.load_complete && self.minimum_elapsed) {
            return false;
        }
        self.opened = true;
        true
    }
}
