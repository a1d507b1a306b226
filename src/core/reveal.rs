//! One-shot reveal bookkeeping for scroll-in animations.

use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    /// Seen and unobserved; the `in-view` class lands after the reveal delay.
    Scheduled,
    Revealed,
}

/// One intersection notification for a tracked element.
#[derive(Clone, Copy, Debug)]
pub struct Visibility<K> {
    pub key: K,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// `threshold` configures the browser observer. Any intersecting entry
/// counts; the reported ratio is not compared against it again.
pub struct RevealObserver<K> {
    threshold: f64,
    entries: FnvHashMap<K, RevealState>,
}

impl<K: Copy + Eq + Hash> RevealObserver<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            entries: FnvHashMap::default(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Start tracking `key`. Keys already seen keep their state.
    pub fn observe(&mut self, key: K) {
        self.entries.entry(key).or_insert(RevealState::Pending);
    }

    pub fn state(&self, key: K) -> Option<RevealState> {
        self.entries.get(&key).copied()
    }

    pub fn is_observing(&self, key: K) -> bool {
        self.state(key) == Some(RevealState::Pending)
    }

    /// Process one notification batch. Returns the keys that just became
    /// visible, in batch order; each must be unobserved and revealed after
    /// the delay. Keys not pending are ignored.
    pub fn on_batch(&mut self, batch: &[Visibility<K>]) -> SmallVec<[K; 8]> {
        let mut out = SmallVec::new();
        for v in batch {
            if !v.is_intersecting {
                continue;
            }
            if let Some(state) = self.entries.get_mut(&v.key) {
                if *state == RevealState::Pending {
                    *state = RevealState::Scheduled;
                    out.push(v.key);
                }
            }
        }
        out
    }

    /// Mark a scheduled key revealed. Returns false for anything else.
    pub fn complete(&mut self, key: K) -> bool {
        match self.entries.get_mut(&key) {
            Some(state) if *state == RevealState::Scheduled => {
                *state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.entries
            .values()
            .filter(|s| **s == RevealState::Pending)
            .count()
    }
}
