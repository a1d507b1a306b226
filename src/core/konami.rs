use std::collections::VecDeque;

/// Rolling key buffer matched against a fixed sequence.
pub struct KeySequence {
    pattern: &'static [&'static str],
    recent: VecDeque<String>,
}

impl KeySequence {
    pub fn new(pattern: &'static [&'static str]) -> Self {
        Self {
            pattern,
            recent: VecDeque::with_capacity(pattern.len()),
        }
    }

    /// Feed one `KeyboardEvent.key`. Returns true when the last keys now
    /// equal the pattern.
    pub fn push(&mut self, key: &str) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        if self.recent.len() == self.pattern.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key.to_string());
        self.recent.len() == self.pattern.len()
            && self.recent.iter().zip(self.pattern).all(|(a, b)| a == b)
    }
}
