use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Remembers which row indices were recently acted on.
///
/// Expiry is checked against the caller's clock on every query; nothing runs in
/// the background.
#[derive(Debug, Default)]
pub struct HighlightTracker {
    entries: HashMap<usize, Instant>,
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, row: usize, duration: Duration) {
        self.arm_at(row, Instant::now(), duration);
    }

    /// Arms `row` until `now + duration`, replacing any earlier expiry.
    pub fn arm_at(&mut self, row: usize, now: Instant, duration: Duration) {
        self.entries.insert(row, now + duration);
    }

    pub fn is_armed(&self, row: usize, now: Instant) -> bool {
        self.entries
            .get(&row)
            .is_some_and(|&expires_at| expires_at > now)
    }

    /// Drop entries that have expired by `now`.
    pub fn prune(&mut self, now: Instant) {
        self.entries.retain(|_, expires_at| *expires_at > now);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
