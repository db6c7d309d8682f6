//! Debounce utility for rapidly-changing input values.
//!
//! Restart semantics: every update replaces the pending value and re-arms
//! the deadline, so only the most recent value ever survives a quiet period.
//! There is no queue and no error path; the caller drives time by passing
//! `Instant`s, which keeps the logic deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    /// Replace any pending value with `value` and restart the quiet period.
    pub fn update(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its quiet period has elapsed.
    ///
    /// Returns `None` while a newer update keeps pushing the deadline out,
    /// and at most once per update.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|(_, deadline)| *deadline <= now) {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// True while an update is waiting out its quiet period.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
