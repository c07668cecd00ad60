//! Session-scoped de-duplication of notification triggers.
//!
//! The engine re-emits the same trigger on every recomputation while its
//! condition holds (at-least-once). Whoever forwards triggers to a
//! dispatcher owns one of these per session; never process-wide state.

use std::collections::HashSet;

use crate::models::schedule::NotificationTrigger;

#[derive(Debug, Default)]
pub struct NotificationSession {
    sent: HashSet<(String, NotificationTrigger)>,
}

impl NotificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True only the first time this (record, trigger) pair is seen;
    /// the caller should dispatch exactly when this returns true.
    pub fn fire(&mut self, record_key: &str, trigger: NotificationTrigger) -> bool {
        self.sent.insert((record_key.to_string(), trigger))
    }

    /// Forget everything sent so far (e.g. when the watched day changes).
    pub fn reset(&mut self) {
        self.sent.clear();
    }

    pub fn sent_count(&self) -> usize {
        self.sent.len()
    }
}
