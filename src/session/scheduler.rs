//! One-shot deferred callbacks on the session's logical clock.
//!
//! Callbacks fire in due order; ties fire in scheduling order.

use std::collections::BTreeMap;

/// Work the session postpones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Turn the pending mismatched pair back over.
    RevertMismatch,
    /// Finish the reveal-all power-up.
    EndPowerUp,
}

/// Pending callbacks keyed by `(due_ms, sequence)`.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    pending: BTreeMap<(u64, u64), Deferred>,
    sequence: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to run at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, action: Deferred) {
        self.pending.insert((due_ms, self.sequence), action);
        self.sequence += 1;
    }

    /// Remove and return the earliest callback due at or before `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<(u64, Deferred)> {
        let entry = self.pending.first_entry()?;
        if entry.key().0 > now_ms {
            return None;
        }
        let ((due, _), action) = entry.remove_entry();
        Some((due, action))
    }

    /// When the next callback is due.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.keys().next().map(|&(due, _)| due)
    }

    /// Drop every pending callback.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
