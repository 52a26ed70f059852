#![forbid(unsafe_code)]

//! Debounced, cancel-and-restart timers.
//!
//! The overlay needs two delayed callbacks (scroll-settle and touch-end
//! grace). Both follow debounce semantics: scheduling a key that is already
//! pending moves its deadline instead of stacking a second timer.
//!
//! Components take a [`TimerScheduler`] so the host decides what a timer
//! is. [`VirtualTimers`] is the deterministic implementation: deadlines are
//! plain [`Duration`]s on the host clock and [`VirtualTimers::expire`]
//! hands back whatever came due.
//!
//! # Invariants
//!
//! 1. At most one pending entry per key.
//! 2. `expire(now)` returns due keys ordered by deadline, ties by schedule order.
//! 3. A cancelled key never fires.

use core::time::Duration;

/// Cancel-and-restart scheduler keyed by `K`.
pub trait TimerScheduler<K> {
    /// Schedule `key` to fire at `deadline`, replacing any pending entry.
    fn schedule(&mut self, key: K, deadline: Duration);

    /// Cancel a pending `key`. Returns whether anything was pending.
    fn cancel(&mut self, key: &K) -> bool;

    /// Whether `key` is pending.
    fn is_pending(&self, key: &K) -> bool;
}

#[derive(Debug, Clone)]
struct PendingTimer<K> {
    key: K,
    deadline: Duration,
    seq: u64,
}

/// Deterministic timer set driven by an external clock.
#[derive(Debug, Clone)]
pub struct VirtualTimers<K> {
    pending: Vec<PendingTimer<K>>,
    next_seq: u64,
    /// Diagnostic: how many schedules replaced a pending entry.
    restarts: u64,
}

impl<K> Default for VirtualTimers<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_seq: 0,
            restarts: 0,
        }
    }
}

impl<K: PartialEq + Clone> VirtualTimers<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.deadline).min()
    }

    /// Deadline of a pending `key`.
    #[must_use]
    pub fn deadline_of(&self, key: &K) -> Option<Duration> {
        self.pending
            .iter()
            .find(|t| &t.key == key)
            .map(|t| t.deadline)
    }

    /// How many times a pending timer was restarted instead of stacked.
    #[inline]
    #[must_use]
    pub fn restart_count(&self) -> u64 {
        self.restarts
    }

    /// Remove and return every key whose deadline is `<= now`.
    pub fn expire(&mut self, now: Duration) -> Vec<K> {
        let mut due: Vec<PendingTimer<K>> = Vec::new();
        self.pending.retain(|t| {
            if t.deadline <= now {
                due.push(t.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|t| (t.deadline, t.seq));
        due.into_iter().map(|t| t.key).collect()
    }

    /// Drop every pending timer.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<K: PartialEq + Clone> TimerScheduler<K> for VirtualTimers<K> {
    fn schedule(&mut self, key: K, deadline: Duration) {
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(existing) = self.pending.iter_mut().find(|t| t.key == key) {
            existing.deadline = deadline;
            existing.seq = seq;
            self.restarts += 1;
            return;
        }
        self.pending.push(PendingTimer { key, deadline, seq });
    }

    fn cancel(&mut self, key: &K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| &t.key != key);
        before != self.pending.len()
    }

    fn is_pending(&self, key: &K) -> bool {
        self.pending.iter().any(|t| &t.key == key)
    }
}
