// SPDX-License-Identifier: MPL-2.0
//! Expiry timer bookkeeping.
//!
//! The registry keeps at most one pending timer per notification. Every
//! registration gets a fresh generation number, and a [`TimerHandle`] only
//! fires while its generation is still the live one. That is what makes
//! late deliveries harmless: a handle whose timer was cancelled, replaced
//! or already fired is rejected by [`TimerRegistry::fire`].

use super::notification::NotificationId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// A scheduled expiry, as seen by whatever host facility delivers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    id: NotificationId,
    generation: u64,
    deadline: Instant,
}

impl TimerHandle {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns whether the deadline has been reached at `now`.
    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline <= now
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    generation: u64,
    deadline: Instant,
}

#[derive(Debug, Default)]
pub struct TimerRegistry {
    pending: HashMap<NotificationId, PendingTimer>,
    next_generation: u64,
}

impl TimerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an expiry for `id` at `now + delay`.
    ///
    /// A timer already pending for `id` is replaced; its handle goes stale.
    pub fn schedule(&mut self, id: NotificationId, delay: Duration, now: Instant) -> TimerHandle {
        let generation = self.next_generation;
        self.next_generation += 1;
        let deadline = now + delay;

        if self
            .pending
            .insert(id, PendingTimer { generation, deadline })
            .is_some()
        {
            tracing::debug!(%id, "replaced pending expiry timer");
        }

        TimerHandle {
            id,
            generation,
            deadline,
        }
    }

    /// Discards the pending timer for `id`. Returns whether one existed.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        self.pending.remove(&id).is_some()
    }

    /// Discards every pending timer, returning how many there were.
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    /// Fires `handle` if it is still the live registration for its id.
    ///
    /// The bookkeeping is dropped before `on_fire` runs, so a cancel racing
    /// behind the fire finds nothing. Stale handles return `false` without
    /// calling `on_fire`.
    pub fn fire(&mut self, handle: TimerHandle, on_fire: impl FnOnce(NotificationId)) -> bool {
        match self.pending.get(&handle.id) {
            Some(pending) if pending.generation == handle.generation => {
                self.pending.remove(&handle.id);
                on_fire(handle.id);
                true
            }
            _ => false,
        }
    }

    /// Live handles whose deadline has passed, earliest first.
    #[must_use]
    pub fn due(&self, now: Instant) -> Vec<TimerHandle> {
        let mut due: Vec<_> = self
            .handles()
            .filter(|handle| handle.is_due(now))
            .collect();
        due.sort_by_key(|handle| (handle.deadline, handle.generation));
        due
    }

    /// The live handle for `id`, if a timer is pending.
    #[must_use]
    pub fn handle(&self, id: NotificationId) -> Option<TimerHandle> {
        self.pending.get(&id).map(|pending| TimerHandle {
            id,
            generation: pending.generation,
            deadline: pending.deadline,
        })
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().map(|pending| pending.deadline).min()
    }

    #[must_use]
    pub fn is_scheduled(&self, id: NotificationId) -> bool {
        self.pending.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn handles(&self) -> impl Iterator<Item = TimerHandle> + '_ {
        self.pending.iter().map(|(&id, pending)| TimerHandle {
            id,
            generation: pending.generation,
            deadline: pending.deadline,
        })
    }
}
