// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of active notifications.
//!
//! The store assigns ids and keeps entries in insertion order. It knows
//! nothing about timers; the manager pairs each insertion with a timer
//! registration and each removal with a cancellation.

use super::notification::{CloseReason, Defaults, NotificationEntry, NotificationId, Request};
use std::time::Instant;

#[derive(Debug, Default)]
pub struct Store {
    entries: Vec<NotificationEntry>,
    next_id: u64,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an entry from `request`, appends it and returns its new id.
    pub fn insert(&mut self, request: Request, defaults: &Defaults, now: Instant) -> NotificationId {
        let id = self.allocate_id();
        debug_assert!(!self.contains(id), "notification id {id} reused");
        self.entries.push(request.into_entry(id, defaults, now));
        id
    }

    /// Removes the entry with `id` and hands it back.
    ///
    /// Returns `None` when no such entry is active, so removing twice is a
    /// harmless no-op. The returned entry still owns its close callback.
    pub fn take(&mut self, id: NotificationId) -> Option<NotificationEntry> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Removes the entry with `id` and runs its close callback with
    /// [`CloseReason::Dismissed`].
    ///
    /// Returns whether the entry was active.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        match self.take(id) {
            Some(entry) => {
                entry.close(CloseReason::Dismissed);
                true
            }
            None => false,
        }
    }

    /// Removes every entry, oldest first.
    pub fn drain(&mut self) -> Vec<NotificationEntry> {
        std::mem::take(&mut self.entries)
    }

    /// Active entries in insertion order.
    #[must_use]
    pub fn list(&self) -> &[NotificationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotificationEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn allocate_id(&mut self) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }
}
