// SPDX-License-Identifier: MPL-2.0
//! Fixed-capacity ring buffer backing the diagnostics history.

use std::collections::VecDeque;

use super::HistoryCapacity;

/// A buffer holding at most `capacity` items, oldest first.
///
/// Pushing into a full buffer evicts and returns the oldest item.
///
/// ```
/// use iced_toaster::diagnostics::{HistoryCapacity, RingBuffer};
///
/// let mut ring: RingBuffer<u32> = RingBuffer::new(HistoryCapacity::default());
/// ring.push(1);
/// ring.push(2);
/// assert_eq!(ring.latest(), Some(&2));
/// assert_eq!(ring.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RingBuffer<T> {
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Builds a buffer of any size, bypassing [`HistoryCapacity`] bounds.
    /// Used by tests that need tiny buffers.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an item, returning the evicted oldest item when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() >= self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.items.iter()
    }

    /// Returns the most recently pushed item.
    #[must_use]
    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
