// SPDX-License-Identifier: MPL-2.0
//! Position grouping of active notifications.
//!
//! The grouped view is derived on demand from the store and never cached,
//! so it can't drift from the entries it was built from.

use super::notification::NotificationEntry;
use crate::domain::notification::Position;
use std::collections::HashMap;

/// Entries sharing one position, in insertion order.
#[derive(Debug)]
pub struct PositionGroup<'a> {
    position: &'a Position,
    entries: Vec<&'a NotificationEntry>,
}

impl<'a> PositionGroup<'a> {
    #[must_use]
    pub fn position(&self) -> &'a Position {
        self.position
    }

    #[must_use]
    pub fn entries(&self) -> &[&'a NotificationEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Position-keyed partition of the active notifications.
///
/// Groups are ordered by the first appearance of their position.
#[derive(Debug, Default)]
pub struct GroupedView<'a> {
    groups: Vec<PositionGroup<'a>>,
}

impl<'a> GroupedView<'a> {
    /// Entries at `position`, or `None` when nothing is shown there.
    #[must_use]
    pub fn get(&self, position: &str) -> Option<&[&'a NotificationEntry]> {
        self.groups
            .iter()
            .find(|group| group.position.as_str() == position)
            .map(PositionGroup::entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PositionGroup<'a>> {
        self.groups.iter()
    }

    pub fn positions(&self) -> impl Iterator<Item = &'a Position> + '_ {
        self.groups.iter().map(|group| group.position)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for GroupedView<'a> {
    type Item = PositionGroup<'a>;
    type IntoIter = std::vec::IntoIter<PositionGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Partitions `entries` by position, keeping their relative order.
pub fn group<'a>(entries: impl IntoIterator<Item = &'a NotificationEntry>) -> GroupedView<'a> {
    let mut groups: Vec<PositionGroup<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for entry in entries {
        let position = entry.position();
        let slot = *index.entry(position.as_str()).or_insert_with(|| {
            groups.push(PositionGroup {
                position,
                entries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].entries.push(entry);
    }

    GroupedView { groups }
}
