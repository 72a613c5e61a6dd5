// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for notification lifecycle events.
//!
//! The collector owns the history buffer and the receiving end of a bounded
//! channel. Handles hold the sending end and never block: when the channel
//! is full the event is dropped.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{DiagnosticEvent, DiagnosticEventKind, HistoryCapacity, RingBuffer, WarningType};
use crate::ui::notifications::{CloseReason, Kind, NotificationId};

/// Channel capacity between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 128;

/// Handle for reporting diagnostic events.
///
/// Cheap to clone; safe to share across threads.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records that a notification was shown.
    pub fn log_shown(&self, id: NotificationId, kind: Kind, position: &str) {
        self.send(DiagnosticEventKind::Shown {
            id,
            kind,
            position: position.to_string(),
        });
    }

    /// Records that a notification was closed.
    pub fn log_closed(&self, id: NotificationId, reason: CloseReason) {
        self.send(DiagnosticEventKind::Closed { id, reason });
    }

    pub fn log_warning(&self, warning_type: WarningType, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Warning {
            warning_type,
            message: message.into(),
        });
    }

    pub fn log_error(&self, message: impl Into<String>) {
        self.send(DiagnosticEventKind::Error {
            message: message.into(),
        });
    }

    /// Sends an event, reporting whether the channel accepted it.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` when the collector is behind, or
    /// `TrySendError::Disconnected` when it has been dropped.
    pub fn try_send(
        &self,
        kind: DiagnosticEventKind,
    ) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }

    fn send(&self, kind: DiagnosticEventKind) {
        if let Err(TrySendError::Full(event)) = self.try_send(kind) {
            tracing::trace!(kind = ?event.kind, "diagnostics channel full, event dropped");
        }
    }
}

/// Stores diagnostic events reported through its handles.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    history: RingBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(HistoryCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            history: RingBuffer::new(capacity),
            event_rx,
            event_tx,
        }
    }

    /// Creates a handle for reporting events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the history.
    ///
    /// Returns the number of events drained. Call on each UI tick.
    pub fn process_pending(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.history.push(event);
            drained += 1;
        }
        drained
    }

    /// Recorded events, oldest first.
    pub fn events(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.history.iter()
    }

    /// Recorded warnings and errors, oldest first.
    pub fn problems(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.history.iter().filter(|event| event.is_problem())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_stored_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_shown(NotificationId::from_raw(1), Kind::Success, "top-right");
        handle.log_closed(NotificationId::from_raw(1), CloseReason::Dismissed);
        assert!(collector.is_empty());

        assert_eq!(collector.process_pending(), 2);
        assert_eq!(collector.len(), 2);

        let kinds: Vec<_> = collector.events().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds[1],
            DiagnosticEventKind::Closed {
                id: NotificationId::from_raw(1),
                reason: CloseReason::Dismissed,
            }
        );
    }

    #[test]
    fn problems_filters_lifecycle_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_shown(NotificationId::from_raw(1), Kind::Info, "top-right");
        handle.log_warning(WarningType::InvalidKind, "sparkle");
        handle.log_error("disk full");
        collector.process_pending();

        assert_eq!(collector.problems().count(), 2);
    }

    #[test]
    fn full_channel_drops_events_without_blocking() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for n in 0..DEFAULT_CHANNEL_CAPACITY as u64 {
            handle.log_closed(NotificationId::from_raw(n), CloseReason::Expired);
        }
        let overflow = handle.try_send(DiagnosticEventKind::Error {
            message: "late".into(),
        });
        assert!(matches!(overflow, Err(TrySendError::Full(_))));
    }

    #[test]
    fn history_evicts_oldest_beyond_capacity() {
        let mut collector = DiagnosticsCollector::new(HistoryCapacity::new(16));
        let handle = collector.handle();

        for n in 0..20 {
            handle.log_closed(NotificationId::from_raw(n), CloseReason::Expired);
        }
        collector.process_pending();

        assert_eq!(collector.len(), 16);
        let first = collector.events().next().map(|event| event.kind.clone());
        assert_eq!(
            first,
            Some(DiagnosticEventKind::Closed {
                id: NotificationId::from_raw(4),
                reason: CloseReason::Expired,
            })
        );
    }
}
