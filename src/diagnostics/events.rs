// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded for the notification lifecycle.

use std::time::Instant;

use crate::ui::notifications::{CloseReason, Kind, NotificationId};

/// Category of a non-fatal problem reported to diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningType {
    /// A kind string did not name a known notification kind.
    InvalidKind,
    /// The settings file could not be read or parsed.
    ConfigLoad,
    /// A warning-kind notification was shown to the user.
    Notification,
}

/// What happened.
#[derive(Debug, Clone, PartialEq)]
pub enum DiagnosticEventKind {
    /// A notification entered the store.
    Shown {
        id: NotificationId,
        kind: Kind,
        position: String,
    },
    /// A notification left the store.
    Closed {
        id: NotificationId,
        reason: CloseReason,
    },
    Warning {
        warning_type: WarningType,
        message: String,
    },
    /// An error-kind notification was shown to the user.
    Error { message: String },
}

/// A diagnostic event with its capture time.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }

    /// Returns whether this event reports a problem rather than a lifecycle step.
    #[must_use]
    pub fn is_problem(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticEventKind::Warning { .. } | DiagnosticEventKind::Error { .. }
        )
    }
}
