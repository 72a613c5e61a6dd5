// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::domain::notification::Position;
use crate::ui::notifications::{self, Kind};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the notification manager.
    Notification(notifications::NotificationMessage),
    /// Show a text toast of the given kind.
    Show(Kind),
    /// Show a toast that stays until dismissed.
    ShowSticky,
    /// Show a custom toast whose body is a caller-built widget.
    ShowFragment,
    /// Change where new toasts appear.
    SelectPosition(Position),
    /// Close every toast.
    ClearAll,
    /// Periodic drain of queued diagnostic reports.
    DrainDiagnostics(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Position key for new toasts, overriding the configured default.
    pub position: Option<String>,
    /// Expire toasts from a polling subscription instead of per-toast tasks.
    pub poll_timers: bool,
}
