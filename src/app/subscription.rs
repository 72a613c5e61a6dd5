// SPDX-License-Identifier: MPL-2.0
//! Periodic subscriptions for the demo application.

use super::config::{DIAGNOSTICS_DRAIN_INTERVAL_MS, TIMER_POLL_INTERVAL_MS};
use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{time, Subscription};
use std::time::Duration;

/// Polls expiry deadlines while timers are pending.
///
/// Only active in polling mode; otherwise each toast carries its own
/// expiry task.
pub fn create_timer_subscription(poll_timers: bool, has_pending_timers: bool) -> Subscription<Message> {
    if poll_timers && has_pending_timers {
        time::every(Duration::from_millis(TIMER_POLL_INTERVAL_MS))
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}

/// Drains queued diagnostic reports into the history buffer.
pub fn create_diagnostics_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(DIAGNOSTICS_DRAIN_INTERVAL_MS)).map(Message::DrainDiagnostics)
}
