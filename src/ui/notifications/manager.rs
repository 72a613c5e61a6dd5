// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` ties the [`Store`] of active entries to the
//! [`TimerRegistry`] of pending expiries. Every way out of the store (timer
//! expiry, manual dismissal, teardown) goes through one transition function, which
//! cancels the timer, removes the entry and runs its close callback. An id
//! that is already gone makes `close` a no-op, so the two event sources can
//! race freely.
//!
//! Expiries are delivered by the host, either as one [`expiry_task`] per
//! timer or by calling [`Manager::tick`] periodically.

use super::grouping::{self, GroupedView};
use super::notification::{CloseReason, Defaults, Kind, NotificationEntry, NotificationId, Request};
use super::store::Store;
use super::timers::{TimerHandle, TimerRegistry};
use crate::diagnostics::{DiagnosticsHandle, WarningType};
use iced::task;
use iced::Task;
use std::collections::HashMap;
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close a notification from the UI.
    Dismiss(NotificationId),
    /// A per-notification expiry task completed.
    Expired(TimerHandle),
    /// Periodic tick for hosts that poll deadlines.
    Tick(Instant),
}

/// Owns the active notifications and their expiry timers.
#[derive(Debug, Default)]
pub struct Manager {
    store: Store,
    timers: TimerRegistry,
    defaults: Defaults,
    diagnostics: Option<DiagnosticsHandle>,
    /// Abort handles of the expiry tasks handed out by [`Manager::expiry_task`].
    expiry_tasks: HashMap<NotificationId, task::Handle>,
}

impl Manager {
    /// Creates an empty manager with built-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager applying `defaults` to unset request fields.
    #[must_use]
    pub fn with_defaults(defaults: Defaults) -> Self {
        let mut manager = Self::default();
        manager.defaults = defaults;
        manager
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Replaces the defaults used by later `notify` calls.
    pub fn set_defaults(&mut self, defaults: Defaults) {
        self.defaults = defaults;
    }

    /// Sets the diagnostics handle for lifecycle reporting.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows a notification and schedules its expiry.
    pub fn notify(&mut self, request: Request) -> NotificationId {
        self.notify_at(request, Instant::now())
    }

    /// Shows a notification as if `now` were the current time.
    ///
    /// Sticky notifications (zero duration) get no timer.
    pub fn notify_at(&mut self, request: Request, now: Instant) -> NotificationId {
        let id = self.store.insert(request, &self.defaults, now);
        let Some(entry) = self.store.get(id) else {
            return id;
        };

        if let Some(delay) = entry.duration().auto_dismiss_after() {
            self.timers.schedule(id, delay, now);
        }

        tracing::debug!(
            %id,
            kind = %entry.kind(),
            position = %entry.position(),
            animation = %entry.animation(),
            duration_ms = entry.duration().as_millis(),
            "notification shown"
        );
        if let Some(handle) = &self.diagnostics {
            report_shown(handle, entry);
        }
        id
    }

    /// Closes a notification on request of the user or the caller.
    ///
    /// Returns `true` if the notification was active. Unknown or already
    /// closed ids return `false`.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.close(id, CloseReason::Dismissed)
    }

    /// Delivers a timer expiry.
    ///
    /// Stale handles (cancelled, replaced or already fired) are ignored.
    pub fn expire(&mut self, handle: TimerHandle) -> bool {
        let mut fired = None;
        self.timers.fire(handle, |id| fired = Some(id));
        match fired {
            Some(id) => self.close(id, CloseReason::Expired),
            None => false,
        }
    }

    /// Expires every notification whose deadline is at or before `now`.
    ///
    /// Returns the number of notifications removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.timers
            .due(now)
            .into_iter()
            .filter(|&handle| self.expire(handle))
            .count()
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Expired(handle) => {
                self.expire(*handle);
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Returns a task that delivers the expiry of `id` when it is due.
    ///
    /// Returns `Task::none()` for sticky or unknown notifications. The task
    /// is aborted when the notification closes before its deadline, and
    /// replaces any earlier task for the same id.
    pub fn expiry_task(&mut self, id: NotificationId) -> Task<Message> {
        let Some(timer) = self.timers.handle(id) else {
            return Task::none();
        };

        let (task, handle) = expiry_task(timer).abortable();
        if let Some(previous) = self.expiry_tasks.insert(id, handle) {
            previous.abort();
        }
        task
    }

    /// Closes every notification, cancelling all timers.
    ///
    /// Close callbacks run with [`CloseReason::Cleared`]. Returns the number
    /// of notifications removed.
    pub fn clear(&mut self) -> usize {
        self.timers.cancel_all();
        for (_, handle) in self.expiry_tasks.drain() {
            handle.abort();
        }
        let entries = self.store.drain();
        let count = entries.len();
        for entry in entries {
            self.finish(entry, CloseReason::Cleared);
        }
        count
    }

    /// Position-grouped snapshot of the active notifications.
    #[must_use]
    pub fn view(&self) -> GroupedView<'_> {
        grouping::group(self.store.iter())
    }

    /// Active notifications in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &NotificationEntry> {
        self.store.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&NotificationEntry> {
        self.store.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.store.contains(id)
    }

    /// Live expiry timer for `id`, if any.
    #[must_use]
    pub fn timer(&self, id: NotificationId) -> Option<TimerHandle> {
        self.timers.handle(id)
    }

    /// Earliest pending expiry.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns whether any notification is active.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.store.is_empty()
    }

    /// Returns whether any expiry timer is pending.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Active → Removed transition shared by every close path.
    fn close(&mut self, id: NotificationId, reason: CloseReason) -> bool {
        self.timers.cancel(id);
        if let Some(handle) = self.expiry_tasks.remove(&id) {
            handle.abort();
        }
        match self.store.take(id) {
            Some(entry) => {
                self.finish(entry, reason);
                true
            }
            None => {
                tracing::trace!(%id, ?reason, "close ignored, notification already gone");
                false
            }
        }
    }

    fn finish(&self, entry: NotificationEntry, reason: CloseReason) {
        let id = entry.id();
        tracing::debug!(%id, ?reason, "notification closed");
        if let Some(handle) = &self.diagnostics {
            handle.log_closed(id, reason);
        }
        entry.close(reason);
    }
}

impl Drop for Manager {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Sleeps until `handle`'s deadline, then emits [`Message::Expired`].
pub fn expiry_task(handle: TimerHandle) -> Task<Message> {
    let deadline = tokio::time::Instant::from_std(handle.deadline());
    // The sleep is built inside the future so it binds to the runtime polling it.
    Task::perform(
        async move { tokio::time::sleep_until(deadline).await },
        move |()| Message::Expired(handle),
    )
}

fn report_shown(handle: &DiagnosticsHandle, entry: &NotificationEntry) {
    handle.log_shown(entry.id(), entry.kind(), entry.position().as_str());

    let text = entry.message().as_text().unwrap_or("<fragment>");
    match entry.kind() {
        Kind::Warning => handle.log_warning(WarningType::Notification, text),
        Kind::Error => handle.log_error(text),
        Kind::Success | Kind::Info | Kind::Custom => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    type CloseLog = Rc<RefCell<Vec<(NotificationId, CloseReason)>>>;

    fn recording(request: Request, log: &CloseLog) -> Request {
        let log = Rc::clone(log);
        request.on_close(move |id, reason| log.borrow_mut().push((id, reason)))
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert!(!manager.has_notifications());
        assert!(!manager.has_pending_timers());
        assert!(manager.view().is_empty());
    }

    #[test]
    fn notify_schedules_one_timer() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.notify_at(Request::success("saved").duration_ms(1000), now);

        assert!(manager.contains(id));
        let timer = manager.timer(id).expect("timer should be pending");
        assert_eq!(timer.deadline(), now + ms(1000));
        assert_eq!(manager.next_deadline(), Some(now + ms(1000)));
    }

    #[test]
    fn expiry_removes_and_closes_once() {
        let log = CloseLog::default();
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.notify_at(recording(Request::success("saved").duration_ms(1000), &log), now);

        assert_eq!(manager.tick(now + ms(999)), 0);
        assert!(manager.contains(id));

        assert_eq!(manager.tick(now + ms(1000)), 1);
        assert!(!manager.contains(id));
        assert_eq!(manager.tick(now + ms(5000)), 0);
        assert_eq!(*log.borrow(), vec![(id, CloseReason::Expired)]);
    }

    #[test]
    fn dismiss_before_deadline_cancels_timer() {
        let log = CloseLog::default();
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.notify_at(recording(Request::info("hi"), &log), now);
        let handle = manager.timer(id).expect("timer should be pending");

        assert!(manager.dismiss(id));
        assert!(!manager.has_pending_timers());
        assert!(!manager.expire(handle));
        assert_eq!(manager.tick(now + ms(10_000)), 0);
        assert_eq!(*log.borrow(), vec![(id, CloseReason::Dismissed)]);
    }

    #[test]
    fn dismiss_twice_reports_false_second_time() {
        let mut manager = Manager::new();
        let id = manager.notify(Request::info("hi"));

        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn dismiss_unknown_id_is_harmless() {
        let mut manager = Manager::new();
        let kept = manager.notify(Request::info("kept"));

        assert!(!manager.dismiss(NotificationId::from_raw(999)));
        assert!(manager.contains(kept));
    }

    #[test]
    fn dismiss_after_expiry_does_not_close_again() {
        let log = CloseLog::default();
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.notify_at(recording(Request::info("hi").duration_ms(10), &log), now);

        manager.tick(now + ms(10));
        assert!(!manager.dismiss(id));
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn sticky_notification_never_expires() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.notify_at(Request::error("disk full").sticky(), now);

        assert!(manager.timer(id).is_none());
        assert_eq!(manager.tick(now + Duration::from_secs(3600)), 0);
        assert!(manager.contains(id));
        assert!(manager.dismiss(id));
    }

    #[test]
    fn default_duration_is_three_seconds() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.notify_at(Request::info("hi"), now);

        assert_eq!(manager.tick(now + ms(2999)), 0);
        assert_eq!(manager.tick(now + ms(3000)), 1);
        assert!(!manager.contains(id));
    }

    #[test]
    fn defaults_apply_to_unset_position() {
        let mut manager = Manager::with_defaults(Defaults {
            position: "bottom-center".into(),
            ..Defaults::default()
        });
        let id = manager.notify(Request::info("hi"));
        let explicit = manager.notify(Request::info("there").position("top-left"));

        assert_eq!(manager.get(id).unwrap().position().as_str(), "bottom-center");
        assert_eq!(manager.get(explicit).unwrap().position().as_str(), "top-left");
    }

    #[test]
    fn handle_message_routes_dismiss_and_tick() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let dismissed = manager.notify_at(Request::info("a"), now);
        let expired = manager.notify_at(Request::info("b").duration_ms(50), now);

        manager.handle_message(&Message::Dismiss(dismissed));
        manager.handle_message(&Message::Tick(now + ms(50)));

        assert!(!manager.contains(dismissed));
        assert!(!manager.contains(expired));
    }

    #[test]
    fn expired_message_after_dismiss_is_ignored() {
        let mut manager = Manager::new();
        let id = manager.notify(Request::info("a"));
        let handle = manager.timer(id).unwrap();

        manager.handle_message(&Message::Dismiss(id));
        manager.handle_message(&Message::Expired(handle));
        assert!(manager.is_empty());
    }

    #[test]
    fn expiry_task_is_one_unit_for_timed_and_none_otherwise() {
        let mut manager = Manager::new();
        let timed = manager.notify(Request::info("timed"));
        let sticky = manager.notify(Request::info("sticky").sticky());

        assert_eq!(manager.expiry_task(timed).units(), 1);
        assert_eq!(manager.expiry_task(sticky).units(), 0);
        assert_eq!(manager.expiry_task(NotificationId::from_raw(999)).units(), 0);
    }

    #[test]
    fn expiry_after_dismiss_leaves_dismissed_reason() {
        let log = CloseLog::default();
        let mut manager = Manager::new();
        let id = manager.notify(recording(Request::info("a"), &log));
        let handle = manager.timer(id).expect("timer should be pending");
        let _task = manager.expiry_task(id);

        assert!(manager.dismiss(id));
        assert!(!manager.expire(handle));
        manager.handle_message(&Message::Expired(handle));
        assert_eq!(*log.borrow(), vec![(id, CloseReason::Dismissed)]);
    }

    #[test]
    fn dismiss_aborts_pending_expiry_task() {
        let mut manager = Manager::new();
        let id = manager.notify(Request::info("a"));
        let _task = manager.expiry_task(id);
        let abort = manager.expiry_tasks.get(&id).cloned().expect("task should be tracked");

        assert!(!abort.is_aborted());
        manager.dismiss(id);
        assert!(abort.is_aborted());
        assert!(manager.expiry_tasks.is_empty());
    }

    #[test]
    fn clear_and_reschedule_abort_expiry_tasks() {
        let mut manager = Manager::new();
        let id = manager.notify(Request::info("a"));
        let _first = manager.expiry_task(id);
        let first = manager.expiry_tasks.get(&id).cloned().expect("task should be tracked");

        let _second = manager.expiry_task(id);
        let second = manager.expiry_tasks.get(&id).cloned().expect("task should be tracked");
        assert!(first.is_aborted());
        assert!(!second.is_aborted());

        manager.clear();
        assert!(second.is_aborted());
        assert!(manager.expiry_tasks.is_empty());
    }

    #[test]
    fn clear_closes_everything_with_cleared_reason() {
        let log = CloseLog::default();
        let mut manager = Manager::new();
        let a = manager.notify(recording(Request::info("a"), &log));
        let b = manager.notify(recording(Request::warning("b").sticky(), &log));

        assert_eq!(manager.clear(), 2);
        assert!(manager.is_empty());
        assert!(!manager.has_pending_timers());
        assert_eq!(
            *log.borrow(),
            vec![(a, CloseReason::Cleared), (b, CloseReason::Cleared)]
        );
    }

    #[test]
    fn dropping_manager_closes_remaining_notifications() {
        let log = CloseLog::default();
        let id = {
            let mut manager = Manager::new();
            manager.notify(recording(Request::info("bye"), &log))
        };
        assert_eq!(*log.borrow(), vec![(id, CloseReason::Cleared)]);
    }

    #[test]
    fn dismissing_one_entry_leaves_others_scheduled() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let a = manager.notify_at(Request::info("a").duration_ms(10), now);
        let b = manager.notify_at(Request::info("b").duration_ms(10), now);

        assert!(manager.dismiss(a));
        assert_eq!(manager.tick(now + ms(10)), 1);
        assert!(!manager.contains(b));
    }

    #[test]
    fn diagnostics_record_lifecycle_and_problem_kinds() {
        let mut collector = DiagnosticsCollector::default();
        let mut manager = Manager::new();
        manager.set_diagnostics(collector.handle());

        let id = manager.notify(Request::error("disk full"));
        manager.dismiss(id);
        collector.process_pending();

        let kinds: Vec<_> = collector.events().map(|event| event.kind.clone()).collect();
        assert!(matches!(kinds[0], DiagnosticEventKind::Shown { kind: Kind::Error, .. }));
        assert!(matches!(kinds[1], DiagnosticEventKind::Error { .. }));
        assert_eq!(
            kinds[2],
            DiagnosticEventKind::Closed {
                id,
                reason: CloseReason::Dismissed
            }
        );
    }
}
