// SPDX-License-Identifier: MPL-2.0
//! Demo application around the notification manager.
//!
//! The `App` struct owns one [`notifications::Manager`] and a
//! [`DiagnosticsCollector`], loads notification defaults from
//! `settings.toml`, and offers buttons to show toasts of every kind at any
//! position.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::diagnostics::{DiagnosticsCollector, WarningType};
use crate::domain::notification::Position;
use crate::ui::notifications::{self, CloseReason, Content, NotificationId, Request};
use iced::widget::text;
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Most recent close reported through a toast's `on_close` callback.
type LastClosed = Rc<Cell<Option<(NotificationId, CloseReason)>>>;

/// Root Iced application state.
pub struct App {
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Position used for toasts shown from the demo buttons.
    position: Position,
    /// Whether expiries come from the polling subscription.
    poll_timers: bool,
    /// Number of toasts shown so far, used in their text.
    shown: u64,
    last_closed: LastClosed,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("notifications", &self.notifications.len())
            .field("position", &self.position)
            .field("poll_timers", &self.poll_timers)
            .field("shown", &self.shown)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir.clone());

    // iced calls boot through `Fn`, so each call gets its own copy of the flags.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads `settings.toml` and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());
        let handle = diagnostics.handle();

        let mut defaults = config.notifications.to_defaults(Some(&handle));
        if let Some(position) = flags.position {
            defaults.position = Position::from(position);
        }

        let mut manager = notifications::Manager::with_defaults(defaults);
        manager.set_diagnostics(handle.clone());

        let mut app = App {
            position: manager.defaults().position.clone(),
            notifications: manager,
            diagnostics,
            poll_timers: flags.poll_timers,
            shown: 0,
            last_closed: Rc::new(Cell::new(None)),
        };

        let task = match config_warning {
            Some(key) => {
                handle.log_warning(WarningType::ConfigLoad, key.as_str());
                app.show(
                    Request::warning(format!("Settings could not be loaded ({key}), using defaults"))
                        .sticky(),
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.notifications.len() {
            0 => "IcedToaster".to_string(),
            count => format!("IcedToaster ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_timer_subscription(
                self.poll_timers,
                self.notifications.has_pending_timers(),
            ),
            subscription::create_diagnostics_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::Show(kind) => {
                self.shown += 1;
                let body = format!("{} notification #{}", kind, self.shown);
                self.show(Request::new(body).kind(kind))
            }
            Message::ShowSticky => {
                self.shown += 1;
                let body = format!("Sticky notification #{}, close it by hand", self.shown);
                self.show(Request::info(body).sticky())
            }
            Message::ShowFragment => {
                self.shown += 1;
                self.show(Request::custom(Content::fragment(|| {
                    text("Custom content rendered by the caller").into()
                })))
            }
            Message::SelectPosition(position) => {
                self.position = position;
                Task::none()
            }
            Message::ClearAll => {
                let cleared = self.notifications.clear();
                tracing::debug!(cleared, "cleared all notifications");
                Task::none()
            }
            Message::DrainDiagnostics(_) => {
                self.diagnostics.process_pending();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Enqueues `request` at the selected position and schedules its expiry.
    fn show(&mut self, request: Request) -> Task<Message> {
        let last_closed = Rc::clone(&self.last_closed);
        let request = request
            .position(self.position.clone())
            .on_close(move |id, reason| last_closed.set(Some((id, reason))));

        let id = self.notifications.notify(request);
        if self.poll_timers {
            Task::none()
        } else {
            self.notifications
                .expiry_task(id)
                .map(Message::Notification)
        }
    }
}
