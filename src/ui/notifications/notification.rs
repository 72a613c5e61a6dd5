// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `NotificationEntry` kept by the store, the
//! `Request` callers build to enqueue one, and the small enums describing
//! kind, animation and close reason.

use super::manager::Message;
use crate::diagnostics::{DiagnosticsHandle, WarningType};
use crate::domain::notification::{DisplayDuration, Position};
use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::{Color, Element};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Instant;

/// Identifier of an active notification.
///
/// Assigned by the store from a monotonically increasing counter, so two
/// notifications created within the same clock tick still differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notification kind: selects the icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Kind {
    Success,
    #[default]
    Info,
    Warning,
    Error,
    /// Caller-styled content: no icon, message rendered unwrapped.
    Custom,
}

impl Kind {
    pub const ALL: [Kind; 5] = [
        Kind::Success,
        Kind::Info,
        Kind::Warning,
        Kind::Error,
        Kind::Custom,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Info => "info",
            Kind::Warning => "warning",
            Kind::Error => "error",
            Kind::Custom => "custom",
        }
    }

    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Info => palette::INFO_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
            Kind::Custom => palette::GRAY_100,
        }
    }

    /// Whether the renderer shows a kind icon.
    #[must_use]
    pub fn has_icon(self) -> bool {
        self != Kind::Custom
    }

    /// Whether the message is wrapped in the standard message container.
    #[must_use]
    pub fn wraps_content(self) -> bool {
        self != Kind::Custom
    }

    /// Parses a kind, falling back to [`Kind::Info`] on unknown input.
    ///
    /// An unknown kind is a configuration mistake, not a reason to drop the
    /// notification: it is logged and reported to diagnostics when a handle
    /// is given.
    pub fn parse_or_default(raw: &str, diagnostics: Option<&DiagnosticsHandle>) -> Kind {
        match raw.parse() {
            Ok(kind) => kind,
            Err(err) => {
                tracing::warn!(%err, "falling back to info kind");
                if let Some(handle) = diagnostics {
                    handle.log_warning(WarningType::InvalidKind, raw);
                }
                Kind::default()
            }
        }
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| Error::InvalidKind(raw.to_string()))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entrance animation hint. Has no effect on the lifecycle.
///
/// The built-in [`Toast`](super::Toast) renderer draws every entry without
/// motion. The hint is kept on the entry for custom renderers and shows up
/// in lifecycle logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Animation {
    #[default]
    #[serde(rename = "fade")]
    Fade,
    #[serde(rename = "pop")]
    Pop,
    #[serde(rename = "slide-t-b")]
    SlideTopToBottom,
    #[serde(rename = "slide-b-t")]
    SlideBottomToTop,
    #[serde(rename = "slide-l-r")]
    SlideLeftToRight,
    #[serde(rename = "slide-r-l")]
    SlideRightToLeft,
}

impl Animation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Animation::Fade => "fade",
            Animation::Pop => "pop",
            Animation::SlideTopToBottom => "slide-t-b",
            Animation::SlideBottomToTop => "slide-b-t",
            Animation::SlideLeftToRight => "slide-l-r",
            Animation::SlideRightToLeft => "slide-r-l",
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a notification left the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// Its display duration elapsed.
    Expired,
    /// The user or the caller closed it.
    Dismissed,
    /// The manager was cleared or dropped.
    Cleared,
}

/// Builds a renderable fragment for a notification body.
pub type FragmentFn = dyn Fn() -> Element<'static, Message>;

/// Called once when a notification is removed, whatever the cause.
pub type CloseCallback = Box<dyn FnOnce(NotificationId, CloseReason)>;

/// Notification body: plain text or a caller-built widget fragment.
#[derive(Clone)]
pub enum Content {
    Text(String),
    Fragment(Rc<FragmentFn>),
}

impl Content {
    /// Wraps a closure producing the widget to display.
    pub fn fragment(build: impl Fn() -> Element<'static, Message> + 'static) -> Self {
        Content::Fragment(Rc::new(build))
    }

    /// Returns the text, if this is plain text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Content::Text(text) => Some(text),
            Content::Fragment(_) => None,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Content::Fragment(_) => f.write_str("Fragment(..)"),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

/// Values applied to fields a [`Request`] leaves unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Defaults {
    pub kind: Kind,
    pub duration: DisplayDuration,
    pub position: Position,
    pub animation: Animation,
}

/// A request to show a notification.
///
/// Every field except the message is optional; unset fields take the
/// manager's [`Defaults`].
pub struct Request {
    message: Content,
    kind: Option<Kind>,
    duration: Option<DisplayDuration>,
    position: Option<Position>,
    animation: Option<Animation>,
    on_close: Option<CloseCallback>,
}

impl Request {
    pub fn new(message: impl Into<Content>) -> Self {
        Self {
            message: message.into(),
            kind: None,
            duration: None,
            position: None,
            animation: None,
            on_close: None,
        }
    }

    pub fn success(message: impl Into<Content>) -> Self {
        Self::new(message).kind(Kind::Success)
    }

    pub fn info(message: impl Into<Content>) -> Self {
        Self::new(message).kind(Kind::Info)
    }

    pub fn warning(message: impl Into<Content>) -> Self {
        Self::new(message).kind(Kind::Warning)
    }

    pub fn error(message: impl Into<Content>) -> Self {
        Self::new(message).kind(Kind::Error)
    }

    pub fn custom(message: impl Into<Content>) -> Self {
        Self::new(message).kind(Kind::Custom)
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the display duration. `0` keeps the toast until dismissed.
    #[must_use]
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration = Some(DisplayDuration::from_millis(ms));
        self
    }

    /// Keeps the toast until it is dismissed.
    #[must_use]
    pub fn sticky(mut self) -> Self {
        self.duration = Some(DisplayDuration::sticky());
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = Some(position.into());
        self
    }

    #[must_use]
    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn on_close(mut self, callback: impl FnOnce(NotificationId, CloseReason) + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub(super) fn into_entry(
        self,
        id: NotificationId,
        defaults: &Defaults,
        created_at: Instant,
    ) -> NotificationEntry {
        NotificationEntry {
            id,
            kind: self.kind.unwrap_or(defaults.kind),
            message: self.message,
            duration: self.duration.unwrap_or(defaults.duration),
            position: self.position.unwrap_or_else(|| defaults.position.clone()),
            animation: self.animation.unwrap_or(defaults.animation),
            created_at,
            on_close: self.on_close,
        }
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("message", &self.message)
            .field("kind", &self.kind)
            .field("duration", &self.duration)
            .field("position", &self.position)
            .field("animation", &self.animation)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// An active notification.
///
/// Entries are never modified after creation; the only transition is
/// removal, which consumes the entry and runs its close callback.
pub struct NotificationEntry {
    id: NotificationId,
    kind: Kind,
    message: Content,
    duration: DisplayDuration,
    position: Position,
    animation: Animation,
    created_at: Instant,
    on_close: Option<CloseCallback>,
}

impl NotificationEntry {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &Content {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> DisplayDuration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        self.animation
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn has_close_callback(&self) -> bool {
        self.on_close.is_some()
    }

    /// Consumes the entry, running its close callback if any.
    pub(super) fn close(mut self, reason: CloseReason) {
        if let Some(callback) = self.on_close.take() {
            callback(self.id, reason);
        }
    }
}

impl fmt::Debug for NotificationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationEntry")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("duration", &self.duration)
            .field("position", &self.position)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn kind_parses_known_names_case_insensitively() {
        assert_eq!("success".parse::<Kind>(), Ok(Kind::Success));
        assert_eq!(" Warning ".parse::<Kind>(), Ok(Kind::Warning));
        assert_eq!("CUSTOM".parse::<Kind>(), Ok(Kind::Custom));
    }

    #[test]
    fn unknown_kind_is_an_invalid_kind_error() {
        assert_eq!(
            "sparkle".parse::<Kind>(),
            Err(Error::InvalidKind("sparkle".into()))
        );
    }

    #[test]
    fn unknown_kind_falls_back_to_info() {
        assert_eq!(Kind::parse_or_default("sparkle", None), Kind::Info);
        assert_eq!(Kind::parse_or_default("error", None), Kind::Error);
    }

    #[test]
    fn custom_kind_has_no_icon_and_raw_content() {
        assert!(!Kind::Custom.has_icon());
        assert!(!Kind::Custom.wraps_content());
        for kind in [Kind::Success, Kind::Info, Kind::Warning, Kind::Error] {
            assert!(kind.has_icon());
            assert!(kind.wraps_content());
        }
    }

    #[test]
    fn kind_colors_are_distinct() {
        let colors: Vec<_> = Kind::ALL.iter().map(|kind| kind.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn animation_names_match_style_hints() {
        assert_eq!(Animation::default().as_str(), "fade");
        assert_eq!(Animation::SlideTopToBottom.as_str(), "slide-t-b");
        assert_eq!(Animation::SlideRightToLeft.to_string(), "slide-r-l");
    }

    #[test]
    fn request_fills_unset_fields_from_defaults() {
        let defaults = Defaults {
            position: Position::from("bottom-left"),
            ..Defaults::default()
        };
        let entry = Request::new("saved").into_entry(
            NotificationId::from_raw(1),
            &defaults,
            Instant::now(),
        );

        assert_eq!(entry.kind(), Kind::Info);
        assert_eq!(entry.duration().as_millis(), 3000);
        assert_eq!(entry.position().as_str(), "bottom-left");
        assert_eq!(entry.animation(), Animation::Fade);
        assert_eq!(entry.message().as_text(), Some("saved"));
    }

    #[test]
    fn request_fields_override_defaults() {
        let entry = Request::error("disk full")
            .duration_ms(0)
            .position("top-left")
            .animation(Animation::Pop)
            .into_entry(NotificationId::from_raw(2), &Defaults::default(), Instant::now());

        assert_eq!(entry.kind(), Kind::Error);
        assert!(entry.duration().is_sticky());
        assert_eq!(entry.position().as_str(), "top-left");
        assert_eq!(entry.animation(), Animation::Pop);
    }

    #[test]
    fn close_runs_callback_with_reason() {
        let seen = Rc::new(Cell::new(None));
        let sink = Rc::clone(&seen);
        let entry = Request::info("bye")
            .on_close(move |id, reason| sink.set(Some((id, reason))))
            .into_entry(NotificationId::from_raw(9), &Defaults::default(), Instant::now());

        assert!(entry.has_close_callback());
        entry.close(CloseReason::Dismissed);
        assert_eq!(
            seen.get(),
            Some((NotificationId::from_raw(9), CloseReason::Dismissed))
        );
    }
}
