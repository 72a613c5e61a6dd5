// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for toast display metadata.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Display Duration Bounds
// =============================================================================

/// Display duration bounds in milliseconds.
pub mod duration_bounds {
    /// Default display duration in milliseconds.
    pub const DEFAULT_MS: u64 = 3000;
    /// Sentinel meaning the toast never expires on its own.
    pub const STICKY_MS: u64 = 0;
    /// Maximum display duration (one hour).
    pub const MAX_MS: u64 = 60 * 60 * 1000;
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a toast stays on screen before it is removed automatically.
///
/// A value of `0` is sticky: the toast stays until it is dismissed or the
/// manager is cleared. Other values are clamped to one hour.
///
/// # Example
///
/// ```
/// use iced_toaster::domain::notification::DisplayDuration;
/// use std::time::Duration;
///
/// let duration = DisplayDuration::from_millis(1500);
/// assert_eq!(duration.auto_dismiss_after(), Some(Duration::from_millis(1500)));
///
/// assert!(DisplayDuration::from_millis(0).is_sticky());
/// assert_eq!(DisplayDuration::sticky().auto_dismiss_after(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayDuration(u64);

impl DisplayDuration {
    /// Creates a display duration from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.min(duration_bounds::MAX_MS))
    }

    /// A duration that never expires.
    #[must_use]
    pub fn sticky() -> Self {
        Self(duration_bounds::STICKY_MS)
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns whether this duration disables auto-dismiss.
    #[must_use]
    pub fn is_sticky(self) -> bool {
        self.0 == duration_bounds::STICKY_MS
    }

    /// Returns the delay before auto-dismiss, or `None` for sticky toasts.
    #[must_use]
    pub fn auto_dismiss_after(self) -> Option<Duration> {
        if self.is_sticky() {
            None
        } else {
            Some(Duration::from_millis(self.0))
        }
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Position
// =============================================================================

/// Screen region key used to group toasts.
///
/// Positions are caller-defined strings and are not validated. The renderer
/// knows how to place the six well-known corner/edge keys; anything else is
/// still grouped under its own key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(String);

impl Position {
    pub const TOP_LEFT: &'static str = "top-left";
    pub const TOP_CENTER: &'static str = "top-center";
    pub const TOP_RIGHT: &'static str = "top-right";
    pub const BOTTOM_LEFT: &'static str = "bottom-left";
    pub const BOTTOM_CENTER: &'static str = "bottom-center";
    pub const BOTTOM_RIGHT: &'static str = "bottom-right";

    /// Creates a position from any string key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the position key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the key names the bottom edge of the screen.
    #[must_use]
    pub fn is_bottom(&self) -> bool {
        self.0.starts_with("bottom")
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Self::TOP_RIGHT)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Position {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Position {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl AsRef<str> for Position {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
