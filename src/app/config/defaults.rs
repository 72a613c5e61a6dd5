// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: values applied to requests that leave a field unset
//! - **Diagnostics**: event history size
//! - **Polling**: intervals used by the demo subscriptions

use crate::domain::diagnostics::history_capacity_bounds;
use crate::domain::notification::{duration_bounds, Position};

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default on-screen position key.
pub const DEFAULT_POSITION: &str = Position::TOP_RIGHT;

/// Default display duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = duration_bounds::DEFAULT_MS;

/// Longest display duration accepted from the config file.
pub const MAX_DURATION_MS: u64 = duration_bounds::MAX_MS;

/// Default notification kind name.
pub const DEFAULT_KIND: &str = "info";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = history_capacity_bounds::DEFAULT;

// ==========================================================================
// Polling Defaults
// ==========================================================================

/// Interval of the optional deadline polling subscription.
pub const TIMER_POLL_INTERVAL_MS: u64 = 100;

/// Interval at which queued diagnostic reports are drained.
pub const DIAGNOSTICS_DRAIN_INTERVAL_MS: u64 = 500;
