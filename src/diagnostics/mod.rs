// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the notification lifecycle.
//!
//! Parts of the application report what happened to toasts (shown, closed,
//! rejected input) through a cheap, cloneable [`DiagnosticsHandle`]. The
//! [`DiagnosticsCollector`] drains those reports into a memory-bounded
//! [`RingBuffer`] so the recent history can be inspected or displayed.
//!
//! # Architecture
//!
//! - [`RingBuffer`]: Fixed-capacity buffer that evicts the oldest entry
//! - [`DiagnosticEvent`]: One timestamped lifecycle report
//! - [`HistoryCapacity`]: Validated buffer size

mod buffer;
mod collector;
mod events;

pub use crate::domain::diagnostics::HistoryCapacity;
pub use buffer::RingBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, WarningType};
