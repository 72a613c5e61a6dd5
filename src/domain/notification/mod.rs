// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! Value objects describing where a toast is shown and for how long,
//! independent of any presentation framework.

pub mod newtypes;

pub use newtypes::{duration_bounds, DisplayDuration, Position};
