// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`HistoryCapacity`]: how many lifecycle events the diagnostics history keeps

mod newtypes;

pub use newtypes::{history_capacity_bounds, HistoryCapacity};
