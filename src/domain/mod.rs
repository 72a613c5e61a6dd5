// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure value objects with no dependency beyond `std`.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`HistoryCapacity`](diagnostics::HistoryCapacity))
//! - [`notification`]: Toast display metadata ([`Position`](notification::Position),
//!   [`DisplayDuration`](notification::DisplayDuration))

pub mod diagnostics;
pub mod notification;
