// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle.
//!
//! Callers enqueue short-lived messages that expire after a timeout, can be
//! dismissed from the UI, and are grouped by on-screen position.
//!
//! # Components
//!
//! - [`store`] - ordered collection of active entries, id assignment
//! - [`timers`] - one pending expiry per entry, generation-checked firing
//! - [`grouping`] - position-keyed view derived from the store
//! - [`manager`] - public API and the single close transition
//! - [`toast`] - iced widgets rendering entries and the overlay
//!
//! # Usage
//!
//! ```ignore
//! use iced_toaster::ui::notifications::{Manager, Request};
//!
//! let mut manager = Manager::new();
//! let id = manager.notify(Request::success("Saved").duration_ms(1000));
//!
//! // In update: schedule the expiry on the runtime.
//! let task = manager.expiry_task(id).map(Message::Notification);
//!
//! // In view: render every group.
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```

pub mod grouping;
mod manager;
mod notification;
pub mod store;
pub mod timers;
mod toast;

pub use grouping::{group, GroupedView, PositionGroup};
pub use manager::{expiry_task, Manager, Message as NotificationMessage};
pub use notification::{
    Animation, CloseCallback, CloseReason, Content, Defaults, FragmentFn, Kind, NotificationEntry,
    NotificationId, Request,
};
pub use store::Store;
pub use timers::{TimerHandle, TimerRegistry};
pub use toast::{placement, Toast};
