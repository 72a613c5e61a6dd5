// SPDX-License-Identifier: MPL-2.0
//! `iced_toaster` is a toast notification manager for the Iced GUI framework.
//!
//! Notifications are enqueued with [`ui::notifications::Manager::notify`],
//! expire on a timer or close from the UI, and render grouped by their
//! on-screen position. The `iced_toaster` binary is a small demo shell
//! around the manager.

#![doc(html_root_url = "https://docs.rs/iced_toaster/0.1.0")]

pub mod app;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

pub use app::config;
