// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`notifications`] - toast lifecycle engine and widgets
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)
//! - [`icons`] - embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod notifications;
