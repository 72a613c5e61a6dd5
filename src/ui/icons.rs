// SPDX-License-Identifier: MPL-2.0
//! SVG icons for toasts.
//!
//! Icons are embedded at compile time from `assets/icons/` and their handles
//! are cached in a `OnceLock`, so repeated renders reuse the parsed data.

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function returning an `Svg` widget with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            Svg::new(cached(&HANDLE, DATA))
        }
    };
}

/// Returns the handle in `cell`, parsing `data` on first use only.
fn cached(cell: &'static OnceLock<Handle>, data: &'static [u8]) -> Handle {
    cell.get_or_init(|| Handle::from_memory(data)).clone()
}

define_icon!(check_circle, "check-circle.svg", "Success: check mark in a circle.");
define_icon!(info_circle, "info-circle.svg", "Info: letter i in a circle.");
define_icon!(warning, "warning.svg", "Warning: exclamation mark in a triangle.");
define_icon!(close_circle, "close-circle.svg", "Error: cross in a circle.");
define_icon!(close, "close.svg", "Close button glyph: plain cross.");

/// Resizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_handle_is_built_once() {
        static CELL: OnceLock<Handle> = OnceLock::new();
        let first = cached(&CELL, b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>");
        let second = cached(&CELL, b"<svg xmlns=\"http://www.w3.org/2000/svg\"><g/></svg>");

        assert_eq!(first.id(), second.id());
        assert_eq!(first, second);
    }

    #[test]
    fn separate_cells_hold_separate_icons() {
        static CHECK: OnceLock<Handle> = OnceLock::new();
        static CROSS: OnceLock<Handle> = OnceLock::new();
        let check = cached(&CHECK, include_bytes!("../../assets/icons/check-circle.svg"));
        let cross = cached(&CROSS, include_bytes!("../../assets/icons/close.svg"));

        assert_ne!(check.id(), cross.id());
    }
}
