// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so repeated views reuse the parsed data.
//!
//! Icons use generic visual names describing the icon's appearance, not the
//! action context (e.g. `chevron_left`, not `open_drawer`).

use iced::widget::svg::{Handle, Svg};
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(
    zoom_in,
    "zoom-in.svg",
    "Magnifying glass with a plus sign."
);
define_icon!(
    zoom_out,
    "zoom-out.svg",
    "Magnifying glass with a minus sign."
);
define_icon!(
    zoom_reset,
    "zoom-reset.svg",
    "Four corners pointing outwards."
);
define_icon!(
    chevron_left,
    "chevron-left.svg",
    "Chevron pointing left (drawer closed)."
);
define_icon!(
    chevron_right,
    "chevron-right.svg",
    "Chevron pointing right (drawer open)."
);
