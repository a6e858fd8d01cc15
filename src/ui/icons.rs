// SPDX-License-Identifier: MPL-2.0
//! Centralized module for the toast SVG glyphs.
//!
//! Glyphs are 16×16 path outlines embedded as strings. Handles are built once
//! and cached using `OnceLock`; rendering tints them with a single color, so
//! the same glyph works on any badge background.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let badge_icon = icons::tinted(icons::for_kind(ToastType::Success), 20.0, palette::WHITE);
//! ```

use crate::toast::ToastType;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Wraps a single path outline into a 16×16 SVG document.
fn glyph(path: &str) -> Vec<u8> {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="16" height="16"><path fill="white" fill-rule="evenodd" d="{path}"/></svg>"#
    )
    .into_bytes()
}

/// Defines an icon function returning a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            HANDLE
                .get_or_init(|| Handle::from_memory(glyph($path)))
                .clone()
        }
    };
}

// =============================================================================
// Severity Icons
// =============================================================================

define_icon!(
    check,
    "M13.78 4.22a.75.75 0 010 1.06l-7.25 7.25a.75.75 0 01-1.06 0L2.22 9.28a.75.75 0 011.06-1.06L6 10.94l6.72-6.72a.75.75 0 011.06 0z",
    "Check icon: a single tick mark."
);
define_icon!(
    stop,
    "M4.47.22A.75.75 0 015 0h6a.75.75 0 01.53.22l4.25 4.25c.141.14.22.331.22.53v6a.75.75 0 01-.22.53l-4.25 4.25A.75.75 0 0111 16H5a.75.75 0 01-.53-.22L.22 11.53A.75.75 0 010 11V5a.75.75 0 01.22-.53L4.47.22zm.84 1.28L1.5 5.31v5.38l3.81 3.81h5.38l3.81-3.81V5.31L10.69 1.5H5.31zM8 4a.75.75 0 01.75.75v3.5a.75.75 0 01-1.5 0v-3.5A.75.75 0 018 4zm0 8a1 1 0 100-2 1 1 0 000 2z",
    "Stop icon: octagon with an exclamation mark."
);
define_icon!(
    alert,
    "M8.22 1.754a.25.25 0 00-.44 0L1.698 13.132a.25.25 0 00.22.368h12.164a.25.25 0 00.22-.368L8.22 1.754zm-1.763-.707c.659-1.234 2.427-1.234 3.086 0l6.082 11.378A1.75 1.75 0 0114.082 15H1.918a1.75 1.75 0 01-1.543-2.575L6.457 1.047zM9 11a1 1 0 11-2 0 1 1 0 012 0zm-.25-5.25a.75.75 0 00-1.5 0v2.5a.75.75 0 001.5 0v-2.5z",
    "Alert icon: triangle with an exclamation mark."
);
define_icon!(
    info,
    "M8 1.5a6.5 6.5 0 100 13 6.5 6.5 0 000-13zM0 8a8 8 0 1116 0A8 8 0 010 8zm6.5-.25A.75.75 0 017.25 7h1a.75.75 0 01.75.75v2.75h.25a.75.75 0 010 1.5h-2a.75.75 0 010-1.5h.25v-2h-.25a.75.75 0 01-.75-.75zM8 6a1 1 0 100-2 1 1 0 000 2z",
    "Info icon: circle with a lowercase i."
);

// =============================================================================
// Control Icons
// =============================================================================

define_icon!(
    cross,
    "M3.72 3.72a.75.75 0 011.06 0L8 6.94l3.22-3.22a.75.75 0 111.06 1.06L9.06 8l3.22 3.22a.75.75 0 11-1.06 1.06L8 9.06l-3.22 3.22a.75.75 0 01-1.06-1.06L6.94 8 3.72 4.78a.75.75 0 010-1.06z",
    "Cross icon: X shape for closing."
);

/// Returns the glyph shown in the badge for `kind`.
#[must_use]
pub fn for_kind(kind: ToastType) -> Handle {
    match kind {
        ToastType::Success => check(),
        ToastType::Error => stop(),
        ToastType::Warning => alert(),
        ToastType::Info => info(),
    }
}

/// Renders `handle` as a square of `size` pixels tinted with `color`.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
