// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by every toast surface.
//!
//! Colors come from [`palette`], spacing follows a 4px step in [`spacing`],
//! and card dimensions live in [`sizing`]. Translucent variants are built by
//! combining a palette color with an [`opacity`] level:
//!
//! ```
//! use iced::Color;
//! use iced_toast::ui::design_tokens::{opacity, palette};
//!
//! let close_hover = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::WHITE
//! };
//! assert!(close_hover.a < 1.0);
//! ```
//!
//! The `const` block at the end of this file rejects inconsistent edits at
//! compile time.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Severity colors
    pub const SUCCESS_600: Color = Color::from_rgb(0.086, 0.639, 0.290); // Green
    pub const ERROR_600: Color = Color::from_rgb(0.863, 0.149, 0.149); // Red
    pub const WARNING_600: Color = Color::from_rgb(0.792, 0.541, 0.016); // Yellow
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // Blue
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Shadow under the toast card
    pub const SHADOW: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Severity and close glyphs
    pub const ICON_MD: f32 = 20.0;

    /// Square badge holding the severity icon.
    pub const ICON_BADGE: f32 = 44.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Demo headings
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Toast messages, labels
    pub const BODY: f32 = 14.0;

    /// Caption - Small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle card outline
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > 0.0);
    assert!(sizing::ICON_BADGE > sizing::ICON_MD);
    assert!(sizing::TOAST_WIDTH > sizing::ICON_BADGE);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_colors_are_in_range() {
        for color in [
            palette::SUCCESS_600,
            palette::ERROR_600,
            palette::WARNING_600,
            palette::INFO_500,
        ] {
            assert!((0.0..=1.0).contains(&color.r));
            assert!((0.0..=1.0).contains(&color.g));
            assert!((0.0..=1.0).contains(&color.b));
        }
    }
}
