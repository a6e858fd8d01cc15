// SPDX-License-Identifier: MPL-2.0
//! Toast widgets and their provider.
//!
//! Components follow the Elm-style "state down, messages up" pattern: the
//! provider owns state, widgets render it and publish messages back.
//!
//! # Components
//!
//! - [`provider`] - `ToastProvider`, `Scope` and `Toaster` (the hook)
//! - [`popup`] - Animated presentation unit for one record
//! - [`toast`] - Standalone presentational `Toast` card
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (slide)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG glyphs
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod icons;
pub mod popup;
pub mod provider;
pub mod theming;
pub mod toast;
pub mod widgets;
