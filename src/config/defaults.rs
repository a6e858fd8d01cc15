// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Per-toast defaults resolved when options omit a field
//! - **Animation**: Enter/exit timing of the presentation unit
//! - **Ticks**: Subscription cadence driving the dismissal timers

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays on screen before it starts leaving (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Text shown when a toast is requested without a usable message.
pub const PLACEHOLDER_MESSAGE: &str = "Please provide a message";

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Gap between the start of the exit animation and logical removal (in milliseconds).
pub const SETTLE_DELAY_MS: u64 = 300;

/// Length of the slide-in animation (in milliseconds).
pub const ENTER_DURATION_MS: u64 = 300;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Tick interval while a toast is sliding in or out (~60 fps).
pub const ANIMATION_TICK_MS: u64 = 16;

/// Tick interval while toasts are merely waiting for their timers.
pub const IDLE_TICK_MS: u64 = 100;

const _: () = {
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(ANIMATION_TICK_MS < IDLE_TICK_MS);
    assert!(IDLE_TICK_MS < SETTLE_DELAY_MS);
};
