// SPDX-License-Identifier: MPL-2.0
//! Toast domain: records, options, the registry and dismissal timers.
//!
//! Nothing here renders. The widgets in [`crate::ui`] read these types and
//! feed user actions back as messages.
//!
//! # Components
//!
//! - [`kind`] - `ToastType` severity with its color lookup
//! - [`position`] - `Position` screen corner
//! - [`record`] - `ToastOptions` (partial request) and `ToastRecord` (resolved)
//! - [`registry`] - Ordered store owned by a provider
//! - [`timer`] - Per-toast dismissal countdown

pub mod kind;
pub mod position;
pub mod record;
pub(crate) mod registry;
pub mod timer;

pub use kind::{ToastType, UnknownToastType};
pub use position::{Position, UnknownPosition};
pub use record::{ToastId, ToastOptions, ToastRecord};
pub use timer::{DismissalTimer, Phase, TimerEvent};
