// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides auto-dismissing toast notifications for the Iced GUI framework.
//!
//! A [`ToastProvider`] owns the toasts of one part of the UI. Descendant
//! components reach it through a [`Scope`] and show toasts with
//! [`Toaster::show_toast`]. Each toast slides in at one of four corners,
//! leaves after its duration (or when closed), and reports its removal
//! through an application message.
//!
//! ```ignore
//! let mut toasts = ToastProvider::<Message>::new(ProviderConfig::default());
//!
//! toasts
//!     .scope()
//!     .use_toast()?
//!     .show_toast(ToastOptions::success("Saved").on_close(Message::SaveAcknowledged));
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use config::ProviderConfig;
pub use error::{Error, Result};
pub use toast::{Position, ToastId, ToastOptions, ToastRecord, ToastType};
pub use ui::provider::{Message as ToastMessage, Scope, ToastProvider, Toaster};
pub use ui::toast::Toast;
