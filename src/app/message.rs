// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use super::panel;
use crate::toast::Position;
use crate::ui::provider;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toast(provider::Message),
    Panel(panel::Message),
    /// A toast left the screen; carries its message text.
    ToastClosed(String),
    /// Drop every toast at once, without close notifications.
    ClearAll,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Corner used when a toast does not choose one.
    pub position: Option<Position>,
    /// Duration in milliseconds used when a toast does not choose one.
    pub duration_ms: Option<u64>,
    /// Explicit `toasts.toml` to load instead of the user config directory.
    pub config_path: Option<PathBuf>,
    pub theme: ThemeMode,
}
