// SPDX-License-Identifier: MPL-2.0
//! Provider-level configuration and its persistence to a `toasts.toml` file.
//!
//! A `ToastProvider` resolves every omitted toast option against this
//! configuration at creation time, so later changes only affect toasts
//! created afterwards.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, ProviderConfig};
//! use iced_toast::Position;
//! use std::time::Duration;
//!
//! // Load the user's configuration for an application, or use defaults
//! let config = config::load("MyApp").unwrap_or_default();
//!
//! // Override the corner and duration
//! let config = config
//!     .with_position(Position::BottomRight)
//!     .with_duration(Duration::from_millis(2500));
//!
//! let temp_file = std::env::temp_dir().join("toasts.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded, config);
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::toast::Position;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toasts.toml";

/// Defaults applied to toasts that do not specify their own corner or duration.
///
/// Each field is read on its own: an unusable value falls back to its default
/// without discarding the other field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    #[serde(deserialize_with = "lenient_position")]
    pub default_position: Position,
    #[serde(deserialize_with = "lenient_duration_ms")]
    pub default_duration_ms: u64,
}

fn lenient_position<'de, D>(deserializer: D) -> std::result::Result<Position, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    Ok(match value.as_str() {
        Some(name) => Position::parse_lenient(name),
        None => {
            tracing::warn!(%value, "default_position is not a string, using default");
            Position::default()
        }
    })
}

fn lenient_duration_ms<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    match value.as_integer().and_then(|ms| u64::try_from(ms).ok()) {
        Some(ms) => Ok(ms),
        None => {
            tracing::warn!(%value, "default_duration_ms is not a positive integer, using default");
            Ok(DEFAULT_DURATION_MS)
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_position: Position::default(),
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl ProviderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.default_position = position;
        self
    }

    /// Sets the default duration. Sub-millisecond durations are stored as zero
    /// and therefore fall back to [`DEFAULT_DURATION_MS`].
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.default_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Returns the default duration, treating zero as unset.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        match self.default_duration_ms {
            0 => Duration::from_millis(DEFAULT_DURATION_MS),
            ms => Duration::from_millis(ms),
        }
    }
}

fn get_default_config_path(app_name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(app_name);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads `<config dir>/<app_name>/toasts.toml`, or defaults when absent.
pub fn load(app_name: &str) -> Result<ProviderConfig> {
    if let Some(path) = get_default_config_path(app_name) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(ProviderConfig::default())
}

pub fn load_from_path(path: &Path) -> Result<ProviderConfig> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid toast config, using defaults");
            Ok(ProviderConfig::default())
        }
    }
}

pub fn save_to_path(config: &ProviderConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
