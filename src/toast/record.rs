// SPDX-License-Identifier: MPL-2.0
//! Toast options as requested by callers and records as stored by the registry.

use super::kind::ToastType;
use super::position::Position;
use crate::config::{ProviderConfig, PLACEHOLDER_MESSAGE};
use std::fmt;
use std::time::Duration;

/// Identity of a toast within one provider.
///
/// Ids come from a per-registry counter, so two toasts created within the
/// same clock tick still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A partial toast description. Every field is optional; omitted fields
/// are resolved against the provider configuration when the toast is added.
///
/// `M` is the application message emitted when the toast is removed.
#[derive(Debug, Clone)]
pub struct ToastOptions<M> {
    message: Option<String>,
    kind: Option<ToastType>,
    position: Option<Position>,
    duration: Option<Duration>,
    on_close: Option<M>,
}

impl<M> Default for ToastOptions<M> {
    fn default() -> Self {
        Self {
            message: None,
            kind: None,
            position: None,
            duration: None,
            on_close: None,
        }
    }
}

impl<M> ToastOptions<M> {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastType::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastType::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message).kind(ToastType::Info)
    }

    #[must_use]
    pub fn kind(mut self, kind: ToastType) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Overrides the provider's default duration. A zero duration is ignored.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn duration_ms(self, millis: u64) -> Self {
        self.duration(Duration::from_millis(millis))
    }

    /// Message emitted once the toast leaves the registry.
    #[must_use]
    pub fn on_close(mut self, message: M) -> Self {
        self.on_close = Some(message);
        self
    }

    /// Fills every missing or unusable field from `config`.
    pub(crate) fn resolve(self, id: ToastId, config: &ProviderConfig) -> ToastRecord<M> {
        let message = self
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_MESSAGE.to_string());

        ToastRecord {
            id,
            message,
            kind: self.kind.unwrap_or_default(),
            position: self.position.unwrap_or(config.default_position),
            duration: self
                .duration
                .filter(|duration| !duration.is_zero())
                .unwrap_or_else(|| config.default_duration()),
            on_close: self.on_close,
        }
    }
}

/// One active toast. Corner and duration are fixed at creation.
#[derive(Debug, Clone)]
pub struct ToastRecord<M> {
    id: ToastId,
    message: String,
    kind: ToastType,
    position: Position,
    duration: Duration,
    on_close: Option<M>,
}

impl<M> ToastRecord<M> {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ToastType {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn on_close(&self) -> Option<&M> {
        self.on_close.as_ref()
    }

    pub(crate) fn into_on_close(self) -> Option<M> {
        self.on_close
    }
}
