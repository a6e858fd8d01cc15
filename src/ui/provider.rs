// SPDX-License-Identifier: MPL-2.0
//! Toast provider and the scoped hook used by descendant components.
//!
//! A `ToastProvider` owns one registry and the popups rendering its records.
//! It is created and dropped with the part of the UI that owns it; dropping
//! it discards every pending record and timer without emitting callbacks.
//!
//! Descendant components never see the provider directly. They receive a
//! [`Scope`] (handed down with [`Scope::reborrow`]) and call
//! [`Scope::use_toast`] to obtain a [`Toaster`]. A scope created with
//! [`Scope::detached`] has no provider, and using the hook there fails with
//! [`Error::NoProvider`].
//!
//! # Wiring
//!
//! ```ignore
//! // update
//! Message::Toast(message) => {
//!     let closed = self.toasts.update(message);
//!     Task::batch(closed.into_iter().map(Task::done))
//! }
//!
//! // view
//! self.toasts.view(content, Message::Toast)
//!
//! // subscription
//! self.toasts.subscription().map(Message::Toast)
//! ```

use super::popup::Popup;
use super::toast::anchor;
use crate::config::{ProviderConfig, ANIMATION_TICK_MS, IDLE_TICK_MS};
use crate::error::{Error, Result};
use crate::toast::registry::Registry;
use crate::toast::{Position, TimerEvent, ToastId, ToastOptions, ToastRecord};
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Stack};
use iced::{time, Element, Length, Subscription};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Messages driving the provider.
#[derive(Debug, Clone)]
pub enum Message {
    /// Clock reading used to mount popups and advance their timers.
    Tick(Instant),
    /// The close button of a toast was pressed.
    Dismiss(ToastId),
}

/// Owns the toasts of one UI scope.
///
/// `M` is the application message carried by each toast's `on_close`.
#[derive(Debug)]
pub struct ToastProvider<M> {
    config: ProviderConfig,
    registry: Registry<M>,
    popups: HashMap<ToastId, Popup>,
    /// Last clock reading, used for rendering.
    now: Option<Instant>,
}

impl<M> Default for ToastProvider<M> {
    fn default() -> Self {
        Self::new(ProviderConfig::default())
    }
}

impl<M> ToastProvider<M> {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            registry: Registry::new(),
            popups: HashMap::new(),
            now: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Replaces the defaults used for toasts created from now on.
    pub fn set_config(&mut self, config: ProviderConfig) {
        self.config = config;
    }

    /// Scope for descendant components; their hook resolves to this provider.
    pub fn scope(&mut self) -> Scope<'_, M> {
        Scope {
            provider: Some(self),
        }
    }

    /// Adds a toast and returns its id. Never fails; missing fields take defaults.
    pub fn show_toast(&mut self, options: ToastOptions<M>) -> ToastId {
        let id = self.registry.add(options, &self.config);
        if let Some(record) = self.registry.get(id) {
            tracing::debug!(
                id = %id,
                kind = %record.kind(),
                position = %record.position(),
                duration_ms = record.duration().as_millis() as u64,
                "toast added"
            );
            self.popups.insert(id, Popup::new(record));
        }
        id
    }

    /// Removes a toast immediately, skipping its exit animation.
    ///
    /// Returns the toast's `on_close` message. Unknown ids are a no-op.
    pub fn remove(&mut self, id: ToastId) -> Option<M> {
        self.popups.remove(&id);
        let record = self.registry.remove(id)?;
        tracing::debug!(id = %id, "toast removed");
        record.into_on_close()
    }

    /// Starts the exit animation of a toast. Returns `false` if it is unknown
    /// or already leaving.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        let dismissed = self
            .popups
            .get_mut(&id)
            .is_some_and(|popup| popup.dismiss(now));
        if dismissed {
            tracing::debug!(id = %id, "toast dismissed");
        }
        dismissed
    }

    /// Mounts new popups and advances every timer to `now`.
    ///
    /// Returns the `on_close` messages of the toasts that settled.
    pub fn tick(&mut self, now: Instant) -> Vec<M> {
        self.now = Some(now);

        let mut settled = Vec::new();
        for record in self.registry.records() {
            let Some(popup) = self.popups.get_mut(&record.id()) else {
                continue;
            };
            if popup.mount(now) {
                tracing::trace!(id = %record.id(), "toast mounted");
            }
            match popup.poll(now) {
                Some(TimerEvent::Expired) => {
                    tracing::trace!(id = %record.id(), "toast expired");
                }
                Some(TimerEvent::Settled) => settled.push(record.id()),
                None => {}
            }
        }

        settled
            .into_iter()
            .filter_map(|id| self.remove(id))
            .collect()
    }

    /// Handles a provider message using the current time for user actions.
    pub fn update(&mut self, message: Message) -> Vec<M> {
        self.update_at(message, Instant::now())
    }

    /// Handles a provider message. `now` is used for messages without a clock
    /// reading of their own.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Vec<M> {
        match message {
            Message::Tick(instant) => self.tick(instant),
            Message::Dismiss(id) => {
                self.dismiss(id, now);
                Vec::new()
            }
        }
    }

    /// Discards every toast and timer without emitting `on_close`.
    pub fn clear(&mut self) {
        if !self.registry.is_empty() {
            tracing::debug!(count = self.registry.len(), "toasts cleared");
        }
        self.registry.clear();
        self.popups.clear();
    }

    /// Live toasts in insertion order.
    pub fn toasts(&self) -> impl Iterator<Item = &ToastRecord<M>> {
        self.registry.records()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord<M>> {
        self.registry.get(id)
    }

    #[must_use]
    pub fn popup(&self, id: ToastId) -> Option<&Popup> {
        self.popups.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Ticks at frame rate while something slides, slower while toasts wait,
    /// and not at all when there are none.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.registry.is_empty() {
            return Subscription::none();
        }
        time::every(self.tick_interval()).map(Message::Tick)
    }

    fn tick_interval(&self) -> Duration {
        let now = self.now.unwrap_or_else(Instant::now);
        if self.popups.values().any(|popup| popup.is_animating(now)) {
            Duration::from_millis(ANIMATION_TICK_MS)
        } else {
            Duration::from_millis(IDLE_TICK_MS)
        }
    }

    /// Renders all toasts, grouped by corner, as a full-size layer.
    pub fn overlay(&self) -> Element<'_, Message> {
        let corners = Position::ALL.iter().filter_map(|&position| {
            let cards: Vec<Element<'_, Message>> = self
                .registry
                .records()
                .filter(|record| record.position() == position)
                .filter_map(|record| {
                    self.popups
                        .get(&record.id())
                        .map(|popup| popup.view(record, self.now))
                })
                .collect();

            if cards.is_empty() {
                None
            } else {
                let column = Column::with_children(cards)
                    .spacing(spacing::XS)
                    .align_x(position.horizontal());
                Some(anchor(column, position))
            }
        });

        Stack::with_children(corners)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Stacks the toast overlay above `content`.
    pub fn view<'a, A: 'a>(
        &'a self,
        content: impl Into<Element<'a, A>>,
        on_message: impl Fn(Message) -> A + 'a,
    ) -> Element<'a, A> {
        Stack::new()
            .push(content)
            .push(self.overlay().map(on_message))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// The part of the component tree served by one provider, or by none.
pub struct Scope<'a, M> {
    provider: Option<&'a mut ToastProvider<M>>,
}

impl<'a, M> Scope<'a, M> {
    /// A scope outside of any provider.
    #[must_use]
    pub fn detached() -> Self {
        Self { provider: None }
    }

    #[must_use]
    pub fn is_provided(&self) -> bool {
        self.provider.is_some()
    }

    /// Shorter-lived copy of this scope for a child component.
    pub fn reborrow(&mut self) -> Scope<'_, M> {
        Scope {
            provider: self.provider.as_deref_mut(),
        }
    }

    /// Returns the trigger bound to the enclosing provider.
    ///
    /// # Errors
    ///
    /// [`Error::NoProvider`] when the scope has no provider.
    pub fn use_toast(&mut self) -> Result<Toaster<'_, M>> {
        match self.provider.as_deref_mut() {
            Some(provider) => Ok(Toaster { provider }),
            None => {
                tracing::error!("use_toast called outside of a ToastProvider");
                Err(Error::NoProvider)
            }
        }
    }
}

/// Trigger returned by [`Scope::use_toast`].
pub struct Toaster<'a, M> {
    provider: &'a mut ToastProvider<M>,
}

impl<M> Toaster<'_, M> {
    pub fn show_toast(&mut self, options: ToastOptions<M>) -> ToastId {
        self.provider.show_toast(options)
    }
}
