// SPDX-License-Identifier: MPL-2.0
//! Demo application showing the toast provider in a real Iced window.
//!
//! The `App` owns one `ToastProvider`, hands its scope down to the control
//! panel, and forwards close notifications into a small history list.

mod message;
pub mod panel;

pub use message::{Flags, Message};

use crate::config::{self, ProviderConfig};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::provider::ToastProvider;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

const APP_NAME: &str = "IcedToast";

/// Number of closed toasts remembered in the history list.
const HISTORY_LEN: usize = 5;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;

/// Root Iced application state for the demo.
pub struct App {
    toasts: ToastProvider<Message>,
    panel: panel::State,
    theme_mode: ThemeMode,
    /// Most recently closed toasts, newest first.
    closed: VecDeque<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            toasts: ToastProvider::default(),
            panel: panel::State::new(),
            theme_mode: ThemeMode::System,
            closed: VecDeque::new(),
        }
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves provider defaults: config file first, then command-line overrides.
pub fn resolve_config(flags: &Flags) -> ProviderConfig {
    let loaded = match &flags.config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(APP_NAME),
    };
    let mut resolved = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not load toast config, using defaults");
        ProviderConfig::default()
    });

    if let Some(position) = flags.position {
        resolved = resolved.with_position(position);
    }
    if let Some(duration_ms) = flags.duration_ms {
        resolved = resolved.with_duration(Duration::from_millis(duration_ms));
    }
    resolved
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = resolve_config(&flags);
        tracing::info!(
            position = %config.default_position,
            duration_ms = config.default_duration_ms,
            "starting toast demo"
        );

        let app = Self {
            toasts: ToastProvider::new(config),
            theme_mode: flags.theme,
            ..Self::default()
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.toasts.len() {
            0 => "Iced Toast".to_string(),
            n => format!("Iced Toast ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.toasts.subscription().map(Message::Toast)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => {
                let closed = self.toasts.update(toast_message);
                Task::batch(closed.into_iter().map(Task::done))
            }
            Message::Panel(panel_message) => {
                if let Err(err) = panel::update(&mut self.panel, panel_message, self.toasts.scope())
                {
                    tracing::error!(error = %err, "panel could not show a toast");
                }
                Task::none()
            }
            Message::ToastClosed(label) => {
                tracing::info!(label = %label, "toast closed");
                self.closed.push_front(label);
                self.closed.truncate(HISTORY_LEN);
                Task::none()
            }
            Message::ClearAll => {
                self.toasts.clear();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let history = self.closed.iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, label| column.push(text(label.as_str()).size(typography::CAPTION)),
        );

        let content = Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(text("Toast demo").size(typography::TITLE_MD))
            .push(panel::view(&self.panel).map(Message::Panel))
            .push(button(text("clear all")).on_press(Message::ClearAll))
            .push(text("Recently closed").size(typography::CAPTION))
            .push(history);

        let centered = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        self.toasts.view(centered, Message::Toast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::Position;
    use std::time::Instant;
    use tempfile::tempdir;

    #[test]
    fn flags_override_config_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("toasts.toml");
        let on_disk = ProviderConfig::default()
            .with_position(Position::BottomLeft)
            .with_duration(Duration::from_millis(2000));
        config::save_to_path(&on_disk, &path).expect("failed to save config");

        let flags = Flags {
            duration_ms: Some(750),
            config_path: Some(path),
            ..Flags::default()
        };
        let resolved = resolve_config(&flags);

        assert_eq!(resolved.default_position, Position::BottomLeft);
        assert_eq!(resolved.default_duration(), Duration::from_millis(750));
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_path: Some(temp_dir.path().join("absent.toml")),
            position: Some(Position::TopRight),
            ..Flags::default()
        };

        let resolved = resolve_config(&flags);
        assert_eq!(resolved.default_position, Position::TopRight);
        assert_eq!(resolved.default_duration_ms, config::DEFAULT_DURATION_MS);
    }

    #[test]
    fn panel_message_shows_toast_and_updates_title() {
        let mut app = App::default();
        assert_eq!(app.title(), "Iced Toast");

        let _ = app.update(Message::Panel(panel::Message::Show(
            crate::toast::ToastType::Success,
        )));

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.title(), "Iced Toast (1)");
    }

    #[test]
    fn closed_history_is_bounded_and_newest_first() {
        let mut app = App::default();
        for i in 0..(HISTORY_LEN + 2) {
            let _ = app.update(Message::ToastClosed(format!("toast-{i}")));
        }

        assert_eq!(app.closed.len(), HISTORY_LEN);
        assert_eq!(
            app.closed.front().map(String::as_str),
            Some(format!("toast-{}", HISTORY_LEN + 1).as_str())
        );
    }

    #[test]
    fn clear_all_discards_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::Panel(panel::Message::Burst));
        let _ = app.update(Message::Toast(crate::ui::provider::Message::Tick(
            Instant::now(),
        )));

        let _ = app.update(Message::ClearAll);
        assert_eq!(app.toasts.len(), 0);
    }
}
