// SPDX-License-Identifier: MPL-2.0
//! Demo control panel: a descendant component that raises toasts through
//! the scope it receives from the application.

use super::Message as AppMessage;
use crate::error::Result;
use crate::toast::{Position, ToastOptions, ToastType};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::provider::Scope;
use iced::widget::{button, text, Column, Row};
use iced::Element;

#[derive(Debug, Clone)]
pub enum Message {
    /// Toast of the given type at the default corner.
    Show(ToastType),
    /// Info toast at an explicit corner.
    ShowAt(Position),
    /// Two toasts in the same update.
    Burst,
    /// Toast without any option set.
    Untitled,
}

#[derive(Debug, Default)]
pub struct State {
    shown: usize,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shown(&self) -> usize {
        self.shown
    }
}

/// Handles a panel message by showing toasts through `scope`.
///
/// # Errors
///
/// Fails with [`crate::Error::NoProvider`] when `scope` has no provider.
pub fn update(state: &mut State, message: Message, mut scope: Scope<'_, AppMessage>) -> Result<()> {
    let mut toaster = scope.use_toast()?;

    let mut notify = |options: ToastOptions<AppMessage>, label: String| {
        state.shown += 1;
        toaster.show_toast(options.on_close(AppMessage::ToastClosed(label)));
    };

    match message {
        Message::Show(kind) => {
            let label = sample_message(kind).to_string();
            notify(ToastOptions::new(label.clone()).kind(kind), label);
        }
        Message::ShowAt(position) => {
            let label = format!("Hello from {position}");
            notify(ToastOptions::info(label.clone()).position(position), label);
        }
        Message::Burst => {
            notify(ToastOptions::success("First of two"), "First of two".into());
            notify(ToastOptions::warning("Second of two"), "Second of two".into());
        }
        Message::Untitled => {
            notify(ToastOptions::default(), "(placeholder)".into());
        }
    }
    Ok(())
}

pub fn view(state: &State) -> Element<'_, Message> {
    let kinds = ToastType::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &kind| {
            row.push(button(text(kind.as_str())).on_press(Message::Show(kind)))
        });

    let corners = Position::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, &position| {
            row.push(button(text(position.as_str())).on_press(Message::ShowAt(position)))
        });

    let extras = Row::new()
        .spacing(spacing::XS)
        .push(button(text("burst")).on_press(Message::Burst))
        .push(button(text("no options")).on_press(Message::Untitled));

    Column::new()
        .spacing(spacing::SM)
        .push(text("Types").size(typography::CAPTION))
        .push(kinds)
        .push(text("Corners").size(typography::CAPTION))
        .push(corners)
        .push(extras)
        .push(text(format!("{} toasts shown", state.shown)).size(typography::CAPTION))
        .into()
}

fn sample_message(kind: ToastType) -> &'static str {
    match kind {
        ToastType::Success => "Saved",
        ToastType::Error => "Oops",
        ToastType::Warning => "Disk almost full",
        ToastType::Info => "New version available",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::provider::ToastProvider;

    #[test]
    fn show_adds_toast_with_sample_text() {
        let mut provider = ToastProvider::<AppMessage>::default();
        let mut state = State::new();

        update(&mut state, Message::Show(ToastType::Error), provider.scope())
            .expect("scope has a provider");

        let record = provider.toasts().next().expect("one toast");
        assert_eq!(record.message(), "Oops");
        assert_eq!(record.kind(), ToastType::Error);
        assert!(matches!(
            record.on_close(),
            Some(AppMessage::ToastClosed(label)) if label == "Oops"
        ));
        assert_eq!(state.shown(), 1);
    }

    #[test]
    fn burst_adds_two_toasts_in_order() {
        let mut provider = ToastProvider::<AppMessage>::default();
        let mut state = State::new();

        update(&mut state, Message::Burst, provider.scope()).expect("scope has a provider");

        let messages: Vec<_> = provider.toasts().map(|r| r.message().to_string()).collect();
        assert_eq!(messages, vec!["First of two", "Second of two"]);
    }

    #[test]
    fn detached_scope_reports_missing_provider() {
        let mut state = State::new();
        let result = update(&mut state, Message::Untitled, Scope::detached());
        assert_eq!(result, Err(Error::NoProvider));
        assert_eq!(state.shown(), 0);
    }
}
