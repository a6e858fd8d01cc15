// SPDX-License-Identifier: MPL-2.0
//! Presentational toast widget.
//!
//! `Toast` renders a card with a colored icon badge, the message and a close
//! button. It holds no timer and knows nothing about registries, so it can be
//! used on its own; the provider's popups build on it.

use crate::toast::{Position, ToastType};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, container, svg, text, Container, Row, Svg, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::borrow::Cow;

/// Builder for a single toast card.
pub struct Toast<'a, Message> {
    message: Cow<'a, str>,
    icon: Option<svg::Handle>,
    background: Option<Color>,
    position: Position,
    on_close: Option<Message>,
}

impl<'a, Message: Clone + 'a> Toast<'a, Message> {
    pub fn new(message: impl Into<Cow<'a, str>>) -> Self {
        Self {
            message: message.into(),
            icon: None,
            background: None,
            position: Position::default(),
            on_close: None,
        }
    }

    /// Icon shown in the badge. Defaults to the info glyph.
    #[must_use]
    pub fn icon(mut self, icon: svg::Handle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Badge background. Defaults to the info color.
    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Uses the icon and badge color of `kind`.
    #[must_use]
    pub fn kind(self, kind: ToastType) -> Self {
        self.icon(icons::for_kind(kind)).background(kind.color())
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Message published by the close button. Without it the button is disabled.
    #[must_use]
    pub fn on_close(mut self, message: Message) -> Self {
        self.on_close = Some(message);
        self
    }

    /// Renders the bare card, without anchoring it to a corner.
    pub fn card(self) -> Element<'a, Message> {
        let badge_color = self
            .background
            .unwrap_or_else(|| ToastType::Info.color());
        let icon = self.icon.unwrap_or_else(icons::info);

        // Severity badge
        let badge = Container::new(icons::tinted(icon, sizing::ICON_MD, palette::WHITE))
            .width(Length::Fixed(sizing::ICON_BADGE))
            .height(Length::Fixed(sizing::ICON_BADGE))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| badge_style(badge_color));

        let message_widget =
            Text::new(self.message)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        let close_icon = Svg::new(icons::cross())
            .width(Length::Fixed(sizing::ICON_MD))
            .height(Length::Fixed(sizing::ICON_MD))
            .style(|theme: &Theme, _status| svg::Style {
                color: Some(theme.palette().text),
            });
        let close_button = button(close_icon)
            .on_press_maybe(self.on_close)
            .padding(spacing::XXS)
            .style(close_button_style);

        // Layout: [badge] [message] [close]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(badge)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(Container::new(close_button).padding([0.0, spacing::XS]));

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .clip(true)
            .style(card_style)
            .into()
    }

    /// Renders the card pinned to its corner of the available area.
    pub fn anchored(self) -> Element<'a, Message> {
        let position = self.position;
        anchor(self.card(), position)
    }
}

impl<'a, Message: Clone + 'a> From<Toast<'a, Message>> for Element<'a, Message> {
    fn from(toast: Toast<'a, Message>) -> Self {
        toast.anchored()
    }
}

/// Fills the available area and pins `content` to the `position` corner.
pub fn anchor<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    position: Position,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(position.horizontal())
        .align_y(position.vertical())
        .padding(spacing::MD)
        .into()
}

/// Style function for the toast card.
fn card_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;

    container::Style {
        background: Some(iced::Background::Color(base.color)),
        border: iced::Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(base.text),
        ..Default::default()
    }
}

/// Style function for the icon badge.
fn badge_style(color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(color)),
        border: iced::Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Style function for the close button.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover = |alpha: f32| button::Style {
        background: Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        })),
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
