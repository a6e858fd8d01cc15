// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that draws its content shifted horizontally.
//!
//! Layout is left untouched, so siblings do not move while the content slides
//! in or out. Cursor positions are shifted by the same amount before reaching
//! the content, which keeps buttons clickable mid-animation. Content shifted
//! past the window edge is clipped by the window itself.

use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Rectangle, Size, Vector};

/// Draws `content` translated by a horizontal offset.
pub struct Slide<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    offset: Vector,
}

impl<'a, Message, Theme, Renderer> Slide<'a, Message, Theme, Renderer> {
    /// Creates a new `Slide` wrapping the given content, not yet shifted.
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            offset: Vector::ZERO,
        }
    }

    /// Sets the horizontal shift in logical pixels. Positive moves right.
    #[must_use]
    pub fn offset_x(mut self, x: f32) -> Self {
        self.offset = Vector::new(x, 0.0);
        self
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Slide<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let cursor = shift_cursor(cursor, self.offset);
        let viewport = *viewport - self.offset;

        renderer.with_translation(self.offset, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                &viewport,
            );
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            shift_cursor(cursor, self.offset),
            renderer,
            clipboard,
            shell,
            &(*viewport - self.offset),
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            shift_cursor(cursor, self.offset),
            &(*viewport - self.offset),
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation + self.offset,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<Slide<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(slide: Slide<'a, Message, Theme, Renderer>) -> Self {
        Self::new(slide)
    }
}

/// Maps a window cursor into the content's untranslated coordinates.
fn shift_cursor(cursor: mouse::Cursor, offset: Vector) -> mouse::Cursor {
    match cursor.position() {
        Some(position) => mouse::Cursor::Available(position - offset),
        None => mouse::Cursor::Unavailable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn cursor_is_shifted_against_offset() {
        let cursor = mouse::Cursor::Available(Point::new(100.0, 40.0));
        let shifted = shift_cursor(cursor, Vector::new(30.0, 0.0));
        assert_eq!(shifted.position(), Some(Point::new(70.0, 40.0)));
    }

    #[test]
    fn negative_offset_moves_cursor_right() {
        let cursor = mouse::Cursor::Available(Point::new(10.0, 5.0));
        let shifted = shift_cursor(cursor, Vector::new(-25.0, 0.0));
        assert_eq!(shifted.position(), Some(Point::new(35.0, 5.0)));
    }

    #[test]
    fn unavailable_cursor_stays_unavailable() {
        let shifted = shift_cursor(mouse::Cursor::Unavailable, Vector::new(5.0, 0.0));
        assert_eq!(shifted.position(), None);
    }
}
