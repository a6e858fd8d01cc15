// SPDX-License-Identifier: MPL-2.0
//! Presentation unit for one toast record.
//!
//! A `Popup` owns only its dismissal timer, whose phase doubles as the
//! visibility flag driving the slide animation. Everything it displays is
//! read from the `ToastRecord` at view time.

use super::provider::Message;
use super::toast::Toast;
use super::widgets::Slide;
use crate::config::ENTER_DURATION_MS;
use crate::toast::{DismissalTimer, Phase, Position, TimerEvent, ToastId, ToastRecord};
use crate::ui::design_tokens::{sizing, spacing};
use iced::Element;
use std::time::{Duration, Instant};

/// Horizontal distance that takes a card fully past its window edge.
pub const SLIDE_DISTANCE: f32 = sizing::TOAST_WIDTH + spacing::MD;

#[derive(Debug, Clone)]
pub struct Popup {
    id: ToastId,
    position: Position,
    timer: DismissalTimer,
    enter: Duration,
    /// Slide progress at the moment the exit began.
    exit_from: f32,
}

impl Popup {
    /// Creates an unmounted unit for `record`.
    #[must_use]
    pub fn new<M>(record: &ToastRecord<M>) -> Self {
        Self {
            id: record.id(),
            position: record.position(),
            timer: DismissalTimer::new(record.duration()),
            enter: Duration::from_millis(ENTER_DURATION_MS),
            exit_from: 1.0,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn timer(&self) -> &DismissalTimer {
        &self.timer
    }

    /// Shows the unit and starts its countdown. Returns `false` if already mounted.
    pub fn mount(&mut self, now: Instant) -> bool {
        self.timer.start(now)
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.timer.is_started()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.timer.is_visible()
    }

    /// Starts the exit animation right away (close button).
    pub fn dismiss(&mut self, now: Instant) -> bool {
        let reached = self.slide_progress(now);
        let dismissed = self.timer.dismiss(now);
        if dismissed {
            self.exit_from = reached;
        }
        dismissed
    }

    pub fn poll(&mut self, now: Instant) -> Option<TimerEvent> {
        let was_visible = self.timer.is_visible();
        let event = self.timer.poll(now);
        if was_visible && event.is_some() {
            // The exit started at the expiry deadline, `duration` after mount.
            self.exit_from = ratio(self.timer.duration(), self.enter);
        }
        event
    }

    /// Whether the unit needs frame-rate redraws at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.timer.phase() {
            Phase::Idle | Phase::Exiting { .. } => true,
            Phase::Visible { since } => now.saturating_duration_since(since) < self.enter,
            Phase::Settled => false,
        }
    }

    /// How far the card has slid into view, from 0 (off-screen) to 1 (in place).
    #[must_use]
    pub fn slide_progress(&self, now: Instant) -> f32 {
        match self.timer.phase() {
            Phase::Idle | Phase::Settled => 0.0,
            Phase::Visible { since } => ratio(now.saturating_duration_since(since), self.enter),
            Phase::Exiting { since } => {
                let left = 1.0
                    - ratio(
                        now.saturating_duration_since(since),
                        self.timer.settle_delay(),
                    );
                self.exit_from * left
            }
        }
    }

    /// Signed horizontal shift of the card: positive towards the right edge
    /// for right-anchored units, negative towards the left edge otherwise.
    #[must_use]
    pub fn slide_offset(&self, now: Instant) -> f32 {
        let eased = ease_out_cubic(self.slide_progress(now));
        let distance = (1.0 - eased) * SLIDE_DISTANCE;
        if self.position.is_right() {
            distance
        } else {
            -distance
        }
    }

    /// Renders `record` at its animation state for `now`.
    ///
    /// Without a clock reading the unit has not been mounted yet and is drawn
    /// off-screen.
    pub fn view<'a, M>(
        &self,
        record: &'a ToastRecord<M>,
        now: Option<Instant>,
    ) -> Element<'a, Message> {
        let offset = now.map_or_else(
            || self.slide_offset_unmounted(),
            |now| self.slide_offset(now),
        );

        let card = Toast::new(record.message())
            .kind(record.kind())
            .position(record.position())
            .on_close(Message::Dismiss(self.id))
            .card();

        Slide::new(card).offset_x(offset).into()
    }

    fn slide_offset_unmounted(&self) -> f32 {
        if self.position.is_right() {
            SLIDE_DISTANCE
        } else {
            -SLIDE_DISTANCE
        }
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
