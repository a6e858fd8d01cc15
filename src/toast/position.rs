// SPDX-License-Identifier: MPL-2.0
//! Screen corner a toast is anchored to.

use iced::alignment;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Position::TopLeft | Position::TopRight)
    }

    /// Right-anchored toasts slide in from the right edge; all others from the left.
    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Position::TopRight | Position::BottomRight)
    }

    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        if self.is_right() {
            alignment::Horizontal::Right
        } else {
            alignment::Horizontal::Left
        }
    }

    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        if self.is_top() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        }
    }

    /// Parses a corner name, falling back to the default corner when the
    /// name is unknown.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: UnknownPosition| {
            tracing::warn!(error = %err, fallback = %Position::default(), "unknown toast position");
            Position::default()
        })
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the four corners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl fmt::Display for UnknownPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toast position: {}", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "top-left" => Ok(Position::TopLeft),
            "top-right" => Ok(Position::TopRight),
            "bottom-left" => Ok(Position::BottomLeft),
            "bottom-right" => Ok(Position::BottomRight),
            _ => Err(UnknownPosition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_top_left() {
        assert_eq!(Position::default(), Position::TopLeft);
    }

    #[test]
    fn only_right_corners_are_right_anchored() {
        assert!(Position::TopRight.is_right());
        assert!(Position::BottomRight.is_right());
        assert!(!Position::TopLeft.is_right());
        assert!(!Position::BottomLeft.is_right());
    }

    #[test]
    fn alignment_follows_corner() {
        assert_eq!(
            Position::BottomRight.horizontal(),
            alignment::Horizontal::Right
        );
        assert_eq!(Position::BottomRight.vertical(), alignment::Vertical::Bottom);
        assert_eq!(Position::TopLeft.horizontal(), alignment::Horizontal::Left);
        assert_eq!(Position::TopLeft.vertical(), alignment::Vertical::Top);
    }

    #[test]
    fn parse_accepts_kebab_and_snake_case() {
        assert_eq!("top-right".parse(), Ok(Position::TopRight));
        assert_eq!("BOTTOM_LEFT".parse(), Ok(Position::BottomLeft));
        assert!("middle".parse::<Position>().is_err());
    }

    #[test]
    fn lenient_parse_falls_back_to_top_left() {
        assert_eq!(Position::parse_lenient("middle"), Position::TopLeft);
        assert_eq!(Position::parse_lenient("bottom_right"), Position::BottomRight);
    }

    #[test]
    fn display_matches_parse() {
        for position in Position::ALL {
            assert_eq!(position.to_string().parse(), Ok(position));
        }
    }
}
