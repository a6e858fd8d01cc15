// SPDX-License-Identifier: MPL-2.0
//! Severity of a toast, which selects its icon and accent color.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of toast severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastType {
    /// Operation completed successfully (green).
    Success,
    /// Operation failed (red).
    Error,
    /// Something needs attention but nothing failed (yellow).
    Warning,
    /// Neutral information (blue).
    #[default]
    Info,
}

impl ToastType {
    pub const ALL: [ToastType; 4] = [
        ToastType::Success,
        ToastType::Error,
        ToastType::Warning,
        ToastType::Info,
    ];

    /// Returns the background color of the icon badge.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastType::Success => palette::SUCCESS_600,
            ToastType::Error => palette::ERROR_600,
            ToastType::Warning => palette::WARNING_600,
            ToastType::Info => palette::INFO_500,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToastType::Success => "success",
            ToastType::Error => "error",
            ToastType::Warning => "warning",
            ToastType::Info => "info",
        }
    }

}

impl fmt::Display for ToastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names none of the four toast types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToastType(pub String);

impl fmt::Display for UnknownToastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown toast type: {}", self.0)
    }
}

impl std::error::Error for UnknownToastType {}

impl FromStr for ToastType {
    type Err = UnknownToastType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(ToastType::Success),
            "error" => Ok(ToastType::Error),
            "warning" => Ok(ToastType::Warning),
            "info" => Ok(ToastType::Info),
            _ => Err(UnknownToastType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_type_is_info() {
        assert_eq!(ToastType::default(), ToastType::Info);
    }

    #[test]
    fn type_colors_are_distinct() {
        for (i, a) in ToastType::ALL.iter().enumerate() {
            for b in &ToastType::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a} and {b} share a color");
            }
        }
    }

    #[test]
    fn success_is_green_and_error_is_red() {
        let success = ToastType::Success.color();
        assert!(success.g > success.r && success.g > success.b);

        let error = ToastType::Error.color();
        assert!(error.r > error.g && error.r > error.b);
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!("Warning".parse::<ToastType>(), Ok(ToastType::Warning));
        assert_eq!(" error ".parse::<ToastType>(), Ok(ToastType::Error));
    }

    #[test]
    fn unknown_type_name_is_rejected() {
        assert_eq!(
            "fatal".parse::<ToastType>(),
            Err(UnknownToastType("fatal".to_string()))
        );
    }

    #[test]
    fn display_matches_parse() {
        for kind in ToastType::ALL {
            assert_eq!(kind.to_string().parse::<ToastType>(), Ok(kind));
        }
    }
}
