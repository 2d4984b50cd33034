// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use iced::Theme;

/// Requested theme mode. `System` follows the desktop environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// Parses a CLI value. Unknown values yield `None` so the caller can
    /// fall back to the default.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "system" => Some(Self::System),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Resolves the mode to a concrete Iced theme, querying the desktop
    /// environment for `System`.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => Theme::Dark,
                _ => Theme::Light,
            },
        }
    }
}
