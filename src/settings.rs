//! Session settings: user-configurable preferences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::Mode;

/// Visual theme for the presentation layer.
///
/// Carried here so the UI has one place to read it from; it has no
/// effect on play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    /// Light background, dark marks.
    #[default]
    Light,
    /// Dark background, light marks.
    Dark,
}

impl Theme {
    /// Display label for theme selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Toggles between `Light` and `Dark`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// How long the computer "thinks" before its reply lands.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

/// User-configurable settings for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Play mode for new games.
    pub mode: Mode,
    /// Visual theme.
    pub theme: Theme,
    /// Delay before a scheduled computer reply fires.
    pub reply_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            theme: Theme::default(),
            reply_delay: DEFAULT_REPLY_DELAY,
        }
    }
}

impl SessionSettings {
    /// Creates settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }
}
