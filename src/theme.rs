//! Mapping from the configured theme mode to iced's built-in palettes.

use crate::config::ThemeMode;
use iced::Theme;

pub fn iced_theme(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Night => Theme::TokyoNight,
        ThemeMode::Day => Theme::Light,
    }
}

pub fn toggle_label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Night => "Day Mode",
        ThemeMode::Day => "Night Mode",
    }
}
