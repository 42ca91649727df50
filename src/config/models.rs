use serde::Deserialize;
use std::time::Duration;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "crate::config::defaults::default_card_spacing")]
    pub card_spacing: f32,
    #[serde(default = "crate::config::defaults::default_logo_card_width")]
    pub logo_card_width: f32,
    #[serde(default = "crate::config::defaults::default_testimonial_card_width")]
    pub testimonial_card_width: f32,
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_logo_speed")]
    pub logo_speed: f32,
    #[serde(default = "crate::config::defaults::default_testimonial_speed")]
    pub testimonial_speed: f32,
    #[serde(default = "crate::config::defaults::default_max_frame_delta_ms")]
    pub max_frame_delta_ms: u64,
    #[serde(default = "crate::config::defaults::default_resize_debounce_ms")]
    pub resize_debounce_ms: u64,
    #[serde(default = "crate::config::defaults::default_show_logos")]
    pub show_logos: bool,
    #[serde(default = "crate::config::defaults::default_show_testimonials")]
    pub show_testimonials: bool,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default = "crate::config::defaults::default_key_toggle_theme")]
    pub key_toggle_theme: String,
    #[serde(default = "crate::config::defaults::default_key_safe_quit")]
    pub key_safe_quit: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_logos")]
    pub key_toggle_logos: String,
    #[serde(default = "crate::config::defaults::default_key_toggle_testimonials")]
    pub key_toggle_testimonials: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            card_spacing: crate::config::defaults::default_card_spacing(),
            logo_card_width: crate::config::defaults::default_logo_card_width(),
            testimonial_card_width: crate::config::defaults::default_testimonial_card_width(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            logo_speed: crate::config::defaults::default_logo_speed(),
            testimonial_speed: crate::config::defaults::default_testimonial_speed(),
            max_frame_delta_ms: crate::config::defaults::default_max_frame_delta_ms(),
            resize_debounce_ms: crate::config::defaults::default_resize_debounce_ms(),
            show_logos: crate::config::defaults::default_show_logos(),
            show_testimonials: crate::config::defaults::default_show_testimonials(),
            log_level: crate::config::defaults::default_log_level(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
            key_toggle_logos: crate::config::defaults::default_key_toggle_logos(),
            key_toggle_testimonials: crate::config::defaults::default_key_toggle_testimonials(),
        }
    }
}

impl AppConfig {
    pub fn max_frame_delta(&self) -> Duration {
        Duration::from_millis(self.max_frame_delta_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Default, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Default, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
