use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// Top-level table names recognised in a sectioned config file.
pub(super) const TABLE_KEYS: [&str; 5] = ["appearance", "window", "marquee", "logging", "keys"];

#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    marquee: MarqueeConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            card_spacing: tables.appearance.card_spacing,
            logo_card_width: tables.appearance.logo_card_width,
            testimonial_card_width: tables.appearance.testimonial_card_width,
            window_width: tables.window.window_width,
            window_height: tables.window.window_height,
            logo_speed: tables.marquee.logo_speed,
            testimonial_speed: tables.marquee.testimonial_speed,
            max_frame_delta_ms: tables.marquee.max_frame_delta_ms,
            resize_debounce_ms: tables.marquee.resize_debounce_ms,
            show_logos: tables.marquee.show_logos,
            show_testimonials: tables.marquee.show_testimonials,
            log_level: tables.logging.log_level,
            key_toggle_theme: tables.keys.key_toggle_theme,
            key_safe_quit: tables.keys.key_safe_quit,
            key_toggle_logos: tables.keys.key_toggle_logos,
            key_toggle_testimonials: tables.keys.key_toggle_testimonials,
        }
    }
}

impl From<&AppConfig> for ConfigTables {
    fn from(config: &AppConfig) -> Self {
        ConfigTables {
            appearance: AppearanceConfig {
                theme: config.theme,
                card_spacing: config.card_spacing,
                logo_card_width: config.logo_card_width,
                testimonial_card_width: config.testimonial_card_width,
            },
            window: WindowConfig {
                window_width: config.window_width,
                window_height: config.window_height,
            },
            marquee: MarqueeConfig {
                logo_speed: config.logo_speed,
                testimonial_speed: config.testimonial_speed,
                max_frame_delta_ms: config.max_frame_delta_ms,
                resize_debounce_ms: config.resize_debounce_ms,
                show_logos: config.show_logos,
                show_testimonials: config.show_testimonials,
            },
            logging: LoggingConfig {
                log_level: config.log_level,
            },
            keys: KeysConfig {
                key_toggle_theme: config.key_toggle_theme.clone(),
                key_safe_quit: config.key_safe_quit.clone(),
                key_toggle_logos: config.key_toggle_logos.clone(),
                key_toggle_testimonials: config.key_toggle_testimonials.clone(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_card_spacing")]
    card_spacing: f32,
    #[serde(default = "defaults::default_logo_card_width")]
    logo_card_width: f32,
    #[serde(default = "defaults::default_testimonial_card_width")]
    testimonial_card_width: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            card_spacing: defaults::default_card_spacing(),
            logo_card_width: defaults::default_logo_card_width(),
            testimonial_card_width: defaults::default_testimonial_card_width(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct MarqueeConfig {
    #[serde(default = "defaults::default_logo_speed")]
    logo_speed: f32,
    #[serde(default = "defaults::default_testimonial_speed")]
    testimonial_speed: f32,
    #[serde(default = "defaults::default_max_frame_delta_ms")]
    max_frame_delta_ms: u64,
    #[serde(default = "defaults::default_resize_debounce_ms")]
    resize_debounce_ms: u64,
    #[serde(default = "defaults::default_show_logos")]
    show_logos: bool,
    #[serde(default = "defaults::default_show_testimonials")]
    show_testimonials: bool,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        MarqueeConfig {
            logo_speed: defaults::default_logo_speed(),
            testimonial_speed: defaults::default_testimonial_speed(),
            max_frame_delta_ms: defaults::default_max_frame_delta_ms(),
            resize_debounce_ms: defaults::default_resize_debounce_ms(),
            show_logos: defaults::default_show_logos(),
            show_testimonials: defaults::default_show_testimonials(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_theme")]
    key_toggle_theme: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    key_safe_quit: String,
    #[serde(default = "defaults::default_key_toggle_logos")]
    key_toggle_logos: String,
    #[serde(default = "defaults::default_key_toggle_testimonials")]
    key_toggle_testimonials: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            key_toggle_theme: defaults::default_key_toggle_theme(),
            key_safe_quit: defaults::default_key_safe_quit(),
            key_toggle_logos: defaults::default_key_toggle_logos(),
            key_toggle_testimonials: defaults::default_key_toggle_testimonials(),
        }
    }
}
