pub(crate) fn default_card_spacing() -> f32 {
    24.0
}

pub(crate) fn default_logo_card_width() -> f32 {
    180.0
}

pub(crate) fn default_testimonial_card_width() -> f32 {
    340.0
}

pub(crate) fn default_window_width() -> f32 {
    1100.0
}

pub(crate) fn default_window_height() -> f32 {
    640.0
}

pub(crate) fn default_logo_speed() -> f32 {
    40.0
}

pub(crate) fn default_testimonial_speed() -> f32 {
    25.0
}

pub(crate) fn default_max_frame_delta_ms() -> u64 {
    250
}

pub(crate) fn default_resize_debounce_ms() -> u64 {
    150
}

pub(crate) fn default_show_logos() -> bool {
    true
}

pub(crate) fn default_show_testimonials() -> bool {
    true
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_key_toggle_logos() -> String {
    "ctrl+l".to_string()
}

pub(crate) fn default_key_toggle_testimonials() -> String {
    "ctrl+j".to_string()
}
