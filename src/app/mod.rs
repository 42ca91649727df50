mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::content::ShowcaseContent;
use iced::{Size, window};
use std::path::PathBuf;

/// Helper to launch the showcase window.
pub fn run_app(
    content: ShowcaseContent,
    config: AppConfig,
    config_path: PathBuf,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Folio Marquee", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| crate::theme::iced_theme(app.config.theme))
        .run_with(move || App::bootstrap(content, config, config_path))
}
