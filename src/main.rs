//! Entry point for the portfolio showcase.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the showcase content (logos and testimonials).
//! - Launch the GUI application with the loaded content and config.

mod app;
mod config;
mod content;
mod marquee;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use crate::content::{ShowcaseContent, load_content};
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const CONFIG_PATH: &str = "conf/config.toml";
const DEFAULT_CONTENT_PATH: &str = "conf/showcase.toml";

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let content_path = parse_args()?;
    let config_path = PathBuf::from(CONFIG_PATH);
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        theme = %config.theme,
        logo_speed = config.logo_speed,
        testimonial_speed = config.testimonial_speed,
        "Starting folio marquee"
    );

    let content = resolve_content(content_path.as_deref())?;
    run_app(content, config, config_path).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        return Err(anyhow!("Usage: folio-marquee [content-file]"));
    }

    if let Some(path) = &path {
        if !path.exists() {
            return Err(anyhow!("File not found: {}", path.display()));
        }
    }
    Ok(path)
}

/// An explicit path must load; the default path is optional and falls back
/// to the built-in sample.
fn resolve_content(explicit: Option<&Path>) -> Result<ShowcaseContent> {
    if let Some(path) = explicit {
        info!(path = %path.display(), "Opening showcase content");
        return load_content(path);
    }

    let default_path = Path::new(DEFAULT_CONTENT_PATH);
    if default_path.exists() {
        info!(path = %default_path.display(), "Opening default showcase content");
        return load_content(default_path);
    }

    warn!(
        path = %default_path.display(),
        "No showcase content found; using built-in sample"
    );
    Ok(ShowcaseContent::sample())
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
