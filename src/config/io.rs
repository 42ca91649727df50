use super::models::AppConfig;
use super::tables::{ConfigTables, TABLE_KEYS};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

/// Parse either the sectioned layout or a flat list of keys.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let table: toml::Table = toml::from_str(contents)?;
    let sectioned = TABLE_KEYS
        .iter()
        .any(|key| table.get(*key).is_some_and(toml::Value::is_table));
    if sectioned {
        toml::from_str::<ConfigTables>(contents).map(AppConfig::from)
    } else {
        toml::from_str::<AppConfig>(contents)
    }
}

/// Serialize using the sectioned layout.
pub fn serialize_config(config: &AppConfig) -> Result<String, toml::ser::Error> {
    toml::to_string(&ConfigTables::from(config))
}

pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    let contents = serialize_config(config).context("Failed to serialize config")?;
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    debug!(path = %path.display(), "Saved config");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").expect("empty config parses");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn parses_sectioned_layout() {
        let config = parse_config(
            r#"
            [appearance]
            theme = "day"

            [marquee]
            logo_speed = 80.0
            show_testimonials = false

            [logging]
            log_level = "warn"
            "#,
        )
        .expect("sectioned config parses");

        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.logo_speed, 80.0);
        assert!(!config.show_testimonials);
        assert!(config.show_logos);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.testimonial_speed, 25.0);
    }

    #[test]
    fn parses_flat_layout() {
        let config = parse_config(
            r#"
            theme = "day"
            resize_debounce_ms = 40
            key_safe_quit = "ctrl+q"
            "#,
        )
        .expect("flat config parses");

        assert_eq!(config.theme, ThemeMode::Day);
        assert_eq!(config.resize_debounce_ms, 40);
        assert_eq!(config.key_safe_quit, "ctrl+q");
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = AppConfig::default();
        config.theme = ThemeMode::Day;
        config.testimonial_speed = 12.5;
        config.show_logos = false;

        let text = serialize_config(&config).expect("serialize config");
        assert!(text.contains("[marquee]"), "expected sectioned output:\n{text}");
        assert_eq!(parse_config(&text).expect("parse back"), config);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("folio-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join("config.toml");
        fs::write(&path, "theme = [").expect("write broken config");

        assert_eq!(load_config(&path), AppConfig::default());

        let mut config = AppConfig::default();
        config.logo_speed = 99.0;
        save_config(&path, &config).expect("save config");
        assert_eq!(load_config(&path), config);

        let _ = fs::remove_dir_all(&dir);
    }
}
