//! Showcase content loading.
//!
//! Content is a small TOML or JSON document listing client logos and
//! testimonials. Logo image paths are resolved relative to the content file;
//! images that do not exist are dropped with a warning so the card falls back
//! to rendering the name.

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShowcaseContent {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub logos: Vec<LogoItem>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogoItem {
    pub name: String,
    #[serde(default)]
    pub image: Option<PathBuf>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(ContentFormat::Toml),
            "json" => Some(ContentFormat::Json),
            _ => None,
        }
    }
}

/// Read and parse a content file, resolving logo images against its folder.
pub fn load_content(path: &Path) -> Result<ShowcaseContent> {
    let format = ContentFormat::from_path(path).ok_or_else(|| {
        anyhow!(
            "Unsupported content file {} (expected .toml or .json)",
            path.display()
        )
    })?;
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file {}", path.display()))?;
    let mut content = parse_content(&data, format)
        .with_context(|| format!("Failed to parse content file {}", path.display()))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    content.resolve_images(base_dir);
    info!(
        path = %path.display(),
        logos = content.logos.len(),
        testimonials = content.testimonials.len(),
        "Loaded showcase content"
    );
    Ok(content)
}

pub fn parse_content(data: &str, format: ContentFormat) -> Result<ShowcaseContent> {
    let content = match format {
        ContentFormat::Toml => toml::from_str(data)?,
        ContentFormat::Json => serde_json::from_str(data)?,
    };
    Ok(content)
}

impl ShowcaseContent {
    /// Built-in content used when no content file is available.
    pub fn sample() -> Self {
        let logo = |name: &str, url: &str| LogoItem {
            name: name.to_string(),
            image: None,
            url: Some(url.to_string()),
        };
        let quote = |quote: &str, author: &str, role: &str| Testimonial {
            quote: quote.to_string(),
            author: author.to_string(),
            role: Some(role.to_string()),
        };
        ShowcaseContent {
            title: default_title(),
            logos: vec![
                logo("Northwind", "https://northwind.example"),
                logo("Contoso", "https://contoso.example"),
                logo("Fabrikam", "https://fabrikam.example"),
                logo("Tailspin", "https://tailspin.example"),
                logo("Litware", "https://litware.example"),
                logo("Adatum", "https://adatum.example"),
            ],
            testimonials: vec![
                quote(
                    "Shipped the redesign two weeks early and the bounce rate dropped by a third.",
                    "Priya Raman",
                    "Head of Growth, Northwind",
                ),
                quote(
                    "Clear communication, clean code, and zero surprises at handoff.",
                    "Marcus Feld",
                    "CTO, Contoso",
                ),
                quote(
                    "The new booking flow finally works on every phone our customers own.",
                    "Ana Souza",
                    "Product Lead, Tailspin",
                ),
                quote(
                    "We still get compliments on the landing page a year later.",
                    "Owen Park",
                    "Founder, Litware",
                ),
            ],
        }
    }

    fn resolve_images(&mut self, base_dir: &Path) {
        for logo in &mut self.logos {
            let Some(image) = logo.image.take() else {
                continue;
            };
            let resolved = if image.is_absolute() {
                image
            } else {
                base_dir.join(image)
            };
            if resolved.is_file() {
                debug!(name = %logo.name, path = %resolved.display(), "Resolved logo image");
                logo.image = Some(resolved);
            } else {
                warn!(
                    name = %logo.name,
                    path = %resolved.display(),
                    "Logo image not found; showing name instead"
                );
            }
        }
    }
}

fn default_title() -> String {
    "Trusted by teams I've worked with".to_string()
}
