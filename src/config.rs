//! Runtime configuration
//!
//! Loaded once at startup from a JSON file in the platform config directory.
//! The file is optional; defaults cover everything except the API key, and
//! the `PIXABAY_API_KEY` environment variable always wins for that.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default search endpoint.
const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Hits requested per page.
const DEFAULT_PER_PAGE: u32 = 15;

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Pixabay API key; `PIXABAY_API_KEY` overrides the stored value
    pub api_key: Option<String>,
    /// Page size used for every search request
    pub per_page: u32,
    /// Whether the gallery offers a "Load more" control or stays single-page
    pub pagination: bool,
    /// Search endpoint, overridable for self-hosted proxies
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            per_page: DEFAULT_PER_PAGE,
            pagination: true,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Get the path of the config file.
///
/// - Linux: ~/.config/pixgrid/config.json
/// - macOS: ~/Library/Application Support/pixgrid/config.json
/// - Windows: %APPDATA%\pixgrid\config.json
fn config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
    path.push("pixgrid");
    path.push("config.json");
    Some(path)
}

/// Load the configuration, falling back to defaults when the file is missing
/// or unreadable.
pub fn load() -> Config {
    let mut config = config_path()
        .and_then(|path| fs::read_to_string(path).ok())
        .and_then(|raw| parse(&raw))
        .unwrap_or_default();

    if let Ok(key) = std::env::var("PIXABAY_API_KEY") {
        if !key.is_empty() {
            config.api_key = Some(key);
        }
    }

    config
}

fn parse(raw: &str) -> Option<Config> {
    match serde_json::from_str(raw) {
        Ok(config) => Some(config),
        Err(err) => {
            eprintln!("⚠️  Ignoring malformed config file: {}", err);
            None
        }
    }
}
