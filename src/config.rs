//! CLI configuration.
//!
//! The API base URL comes from ~/.config/eventflow/config.toml when present,
//! otherwise a local default is used.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

static DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Configuration at ~/.config/eventflow/config.toml
#[derive(Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("eventflow").join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Config::default());
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Invalid config at {}", path.display()))?;

        url::Url::parse(&config.api_base_url)
            .with_context(|| format!("Invalid api_base_url '{}'", config.api_base_url))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_falls_back_to_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn base_url_is_read_from_toml() {
        let config: Config =
            toml::from_str(r#"api_base_url = "https://events.example.com/api""#).unwrap();
        assert_eq!(config.api_base_url, "https://events.example.com/api");
    }
}
