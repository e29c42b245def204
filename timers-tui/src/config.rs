use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const API_URL_ENV: &str = "TIMERS_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimersConfig {
    /// Base URL of the timers API, e.g. "http://localhost:3000"
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Seconds between background refreshes of the timer list.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_refresh_interval_secs() -> u64 {
    5
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for TimersConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            refresh_interval_secs: default_refresh_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn root_path() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Cannot determine config directory")?
        .join("timers-tui"))
}

impl TimersConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(root_path()?.join("timers-tui.log"))
    }

    /// Load config from disk, then apply environment overrides.
    /// Returns the default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config at {}", path.display()))?;
            Self::from_toml(&raw)
                .with_context(|| format!("Failed to parse config at {}", path.display()))?
        } else {
            Self::default()
        };

        if let Ok(api_url) = std::env::var(API_URL_ENV) {
            if !api_url.trim().is_empty() {
                config.api_url = api_url;
            }
        }

        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// Return the config path, writing a default file there if none exists.
    pub fn ensure_default_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = TimersConfig::from_toml("").unwrap();
        assert_eq!(config, TimersConfig::default());
        assert_eq!(config.refresh_interval(), Duration::from_secs(5));
    }

    #[test]
    fn partial_file_overrides_given_keys() {
        let config = TimersConfig::from_toml(
            r#"
            api_url = "https://timers.example.com"
            refresh_interval_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.api_url, "https://timers.example.com");
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let config = TimersConfig {
            refresh_interval_secs: 0,
            ..TimersConfig::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
    }

    #[test]
    fn default_round_trips_through_toml() {
        let raw = toml::to_string_pretty(&TimersConfig::default()).unwrap();
        assert_eq!(
            TimersConfig::from_toml(&raw).unwrap(),
            TimersConfig::default()
        );
    }
}
