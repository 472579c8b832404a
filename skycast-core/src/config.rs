use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Default geocoding search endpoint (Open-Meteo, no API key required).
pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

/// Default daily forecast endpoint (Open-Meteo, no API key required).
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const DEFAULT_FORECAST_DAYS: u8 = 7;

/// Top-level configuration, optionally stored on disk.
///
/// Every field has a default, so a missing or partial config file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the geocoding search endpoint.
    pub geocoding_url: String,

    /// Base URL of the daily forecast endpoint.
    pub forecast_url: String,

    /// How many days to request, starting today.
    pub forecast_days: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo() {
        let cfg = Config::default();

        assert_eq!(cfg.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.forecast_url, DEFAULT_FORECAST_URL);
        assert_eq!(cfg.forecast_days, 7);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let cfg: Config = toml::from_str("forecast_days = 10").expect("valid TOML");

        assert_eq!(cfg.forecast_days, 10);
        assert_eq!(cfg.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.forecast_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn full_file_overrides_everything() {
        let cfg: Config = toml::from_str(
            r#"
            geocoding_url = "http://localhost:9100/v1/search"
            forecast_url = "http://localhost:9100/v1/forecast"
            forecast_days = 3
            "#,
        )
        .expect("valid TOML");

        assert_eq!(cfg.geocoding_url, "http://localhost:9100/v1/search");
        assert_eq!(cfg.forecast_url, "http://localhost:9100/v1/forecast");
        assert_eq!(cfg.forecast_days, 3);
    }
}
