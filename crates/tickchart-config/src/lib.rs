//! Configuration management for tickchart.
//!
//! Loads configuration from TOML files: symbol/interval selection, API
//! endpoint, and moving-average window sizes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub api: ApiConfig,
    pub chart: ChartConfig,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./tickchart.toml`
    /// 2. `~/.config/tickchart/tickchart.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        if let Ok(config) = Self::load("tickchart.toml") {
            return config;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("tickchart").join("tickchart.toml");
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("tickchart.toml")
    }
}

/// General application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Symbol to chart on startup.
    pub symbol: String,
    /// Bar interval as the wire string (e.g. "1w").
    pub interval: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            symbol: "AAA".to_string(),
            interval: "1w".to_string(),
        }
    }
}

/// Stock-service API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Service base URL.
    pub base_url: String,
    /// REST request timeout in seconds. The tick stream is exempt.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Chart pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Moving-average window sizes, one overlay series per entry.
    pub ma_windows: Vec<usize>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ma_windows: vec![5, 10, 20, 30],
        }
    }
}
