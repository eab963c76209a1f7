// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use flashbar::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.display_timeout_ms = Some(3000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod defaults;

pub use defaults::{DEFAULT_DISPLAY_TIMEOUT_MS, MAX_DISPLAY_TIMEOUT_MS, MIN_DISPLAY_TIMEOUT_MS};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Flashbar";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// How long a message stays displayed before rotating, in milliseconds.
    #[serde(default)]
    pub display_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_timeout_ms: Some(DEFAULT_DISPLAY_TIMEOUT_MS),
        }
    }
}

impl Config {
    /// Returns the effective display timeout, clamped to the allowed bounds.
    #[must_use]
    pub fn display_timeout(&self) -> Duration {
        let ms = self
            .display_timeout_ms
            .unwrap_or(DEFAULT_DISPLAY_TIMEOUT_MS)
            .clamp(MIN_DISPLAY_TIMEOUT_MS, MAX_DISPLAY_TIMEOUT_MS);
        Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_timeout() {
        let config = Config {
            display_timeout_ms: Some(2500),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.display_timeout_ms, config.display_timeout_ms);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.display_timeout_ms, Some(DEFAULT_DISPLAY_TIMEOUT_MS));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");
        let config = Config::default();

        save_to_path(&config, &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn display_timeout_clamps_out_of_range_values() {
        let too_small = Config {
            display_timeout_ms: Some(1),
        };
        let too_large = Config {
            display_timeout_ms: Some(600_000),
        };

        assert_eq!(
            too_small.display_timeout(),
            Duration::from_millis(MIN_DISPLAY_TIMEOUT_MS)
        );
        assert_eq!(
            too_large.display_timeout(),
            Duration::from_millis(MAX_DISPLAY_TIMEOUT_MS)
        );
    }

    #[test]
    fn missing_timeout_falls_back_to_default() {
        let config = Config {
            display_timeout_ms: None,
        };
        assert_eq!(
            config.display_timeout(),
            Duration::from_millis(DEFAULT_DISPLAY_TIMEOUT_MS)
        );
    }
}
