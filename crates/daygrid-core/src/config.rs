//! TOML-based application configuration.
//!
//! Stores day-grid rendering preferences:
//! - Hour row height in pixels
//! - Visual slot duration for reminder blocks
//!
//! Configuration is stored at `~/.config/daygrid/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::timeline::LayoutConfig;

/// Returns `~/.config/daygrid[-dev]/` based on DAYGRID_ENV.
///
/// Set DAYGRID_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DAYGRID_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("daygrid-dev")
    } else {
        base_dir.join("daygrid")
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DirFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

fn default_hour_height() -> f64 {
    60.0
}

fn default_slot_minutes() -> i64 {
    60
}

/// Day-grid layout section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSection {
    #[serde(default = "default_hour_height")]
    pub hour_height: f64,
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: i64,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            hour_height: default_hour_height(),
            slot_minutes: default_slot_minutes(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/daygrid/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutSection,
}

impl Config {
    /// Path of the config file on disk.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config =
                    toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Engine-facing layout configuration.
    pub fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            hour_height: self.layout.hour_height,
            slot_minutes: self.layout.slot_minutes,
        }
    }
}
