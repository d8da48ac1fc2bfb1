//! TOML-based application configuration.
//!
//! Stores user preferences:
//! - Default timing (work/rest/set-rest/sets) for new workouts
//! - Cue rendering toggles
//!
//! Configuration is stored at `~/.config/tabatax/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::workout::TimingConfig;

use super::data_dir;

/// Cue rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Prefix spoken cues with a motivational phrase.
    #[serde(default = "default_true")]
    pub motivation: bool,
}

fn default_true() -> bool {
    true
}

impl Default for CuesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            motivation: true,
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/tabatax/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Timing defaults used when no saved workout exists yet.
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub cues: CuesConfig,
}

impl AppConfig {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/tabatax"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
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
    ///
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
        })
    }

    /// Load from disk, returning the default on error. Never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a config value as a string by dot-separated key. Keys match
    /// the serialized field names (the timing section uses the
    /// interchange format's camelCase).
    pub fn get(&self, key: &str) -> Option<String> {
        let v = match key {
            "timing.workDuration" => self.timing.work_duration.to_string(),
            "timing.restDuration" => self.timing.rest_duration.to_string(),
            "timing.setRestDuration" => self.timing.set_rest_duration.to_string(),
            "timing.numSets" => self.timing.num_sets.to_string(),
            "cues.enabled" => self.cues.enabled.to_string(),
            "cues.motivation" => self.cues.motivation.to_string(),
            _ => return None,
        };
        Some(v)
    }

    /// Set a config value by key and persist. Returns an error if the
    /// key is unknown or the value cannot be parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "timing.workDuration" => self.timing.work_duration = parse_num(key, value)?,
            "timing.restDuration" => self.timing.rest_duration = parse_num(key, value)?,
            "timing.setRestDuration" => self.timing.set_rest_duration = parse_num(key, value)?,
            "timing.numSets" => self.timing.num_sets = parse_num(key, value)?,
            "cues.enabled" => self.cues.enabled = parse_bool(key, value)?,
            "cues.motivation" => self.cues.motivation = parse_bool(key, value)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }

    /// Every known key, for `config list`.
    pub const KEYS: [&'static str; 6] = [
        "timing.workDuration",
        "timing.restDuration",
        "timing.setRestDuration",
        "timing.numSets",
        "cues.enabled",
        "cues.motivation",
    ];
}

fn parse_num(key: &str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}' as a non-negative number"),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        message: format!("cannot parse '{value}' as a bool"),
    })
}
