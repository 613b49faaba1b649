//! Configuration for the settings slot.
//!
//! # Design
//! - Defaults reproduce the browser behaviour: one slot named `userSettings`.
//! - Environment overrides exist for native embedding and tests only.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the persistent slot holding the serialized settings.
pub const DEFAULT_STORAGE_KEY: &str = "userSettings";

const STORAGE_KEY_ENV: &str = "HEARTH_SETTINGS_KEY";
const STATE_DIR_ENV: &str = "HEARTH_STATE_DIR";

/// Where and under which key settings are persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Slot key inside the key-value store.
    pub storage_key: String,
    /// Directory for file-backed slots on native targets.
    pub state_dir: Option<PathBuf>,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            state_dir: None,
        }
    }
}

impl SettingsConfig {
    /// Build a config from `HEARTH_SETTINGS_KEY` / `HEARTH_STATE_DIR`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when the resulting key is unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] when the resulting key is unusable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(key) = lookup(STORAGE_KEY_ENV) {
            config.storage_key = key;
        }
        config.state_dir = lookup(STATE_DIR_ENV)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);
        config.validate()?;
        Ok(config)
    }

    /// Replace the slot key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Check that the key can name both a `localStorage` entry and a file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for empty keys or keys containing
    /// path separators.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let key = self.storage_key.as_str();
        if key.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "storage_key",
                value: Some(key.to_string()),
                reason: "empty",
            });
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(ConfigError::InvalidField {
                field: "storage_key",
                value: Some(key.to_string()),
                reason: "path_separator",
            });
        }
        Ok(())
    }
}
