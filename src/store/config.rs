//! Store configuration file support.
//!
//! This module provides utilities for reading the snapshot store
//! configuration from TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{StoreError, StoreResult};

/// Store configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSettings,
}

/// Snapshot store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Path of the snapshot file, relative to the working directory unless
    /// absolute.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> String {
    "association.json".to_string()
}

impl StoreConfig {
    /// Load store configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(StoreConfig)` if successful
    /// * `Err(StoreError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::Configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            StoreError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        log::debug!(
            "Loaded store configuration from {}",
            path.as_ref().display()
        );
        Ok(config)
    }

    /// Load store configuration from the default location.
    ///
    /// Searches for `association.toml` in:
    /// 1. Current directory
    /// 2. Parent directory
    ///
    /// # Returns
    /// * `Ok(StoreConfig)` if found and parsed successfully
    /// * `Err(StoreError)` if no config file is found or on parse error
    pub fn from_default_location() -> StoreResult<Self> {
        let search_paths = vec![
            PathBuf::from("association.toml"),
            PathBuf::from("../association.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::Configuration(
            "No association.toml found in standard locations".to_string(),
        ))
    }

    /// Path of the snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        PathBuf::from(&self.store.snapshot_path)
    }
}
