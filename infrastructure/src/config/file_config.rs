//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use crate::remote::{DEFAULT_ENDPOINT, DEFAULT_LIMIT};
use quote_application::SyncParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("sync.interval_seconds cannot be 0")]
    InvalidInterval,

    #[error("sync.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("sync.limit cannot be 0")]
    InvalidLimit,

    #[error("sync.endpoint cannot be empty")]
    EmptyEndpoint,
}

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory for durable entries (defaults to the platform data dir)
    pub dir: Option<PathBuf>,
}

/// Raw sync configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSyncConfig {
    /// Run the periodic sync in the interactive shell
    pub enabled: bool,
    /// Remote endpoint returning `[{ "title": ... }]`
    pub endpoint: String,
    /// Entries requested per sync
    pub limit: usize,
    /// Seconds between automatic syncs
    pub interval_seconds: u64,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileSyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            interval_seconds: 30,
            timeout_seconds: 10,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write diagnostics to this file instead of stderr
    pub file: Option<PathBuf>,
    /// Append one JSON line per sync cycle to this file
    pub sync_log: Option<PathBuf>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Storage settings
    pub storage: FileStorageConfig,
    /// Sync settings
    pub sync: FileSyncConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.sync.interval_seconds == 0 {
            return Err(ConfigValidationError::InvalidInterval);
        }
        if self.sync.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.sync.limit == 0 {
            return Err(ConfigValidationError::InvalidLimit);
        }
        if self.sync.endpoint.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }
        Ok(())
    }

    /// Storage directory, falling back to `<data dir>/quote-manager`
    pub fn storage_dir(&self) -> PathBuf {
        self.storage.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("quote-manager"))
                .unwrap_or_else(|| PathBuf::from(".quote-manager"))
        })
    }

    /// Sync parameters for the use case layer
    pub fn sync_params(&self) -> SyncParams {
        SyncParams::default()
            .with_enabled(self.sync.enabled)
            .with_interval_seconds(self.sync.interval_seconds)
    }
}
