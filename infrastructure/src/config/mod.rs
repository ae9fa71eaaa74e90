//! Configuration file loading for quote-manager
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUOTES_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quotes.toml` or `./.quotes.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quote-manager/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig, FileStorageConfig,
    FileSyncConfig,
};
pub use loader::ConfigLoader;
