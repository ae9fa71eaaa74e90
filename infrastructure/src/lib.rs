//! Infrastructure layer for quote-manager
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod remote;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileStorageConfig, FileSyncConfig,
};
pub use logging::JsonlSyncLogger;
pub use remote::{DEFAULT_ENDPOINT, DEFAULT_LIMIT, HttpQuoteSource};
pub use storage::FileKeyValueStore;
