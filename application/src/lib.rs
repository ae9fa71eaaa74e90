//! Application layer for quote-manager
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod persistence;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SyncParams;
pub use persistence::{FILTER_KEY, LAST_QUOTE_KEY, PersistentStore, QUOTES_KEY};
pub use ports::{
    key_value::{KeyValueStore, MemoryKeyValueStore, StorageError},
    remote_source::{RemoteError, RemoteQuoteSource},
    sync_logger::{NoSyncLogger, SyncEvent, SyncLogger},
    sync_progress::{NoSyncProgress, SyncProgressNotifier},
};
pub use use_cases::quote_book::{
    AddQuoteOutput, FilterOutput, ImportOutput, MergeOutput, QuoteBook, QuoteBookError,
    RandomDraw, Refresh,
};
pub use use_cases::sync_quotes::{SyncError, SyncOutcome, SyncQuotesUseCase, SyncReport};
