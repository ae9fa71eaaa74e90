//! Logging infrastructure - structured sync logging.
//!
//! Provides [`JsonlSyncLogger`], a JSONL file writer that implements
//! the [`SyncLogger`](quote_application::SyncLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlSyncLogger;
