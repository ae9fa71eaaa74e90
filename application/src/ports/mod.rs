//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod key_value;
pub mod remote_source;
pub mod sync_logger;
pub mod sync_progress;
