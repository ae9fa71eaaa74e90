//! Application-level configuration.
//!
//! - [`SyncParams`] - periodic sync control (enabled flag, interval)

pub mod sync_params;

pub use sync_params::SyncParams;
