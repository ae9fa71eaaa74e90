//! Sync progress notification port
//!
//! Implementations live in the presentation layer (spinner, status line).

use crate::use_cases::sync_quotes::SyncReport;

/// Callbacks fired while a sync cycle runs.
///
/// All methods default to no-ops.
pub trait SyncProgressNotifier: Send + Sync {
    /// Called right before the remote fetch starts
    fn on_fetch_start(&self) {}

    /// Called when the fetched batch has been merged and saved
    fn on_merged(&self, _report: &SyncReport) {}

    /// Called when no usable server data was fetched
    fn on_no_data(&self, _reason: &str) {}

    /// Called when a trigger was dropped because a sync is already running
    fn on_skipped(&self) {}

    /// Called when the merged batch could not be saved
    fn on_failed(&self, _error: &str) {}
}

/// No-op progress notifier
pub struct NoSyncProgress;

impl SyncProgressNotifier for NoSyncProgress {}
