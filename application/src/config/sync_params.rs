//! Sync parameters - periodic reconciliation control.
//!
//! Endpoint, batch size and request timeout belong to the HTTP adapter;
//! these are the parts the use case layer acts on.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Periodic sync control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncParams {
    /// Whether the interactive shell syncs on a timer
    pub enabled: bool,
    /// Time between two automatic syncs
    pub interval: Duration,
}

impl Default for SyncParams {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(30),
        }
    }
}

impl SyncParams {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_interval_seconds(mut self, seconds: u64) -> Self {
        self.interval = Duration::from_secs(seconds);
        self
    }
}
