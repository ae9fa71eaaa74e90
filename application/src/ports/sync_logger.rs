//! Port for structured sync logging.
//!
//! Defines the [`SyncLogger`] trait for recording the outcome of every
//! reconciliation cycle to a machine-readable log (JSONL in the default
//! adapter). This is separate from `tracing`-based diagnostics.

use serde::Serialize;

/// Outcome of one sync cycle, as recorded in the sync log.
///
/// Serializes internally tagged: `{"type": "sync_merged", "fetched": 5, ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum SyncEvent {
    #[serde(rename = "sync_merged")]
    Merged {
        fetched: usize,
        inserted: usize,
        conflicts: usize,
        total: usize,
    },
    #[serde(rename = "sync_no_data")]
    NoData { reason: String },
    #[serde(rename = "sync_skipped")]
    Skipped,
    /// The merged batch could not be saved
    #[serde(rename = "sync_failed")]
    Failed { fetched: usize, error: String },
}

impl SyncEvent {
    /// The `type` tag written to the log
    pub fn kind(&self) -> &'static str {
        match self {
            SyncEvent::Merged { .. } => "sync_merged",
            SyncEvent::NoData { .. } => "sync_no_data",
            SyncEvent::Skipped => "sync_skipped",
            SyncEvent::Failed { .. } => "sync_failed",
        }
    }
}

/// Port for logging sync events.
///
/// `log` is synchronous and non-fallible; logging failures are ignored.
pub trait SyncLogger: Send + Sync {
    fn log(&self, event: &SyncEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSyncLogger;

impl SyncLogger for NoSyncLogger {
    fn log(&self, _event: &SyncEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_serialized_tag() {
        let events = [
            SyncEvent::Merged {
                fetched: 5,
                inserted: 4,
                conflicts: 1,
                total: 9,
            },
            SyncEvent::NoData {
                reason: "timeout".to_string(),
            },
            SyncEvent::Skipped,
            SyncEvent::Failed {
                fetched: 5,
                error: "disk full".to_string(),
            },
        ];

        for event in &events {
            let value = serde_json::to_value(event).unwrap();
            assert_eq!(value["type"], event.kind());
        }
    }
}
