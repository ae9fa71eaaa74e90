//! JSONL file writer for sync events.
//!
//! One line per [`SyncEvent`]: the event's own fields plus an RFC 3339
//! `timestamp`. The file is opened in append mode so the log spans
//! sessions.

use quote_application::{SyncEvent, SyncLogger};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};

/// Line layout: `{"timestamp": "...", "type": "sync_merged", ...}`
#[derive(Serialize)]
struct SyncRecord<'a> {
    timestamp: String,
    #[serde(flatten)]
    event: &'a SyncEvent,
}

/// Append-only JSONL sync log.
///
/// Each line is serialized first and written with a single `write_all`.
pub struct JsonlSyncLogger {
    file: Mutex<File>,
    path: PathBuf,
}

impl JsonlSyncLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; sync then runs unlogged.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create sync log directory {}: {}", parent.display(), e);
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                file: Mutex::new(file),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Could not open sync log {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(event: &SyncEvent) -> serde_json::Result<String> {
        let record = SyncRecord {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event,
        };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');
        Ok(line)
    }
}

impl SyncLogger for JsonlSyncLogger {
    fn log(&self, event: &SyncEvent) {
        let line = match Self::render(event) {
            Ok(line) => line,
            Err(e) => {
                debug!("Dropping {} event: {}", event.kind(), e);
                return;
            }
        };

        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = file.write_all(line.as_bytes()) {
            debug!("Could not write to sync log {}: {}", self.path.display(), e);
        }
    }
}
