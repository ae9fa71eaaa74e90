//! Progress reporting for sync cycles

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use quote_application::{SyncOutcome, SyncProgressNotifier, SyncReport};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Spinner shown while a manual sync waits on the server
pub struct SyncSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl SyncSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self) {
        if let Some(pb) = self.bar.lock().unwrap_or_else(PoisonError::into_inner).take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for SyncSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncProgressNotifier for SyncSpinner {
    fn on_fetch_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Syncing with server...");
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.bar.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_merged(&self, _report: &SyncReport) {
        self.finish();
    }

    fn on_no_data(&self, _reason: &str) {
        self.finish();
    }

    fn on_skipped(&self) {
        self.finish();
    }

    fn on_failed(&self, _error: &str) {
        self.finish();
    }
}

/// Prints one status line per background sync.
///
/// Used by the shell's timer, where a spinner would fight with the prompt.
pub struct SyncStatusLine;

impl SyncProgressNotifier for SyncStatusLine {
    fn on_merged(&self, report: &SyncReport) {
        eprintln!(
            "\n[auto-sync] {}",
            ConsoleFormatter::sync(&SyncOutcome::Merged(report.clone()))
        );
    }

    fn on_no_data(&self, _reason: &str) {
        eprintln!(
            "\n[auto-sync] {}",
            ConsoleFormatter::sync(&SyncOutcome::NoServerData {
                reason: String::new()
            })
        );
    }

    fn on_failed(&self, error: &str) {
        eprintln!("\n[auto-sync] {}", ConsoleFormatter::error(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_is_cleared_on_failure() {
        let spinner = SyncSpinner::new();
        spinner.on_fetch_start();
        assert!(spinner.bar.lock().unwrap().is_some());

        spinner.on_failed("disk full");

        assert!(spinner.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_spinner_failure_without_start_is_harmless() {
        let spinner = SyncSpinner::new();
        spinner.on_failed("disk full");
        assert!(spinner.bar.lock().unwrap().is_none());
    }
}
