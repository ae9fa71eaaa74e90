//! Sync quotes use case
//!
//! Fetches a batch from the remote source and merges it into the
//! [`QuoteBook`] with the last-write-wins rule.
//!
//! # Exclusion
//!
//! At most one sync runs at a time. A trigger that arrives while another
//! sync is still waiting on the network is dropped and reported as
//! [`SyncOutcome::Skipped`]. The collection is read only after the fetch
//! resolves, so quotes added or imported during the fetch survive the merge.
//!
//! # Failures
//!
//! Network failures never escape: they are logged and reported as
//! [`SyncOutcome::NoServerData`]. The next scheduled tick tries again; there
//! is no retry backoff.

use crate::ports::key_value::StorageError;
use crate::ports::remote_source::RemoteQuoteSource;
use crate::ports::sync_logger::{NoSyncLogger, SyncEvent, SyncLogger};
use crate::ports::sync_progress::{NoSyncProgress, SyncProgressNotifier};
use crate::use_cases::quote_book::{QuoteBook, Refresh};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur during a sync
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to save synced quotes: {0}")]
    Storage(#[from] StorageError),
}

/// Summary of a merged batch
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// Quotes received from the server
    pub fetched: usize,
    /// Server quotes appended to the collection
    pub inserted: usize,
    /// Server quotes that replaced a local quote with the same text
    pub conflicts: usize,
    /// Collection size after the merge
    pub total: usize,
    pub refresh: Refresh,
}

impl SyncReport {
    /// User-facing status line
    pub fn message(&self) -> String {
        if self.conflicts > 0 {
            format!(
                "Quotes synced with server! {} conflict(s) resolved. Server data took precedence.",
                self.conflicts
            )
        } else {
            "Quotes synced with server!".to_string()
        }
    }
}

/// Outcome of one sync trigger
#[derive(Debug, Clone)]
pub enum SyncOutcome {
    Merged(SyncReport),
    /// Fetch failed or returned nothing; nothing was changed
    NoServerData { reason: String },
    /// Another sync was already in flight
    Skipped,
}

impl SyncOutcome {
    /// User-facing status line
    pub fn message(&self) -> String {
        match self {
            SyncOutcome::Merged(report) => report.message(),
            SyncOutcome::NoServerData { .. } => "No server data fetched.".to_string(),
            SyncOutcome::Skipped => "Sync already in progress.".to_string(),
        }
    }
}

/// Use case for reconciling local quotes with the remote source
pub struct SyncQuotesUseCase {
    book: Arc<QuoteBook>,
    remote: Arc<dyn RemoteQuoteSource>,
    logger: Arc<dyn SyncLogger>,
    in_flight: Mutex<()>,
}

impl SyncQuotesUseCase {
    pub fn new(book: Arc<QuoteBook>, remote: Arc<dyn RemoteQuoteSource>) -> Self {
        Self {
            book,
            remote,
            logger: Arc::new(NoSyncLogger),
            in_flight: Mutex::new(()),
        }
    }

    /// Record every sync outcome to `logger`
    pub fn with_logger(mut self, logger: Arc<dyn SyncLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Run one sync without progress reporting
    pub async fn execute(&self) -> Result<SyncOutcome, SyncError> {
        self.execute_with_progress(&NoSyncProgress).await
    }

    /// Run one sync with progress callbacks.
    ///
    /// # Errors
    ///
    /// - [`SyncError::Storage`] - the merged collection could not be saved;
    ///   the in-memory collection is left as it was
    pub async fn execute_with_progress(
        &self,
        progress: &dyn SyncProgressNotifier,
    ) -> Result<SyncOutcome, SyncError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("Sync already in flight, dropping trigger");
            self.logger.log(&SyncEvent::Skipped);
            progress.on_skipped();
            return Ok(SyncOutcome::Skipped);
        };

        progress.on_fetch_start();
        let remote = match self.remote.fetch_quotes().await {
            Ok(quotes) if quotes.is_empty() => {
                return Ok(self.no_data("server returned no quotes".to_string(), progress));
            }
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Error fetching from server: {}", e);
                return Ok(self.no_data(e.to_string(), progress));
            }
        };

        let merge = match self.book.apply_remote(&remote) {
            Ok(merge) => merge,
            Err(e) => {
                warn!("Could not save synced quotes: {}", e);
                self.logger.log(&SyncEvent::Failed {
                    fetched: remote.len(),
                    error: e.to_string(),
                });
                progress.on_failed(&e.to_string());
                return Err(e.into());
            }
        };
        let report = SyncReport {
            fetched: remote.len(),
            inserted: merge.inserted,
            conflicts: merge.conflicts,
            total: merge.total,
            refresh: merge.refresh,
        };

        info!(
            "Synced {} server quotes ({} new, {} conflicts)",
            report.fetched, report.inserted, report.conflicts
        );
        self.logger.log(&SyncEvent::Merged {
            fetched: report.fetched,
            inserted: report.inserted,
            conflicts: report.conflicts,
            total: report.total,
        });
        progress.on_merged(&report);

        Ok(SyncOutcome::Merged(report))
    }

    fn no_data(&self, reason: String, progress: &dyn SyncProgressNotifier) -> SyncOutcome {
        self.logger.log(&SyncEvent::NoData {
            reason: reason.clone(),
        });
        progress.on_no_data(&reason);
        SyncOutcome::NoServerData { reason }
    }

    /// Sync every `interval` until `cancel` fires.
    ///
    /// The first sync happens one full interval after the call. Errors are
    /// logged and never stop the loop. Ticks missed while a sync was slow
    /// are dropped, not replayed.
    pub async fn run_periodic(
        &self,
        interval: Duration,
        cancel: CancellationToken,
        progress: &dyn SyncProgressNotifier,
    ) {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!("Periodic sync every {}s", interval.as_secs());
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!("Periodic sync stopped");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(e) = self.execute_with_progress(progress).await {
                        warn!("Periodic sync failed: {}", e);
                    }
                }
            }
        }
    }
}
