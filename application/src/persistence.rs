//! Persistent store
//!
//! Maps the quote manager's three persisted values onto the key-value
//! ports:
//!
//! | Key | Scope | Value |
//! |-----|-------|-------|
//! | `storedQuotes` | durable | JSON array of quotes |
//! | `lastSelectedFilter` | durable | plain filter string |
//! | `lastViewedQuote` | session | JSON quote object |
//!
//! Reads never fail: a missing, unreadable or malformed entry is treated
//! as "no prior value" and only logged. Writes report [`StorageError`].

use crate::ports::key_value::{KeyValueStore, StorageError};
use quote_domain::{FilterSelection, Quote, QuoteCollection, default_quotes, parse_quotes, to_json};
use std::sync::Arc;
use tracing::{debug, warn};

pub const QUOTES_KEY: &str = "storedQuotes";
pub const FILTER_KEY: &str = "lastSelectedFilter";
pub const LAST_QUOTE_KEY: &str = "lastViewedQuote";

/// Typed access to durable and session storage
#[derive(Clone)]
pub struct PersistentStore {
    durable: Arc<dyn KeyValueStore>,
    session: Arc<dyn KeyValueStore>,
}

impl PersistentStore {
    pub fn new(durable: Arc<dyn KeyValueStore>, session: Arc<dyn KeyValueStore>) -> Self {
        Self { durable, session }
    }

    /// Read the stored collection.
    ///
    /// `None` when absent, blank, unreadable or not a valid quote array.
    pub fn load(&self) -> Option<QuoteCollection> {
        let raw = read(self.durable.as_ref(), QUOTES_KEY)?;
        match parse_quotes(raw.as_bytes()) {
            Ok(quotes) => Some(quotes.into()),
            Err(e) => {
                warn!("Ignoring malformed `{}` entry: {}", QUOTES_KEY, e);
                None
            }
        }
    }

    /// The collection to start a session with: stored quotes, else the seed.
    ///
    /// The seed is not written back here; the first mutation persists it.
    pub fn initial_collection(&self) -> QuoteCollection {
        self.load().unwrap_or_else(|| {
            debug!("No stored quotes, starting from the default seed");
            default_quotes().into()
        })
    }

    /// Overwrite the stored collection
    ///
    /// An encoding failure is an error; nothing is written in that case.
    pub fn save(&self, quotes: &QuoteCollection) -> Result<(), StorageError> {
        let raw = to_json(quotes.as_slice()).map_err(|source| encode_error(QUOTES_KEY, source))?;
        self.durable.set(QUOTES_KEY, &raw)
    }

    pub fn load_filter(&self) -> Option<FilterSelection> {
        read(self.durable.as_ref(), FILTER_KEY).map(|raw| FilterSelection::parse(&raw))
    }

    pub fn save_filter(&self, filter: &FilterSelection) -> Result<(), StorageError> {
        self.durable.set(FILTER_KEY, filter.as_str())
    }

    pub fn load_last_viewed(&self) -> Option<Quote> {
        let raw = read(self.session.as_ref(), LAST_QUOTE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!("Ignoring malformed `{}` entry: {}", LAST_QUOTE_KEY, e);
                None
            }
        }
    }

    pub fn save_last_viewed(&self, quote: &Quote) -> Result<(), StorageError> {
        let raw =
            serde_json::to_string(quote).map_err(|source| encode_error(LAST_QUOTE_KEY, source))?;
        self.session.set(LAST_QUOTE_KEY, &raw)
    }
}

fn encode_error(key: &str, source: serde_json::Error) -> StorageError {
    StorageError::Encode {
        key: key.to_string(),
        source,
    }
}

/// Read a non-blank entry, swallowing backend errors
fn read(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => Some(raw),
        Ok(_) => None,
        Err(e) => {
            warn!("Could not read `{}`: {}", key, e);
            None
        }
    }
}
