//! Quote book use case
//!
//! [`QuoteBook`] owns the session's quote collection and filter selection
//! and exposes every user-triggered operation: add, import, export, filter,
//! random draw. The sync use case feeds remote batches in through
//! [`QuoteBook::apply_remote`].
//!
//! Each mutation runs under one lock from read to write-back: it builds the
//! next collection, saves it, and only then swaps it in. A failed save
//! leaves both memory and storage at the previous state. No lock is ever
//! held across an `.await`.

use crate::persistence::PersistentStore;
use crate::ports::key_value::StorageError;
use quote_domain::{
    CategorySet, FilterSelection, FilterView, FormatError, Quote, QuoteCollection,
    ValidationError, parse_quotes, reconcile, to_pretty_json,
};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced to the user by quote book operations
#[derive(Error, Debug)]
pub enum QuoteBookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Import failed: {0}")]
    Format(#[from] FormatError),

    #[error("Failed to save quotes: {0}")]
    Storage(#[from] StorageError),

    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// State every view must re-render after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    /// Categories derived from the new collection
    pub categories: CategorySet,
    /// Active filter, re-validated against `categories`
    pub filter: FilterSelection,
    /// Quotes visible through `filter`
    pub view: FilterView,
}

/// Result of [`QuoteBook::add_quote`]
#[derive(Debug, Clone)]
pub struct AddQuoteOutput {
    pub quote: Quote,
    pub total: usize,
    pub refresh: Refresh,
}

/// Result of [`QuoteBook::import_quotes`]
#[derive(Debug, Clone)]
pub struct ImportOutput {
    pub imported: usize,
    pub total: usize,
    pub refresh: Refresh,
}

/// Result of [`QuoteBook::select_filter`]
#[derive(Debug, Clone)]
pub struct FilterOutput {
    /// The selection that was applied and persisted
    pub selection: FilterSelection,
    /// `true` when the requested category did not exist
    pub fell_back: bool,
    pub view: FilterView,
}

/// Result of [`QuoteBook::apply_remote`]
#[derive(Debug, Clone)]
pub struct MergeOutput {
    pub conflicts: usize,
    pub inserted: usize,
    pub total: usize,
    pub refresh: Refresh,
}

/// Result of [`QuoteBook::draw_random`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RandomDraw {
    Drawn(Quote),
    /// No quote matched the requested category
    NoQuotes,
}

struct BookState {
    quotes: QuoteCollection,
    filter: FilterSelection,
}

/// Owned quote collection plus its persistence.
///
/// Hold one instance per session and share it behind an `Arc`.
pub struct QuoteBook {
    store: PersistentStore,
    state: Mutex<BookState>,
}

impl QuoteBook {
    /// Load the collection and filter from storage.
    ///
    /// Falls back to the default seed and the "all" filter. A stored filter
    /// naming a category that no longer exists is reset to "all" and the
    /// reset is persisted.
    pub fn open(store: PersistentStore) -> Self {
        let quotes = store.initial_collection();
        let stored_filter = store.load_filter().unwrap_or_default();
        let filter = stored_filter.clone().resolve(&quotes.categories());

        if filter != stored_filter {
            debug!("Stored filter `{}` no longer matches, using all", stored_filter.as_str());
            if let Err(e) = store.save_filter(&filter) {
                warn!("Could not persist filter fallback: {}", e);
            }
        }

        info!("Opened quote book with {} quotes", quotes.len());
        Self {
            store,
            state: Mutex::new(BookState { quotes, filter }),
        }
    }

    fn state(&self) -> MutexGuard<'_, BookState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current collection
    pub fn quotes(&self) -> QuoteCollection {
        self.state().quotes.clone()
    }

    pub fn len(&self) -> usize {
        self.state().quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().quotes.is_empty()
    }

    /// Categories of the current collection, first-seen order
    pub fn categories(&self) -> CategorySet {
        self.state().quotes.categories()
    }

    /// The active filter selection
    pub fn filter(&self) -> FilterSelection {
        self.state().filter.clone()
    }

    /// Quotes visible through the active filter
    pub fn view(&self) -> FilterView {
        let state = self.state();
        FilterView::apply(&state.quotes, &state.filter)
    }

    /// Add one quote from user input.
    ///
    /// # Errors
    ///
    /// - [`QuoteBookError::Validation`] - text or category empty after trimming
    /// - [`QuoteBookError::Storage`] - the new collection could not be saved
    pub fn add_quote(&self, text: &str, category: &str) -> Result<AddQuoteOutput, QuoteBookError> {
        let quote = Quote::new(text, category)?;

        let mut state = self.state();
        let mut next = state.quotes.clone();
        next.push(quote.clone());
        let refresh = self.commit(&mut state, next)?;

        info!("Added quote in category `{}`", quote.category());
        Ok(AddQuoteOutput {
            quote,
            total: state.quotes.len(),
            refresh,
        })
    }

    /// Append every quote of a JSON payload, or none of them.
    ///
    /// Entries are only shape-checked; empty fields are accepted here even
    /// though [`add_quote`](Self::add_quote) rejects them.
    ///
    /// # Errors
    ///
    /// - [`QuoteBookError::Format`] - payload is not an array of quote objects
    /// - [`QuoteBookError::Storage`] - the new collection could not be saved
    pub fn import_quotes(&self, payload: &[u8]) -> Result<ImportOutput, QuoteBookError> {
        let imported = parse_quotes(payload)?;
        let count = imported.len();

        let mut state = self.state();
        let mut next = state.quotes.clone();
        next.append(imported);
        let refresh = self.commit(&mut state, next)?;

        info!("Imported {} quotes", count);
        Ok(ImportOutput {
            imported: count,
            total: state.quotes.len(),
            refresh,
        })
    }

    /// Pretty-printed JSON of the whole collection
    pub fn export_quotes(&self) -> Result<String, QuoteBookError> {
        Ok(to_pretty_json(self.state().quotes.as_slice())?)
    }

    /// Apply and persist a filter.
    ///
    /// `value` is a category name or `"all"`. A category that is not in the
    /// live category set falls back to "all", and the fallback is what gets
    /// persisted.
    pub fn select_filter(&self, value: &str) -> Result<FilterOutput, QuoteBookError> {
        let requested = FilterSelection::parse(value);

        let mut state = self.state();
        let selection = requested.clone().resolve(&state.quotes.categories());
        let fell_back = selection != requested;

        self.store.save_filter(&selection)?;
        state.filter = selection.clone();

        if fell_back {
            debug!("Unknown category `{}`, showing all quotes", value);
        }
        Ok(FilterOutput {
            view: FilterView::apply(&state.quotes, &selection),
            selection,
            fell_back,
        })
    }

    /// Draw a random quote and remember it as the last viewed one.
    ///
    /// Candidates are the quotes of `category` when given, otherwise the
    /// active filter view.
    pub fn draw_random<R: Rng + ?Sized>(&self, category: Option<&str>, rng: &mut R) -> RandomDraw {
        let picked = {
            let state = self.state();
            let candidates: Vec<&Quote> = match category {
                Some(category) => state.quotes.in_category(category).collect(),
                None => match &state.filter {
                    FilterSelection::All => state.quotes.iter().collect(),
                    FilterSelection::Category(c) => state.quotes.in_category(c).collect(),
                },
            };
            candidates.choose(rng).map(|q| (*q).clone())
        };

        let Some(quote) = picked else {
            return RandomDraw::NoQuotes;
        };

        if let Err(e) = self.store.save_last_viewed(&quote) {
            warn!("Could not remember last viewed quote: {}", e);
        }
        RandomDraw::Drawn(quote)
    }

    /// The quote drawn most recently in this session, if any
    pub fn last_viewed(&self) -> Option<Quote> {
        self.store.load_last_viewed()
    }

    /// Merge a remote batch into the live collection and save it.
    ///
    /// Reads the collection at call time, so mutations that completed while
    /// the batch was being fetched are merged rather than overwritten.
    pub fn apply_remote(&self, remote: &[Quote]) -> Result<MergeOutput, StorageError> {
        let mut state = self.state();
        let outcome = reconcile(state.quotes.clone(), remote);
        let refresh = self.commit(&mut state, outcome.merged)?;

        Ok(MergeOutput {
            conflicts: outcome.conflicts,
            inserted: outcome.inserted,
            total: state.quotes.len(),
            refresh,
        })
    }

    /// Save `next`, swap it in, then re-derive categories and the filter view.
    fn commit(
        &self,
        state: &mut BookState,
        next: QuoteCollection,
    ) -> Result<Refresh, StorageError> {
        self.store.save(&next)?;
        state.quotes = next;

        let categories = state.quotes.categories();
        let filter = state.filter.clone().resolve(&categories);
        if filter != state.filter {
            debug!(
                "Category `{}` disappeared, filter reset to all",
                state.filter.as_str()
            );
            if let Err(e) = self.store.save_filter(&filter) {
                warn!("Could not persist filter fallback: {}", e);
            }
            state.filter = filter.clone();
        }

        Ok(Refresh {
            view: FilterView::apply(&state.quotes, &filter),
            categories,
            filter,
        })
    }
}
