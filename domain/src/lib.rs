//! Domain layer for quote-manager
//!
//! This crate contains the core data model and rules of the quote manager.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quotes
//!
//! A [`Quote`] is a `{ text, category }` record. A [`QuoteCollection`] keeps
//! quotes in insertion order and permits duplicates. The [`CategorySet`] is
//! derived from the collection on every call and never stored.
//!
//! ## Filter
//!
//! A [`FilterSelection`] is either "all" or a single category. It is
//! re-validated against the live categories and falls back to "all" when its
//! category disappears.
//!
//! ## Sync
//!
//! [`reconcile`] merges a remote batch into the local collection: exact
//! text match means the server quote replaces the local one in place,
//! anything else is appended.

pub mod core;
pub mod filter;
pub mod quote;
pub mod sync;

// Re-export commonly used types
pub use core::error::{FormatError, QuoteField, ValidationError};
pub use filter::{
    selection::{ALL_CATEGORIES, FilterSelection},
    view::FilterView,
};
pub use quote::{
    category::{CategorySet, categories_of},
    codec::{EXPORT_FILE_NAME, parse_quotes, to_json, to_pretty_json},
    collection::QuoteCollection,
    entities::Quote,
    seed::default_quotes,
};
pub use sync::{
    SERVER_CATEGORY,
    reconcile::{ReconcileOutcome, reconcile},
};
