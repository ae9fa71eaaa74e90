//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod quote_book;
pub mod sync_quotes;
