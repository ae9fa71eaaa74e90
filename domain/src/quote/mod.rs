//! Quote subdomain
//!
//! - [`entities::Quote`] - a `{ text, category }` record, the base unit of data
//! - [`collection::QuoteCollection`] - ordered list of quotes, duplicates allowed
//! - [`category::CategorySet`] - distinct categories in first-seen order
//! - [`codec`] - structural (de)serialization of quote payloads
//! - [`seed`] - the default collection used when nothing is persisted

pub mod category;
pub mod codec;
pub mod collection;
pub mod entities;
pub mod seed;
