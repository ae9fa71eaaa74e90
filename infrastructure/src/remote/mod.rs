//! Remote quote source over HTTP.

mod http_source;

pub use http_source::{DEFAULT_ENDPOINT, DEFAULT_LIMIT, HttpQuoteSource};
