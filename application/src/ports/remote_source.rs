//! Remote quote source port

use async_trait::async_trait;
use quote_domain::Quote;
use thiserror::Error;

/// Errors from fetching the remote batch
///
/// Never propagated past the sync use case; they become a
/// "no server data" outcome.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Source of server-side quotes
#[async_trait]
pub trait RemoteQuoteSource: Send + Sync {
    /// Fetch one batch of quotes, already mapped to the local model
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError>;
}
