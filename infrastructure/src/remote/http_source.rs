//! HTTP remote quote source
//!
//! Issues `GET <endpoint>?_limit=<n>` and expects a JSON array of objects
//! with at least a `title` field (the JSONPlaceholder `/posts` shape). Each
//! entry becomes `{ text: title, category: "Server" }`.

use async_trait::async_trait;
use quote_application::{RemoteError, RemoteQuoteSource};
use quote_domain::{Quote, SERVER_CATEGORY};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Mock server used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Quotes requested per sync
pub const DEFAULT_LIMIT: usize = 5;

/// Wire shape of one remote entry
#[derive(Debug, Deserialize)]
struct RemotePost {
    title: String,
}

/// Remote quote source backed by `reqwest`.
pub struct HttpQuoteSource {
    client: reqwest::Client,
    endpoint: String,
    limit: usize,
}

impl HttpQuoteSource {
    /// Create a source for `endpoint`, requesting at most `limit` entries.
    pub fn new(
        endpoint: impl Into<String>,
        limit: usize,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quote-manager/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RemoteError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            limit,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decode a response body and map it to quotes, keeping at most `limit`.
///
/// The limit is enforced here as well because servers may ignore `_limit`.
fn decode_batch(body: &[u8], limit: usize) -> Result<Vec<Quote>, RemoteError> {
    let posts: Vec<RemotePost> =
        serde_json::from_slice(body).map_err(|e| RemoteError::Decode(e.to_string()))?;

    Ok(posts
        .into_iter()
        .take(limit)
        .map(|post| Quote::from_parts(post.title, SERVER_CATEGORY))
        .collect())
}

#[async_trait]
impl RemoteQuoteSource for HttpQuoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError> {
        debug!("Fetching up to {} quotes from {}", self.limit, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("_limit", self.limit)])
            .send()
            .await
            .map_err(|e| RemoteError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RemoteError::Request(e.to_string()))?;

        decode_batch(&body, self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on a local port
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/posts", addr)
    }

    #[test]
    fn test_decode_maps_title_to_server_quote() {
        let body = br#"[{"userId": 1, "id": 1, "title": "sunt aut facere", "body": "..."}]"#;
        let quotes = decode_batch(body, 5).unwrap();
        assert_eq!(quotes, vec![Quote::from_parts("sunt aut facere", "Server")]);
    }

    #[test]
    fn test_decode_enforces_limit() {
        let body = br#"[{"title": "a"}, {"title": "b"}, {"title": "c"}]"#;
        let quotes = decode_batch(body, 2).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[1].text(), "b");
    }

    #[test]
    fn test_decode_rejects_missing_title() {
        let err = decode_batch(br#"[{"id": 1}]"#, 5).unwrap_err();
        assert!(matches!(err, RemoteError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_from_local_server() {
        let url = serve_once("200 OK", r#"[{"title": "one"}, {"title": "two"}]"#).await;
        let source = HttpQuoteSource::new(url, 5, Duration::from_secs(5)).unwrap();

        let quotes = source.fetch_quotes().await.unwrap();

        assert_eq!(
            quotes,
            vec![
                Quote::from_parts("one", "Server"),
                Quote::from_parts("two", "Server")
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_reports_error_status() {
        let url = serve_once("503 Service Unavailable", "[]").await;
        let source = HttpQuoteSource::new(url, 5, Duration::from_secs(5)).unwrap();

        let err = source.fetch_quotes().await.unwrap_err();
        assert!(matches!(err, RemoteError::Status(503)));
    }

    #[tokio::test]
    async fn test_fetch_reports_connection_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source =
            HttpQuoteSource::new(format!("http://{}/posts", addr), 5, Duration::from_secs(2))
                .unwrap();
        let err = source.fetch_quotes().await.unwrap_err();
        assert!(matches!(err, RemoteError::Request(_)));
    }
}
