//! Action handler
//!
//! Runs an [`Action`] against the quote book or the sync use case and turns
//! the result into console text. User-facing errors never propagate: they
//! come back as a failed [`Response`] carrying the message to show.

use super::action::Action;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SyncSpinner;
use quote_application::{QuoteBook, SyncOutcome, SyncQuotesUseCase};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Rendered result of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub message: String,
    pub success: bool,
}

impl Response {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    fn failed(message: impl AsRef<str>) -> Self {
        Self {
            message: ConsoleFormatter::error(message.as_ref()),
            success: false,
        }
    }
}

/// Dispatches actions to the application layer
pub struct ActionHandler {
    book: Arc<QuoteBook>,
    sync: Arc<SyncQuotesUseCase>,
    show_progress: bool,
}

impl ActionHandler {
    pub fn new(book: Arc<QuoteBook>, sync: Arc<SyncQuotesUseCase>) -> Self {
        Self {
            book,
            sync,
            show_progress: true,
        }
    }

    /// Set whether manual syncs show a spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn book(&self) -> &Arc<QuoteBook> {
        &self.book
    }

    pub fn sync_use_case(&self) -> &Arc<SyncQuotesUseCase> {
        &self.sync
    }

    /// Run one action
    pub async fn handle(&self, action: Action) -> Response {
        debug!("Handling {:?}", action);
        match action {
            Action::ShowView => Response::ok(ConsoleFormatter::view(
                &self.book.filter(),
                &self.book.view(),
            )),
            Action::ShowRandom { category } => {
                let draw = self
                    .book
                    .draw_random(category.as_deref(), &mut rand::thread_rng());
                Response::ok(ConsoleFormatter::random(&draw))
            }
            Action::ShowLast => Response::ok(ConsoleFormatter::last_viewed(
                self.book.last_viewed().as_ref(),
            )),
            Action::AddQuote { text, category } => match self.book.add_quote(&text, &category) {
                Ok(output) => Response::ok(ConsoleFormatter::refreshed(
                    "Quote added!",
                    &output.refresh,
                )),
                Err(e) => Response::failed(e.to_string()),
            },
            Action::ApplyFilter { value } => match self.book.select_filter(&value) {
                Ok(output) => {
                    let view = ConsoleFormatter::view(&output.selection, &output.view);
                    if output.fell_back {
                        Response::ok(format!(
                            "{}\n{}",
                            ConsoleFormatter::warning(&format!(
                                "No category named `{}`, showing all categories.",
                                value
                            )),
                            view
                        ))
                    } else {
                        Response::ok(view)
                    }
                }
                Err(e) => Response::failed(e.to_string()),
            },
            Action::ListCategories => Response::ok(ConsoleFormatter::categories(
                &self.book.categories(),
                &self.book.filter(),
            )),
            Action::Export { path } => self.export(&path).await,
            Action::Import { path } => self.import(&path).await,
            Action::SyncNow => self.sync_now().await,
        }
    }

    async fn export(&self, path: &Path) -> Response {
        let json = match self.book.export_quotes() {
            Ok(json) => json,
            Err(e) => return Response::failed(e.to_string()),
        };
        if path == Path::new("-") {
            return Response::ok(json);
        }

        match tokio::fs::write(path, format!("{}\n", json)).await {
            Ok(()) => Response::ok(ConsoleFormatter::notice(&format!(
                "Exported {} quotes to {}",
                self.book.len(),
                path.display()
            ))),
            Err(e) => Response::failed(format!("Export failed: {}", e)),
        }
    }

    async fn import(&self, path: &Path) -> Response {
        let payload = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => return Response::failed(format!("Import failed: {}", e)),
        };

        match self.book.import_quotes(&payload) {
            Ok(output) => Response::ok(ConsoleFormatter::refreshed(
                &format!("Quotes imported successfully! ({} added)", output.imported),
                &output.refresh,
            )),
            Err(e) => Response::failed(e.to_string()),
        }
    }

    async fn sync_now(&self) -> Response {
        let result = if self.show_progress {
            self.sync.execute_with_progress(&SyncSpinner::new()).await
        } else {
            self.sync.execute().await
        };

        match result {
            Ok(SyncOutcome::Merged(report)) => {
                let status = ConsoleFormatter::sync(&SyncOutcome::Merged(report.clone()));
                Response::ok(format!(
                    "{}\n{}",
                    status,
                    ConsoleFormatter::view(&report.refresh.filter, &report.refresh.view)
                ))
            }
            Ok(outcome) => Response::ok(ConsoleFormatter::sync(&outcome)),
            Err(e) => Response::failed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use quote_application::{
        MemoryKeyValueStore, PersistentStore, RemoteError, RemoteQuoteSource,
    };
    use quote_domain::{Quote, QuoteCollection};

    struct StaticRemote(Result<Vec<Quote>, u16>);

    #[async_trait]
    impl RemoteQuoteSource for StaticRemote {
        async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError> {
            self.0.clone().map_err(RemoteError::Status)
        }
    }

    fn handler(quotes: Vec<Quote>, remote: StaticRemote) -> ActionHandler {
        colored::control::set_override(false);
        let store = PersistentStore::new(
            Arc::new(MemoryKeyValueStore::new()),
            Arc::new(MemoryKeyValueStore::new()),
        );
        store.save(&QuoteCollection::from(quotes)).unwrap();
        let book = Arc::new(QuoteBook::open(store));
        let sync = Arc::new(SyncQuotesUseCase::new(book.clone(), Arc::new(remote)));
        ActionHandler::new(book, sync).with_progress(false)
    }

    fn q(text: &str, category: &str) -> Quote {
        Quote::from_parts(text, category)
    }

    #[tokio::test]
    async fn test_add_then_view() {
        let handler = handler(vec![q("A", "X")], StaticRemote(Ok(vec![])));

        let response = handler
            .handle(Action::AddQuote {
                text: "B".to_string(),
                category: "Y".to_string(),
            })
            .await;

        assert!(response.success);
        assert!(response.message.contains("Quote added!"));
        assert!(response.message.contains("\"B\""));
        assert_eq!(handler.book().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_add_is_a_failed_response() {
        let handler = handler(vec![q("A", "X")], StaticRemote(Ok(vec![])));

        let response = handler
            .handle(Action::AddQuote {
                text: " ".to_string(),
                category: "Y".to_string(),
            })
            .await;

        assert!(!response.success);
        assert!(response.message.contains("Please enter both quote and category"));
        assert_eq!(handler.book().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_filter_warns_and_shows_all() {
        let handler = handler(vec![q("A", "Life"), q("B", "Work")], StaticRemote(Ok(vec![])));

        let response = handler
            .handle(Action::ApplyFilter {
                value: "Nope".to_string(),
            })
            .await;

        assert!(response.success);
        assert!(response.message.contains("No category named `Nope`"));
        assert!(response.message.contains("Showing: All Categories"));
    }

    #[tokio::test]
    async fn test_export_and_import_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        let source = handler(vec![q("A", "X"), q("B", "Y")], StaticRemote(Ok(vec![])));

        let exported = source.handle(Action::Export { path: path.clone() }).await;
        assert!(exported.success);
        assert!(exported.message.contains("Exported 2 quotes"));

        let target = handler(vec![], StaticRemote(Ok(vec![])));
        let imported = target.handle(Action::Import { path }).await;

        assert!(imported.success);
        assert!(imported.message.contains("(2 added)"));
        assert_eq!(target.book().quotes(), source.book().quotes());
    }

    #[tokio::test]
    async fn test_import_bad_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"text": "A"}"#).unwrap();
        let handler = handler(vec![q("A", "X")], StaticRemote(Ok(vec![])));

        let response = handler.handle(Action::Import { path }).await;

        assert!(!response.success);
        assert!(response.message.contains("Import failed"));
        assert_eq!(handler.book().len(), 1);
    }

    #[tokio::test]
    async fn test_export_to_stdout() {
        let handler = handler(vec![q("A", "X")], StaticRemote(Ok(vec![])));
        let response = handler
            .handle(Action::Export {
                path: "-".into(),
            })
            .await;
        assert_eq!(
            response.message,
            "[\n  {\n    \"text\": \"A\",\n    \"category\": \"X\"\n  }\n]"
        );
    }

    #[tokio::test]
    async fn test_sync_reports_conflicts() {
        let handler = handler(
            vec![q("A", "X")],
            StaticRemote(Ok(vec![q("A", "Server"), q("B", "Server")])),
        );

        let response = handler.handle(Action::SyncNow).await;

        assert!(response.success);
        assert!(response.message.contains("1 conflict(s) resolved"));
        assert_eq!(handler.book().len(), 2);
    }

    #[tokio::test]
    async fn test_sync_failure_is_neutral() {
        let handler = handler(vec![q("A", "X")], StaticRemote(Err(500)));

        let response = handler.handle(Action::SyncNow).await;

        assert!(response.success);
        assert!(response.message.contains("No server data fetched."));
    }

    #[tokio::test]
    async fn test_random_and_last() {
        let handler = handler(vec![q("A", "X")], StaticRemote(Ok(vec![])));

        let before = handler.handle(Action::ShowLast).await;
        assert!(before.message.contains("No quote viewed"));

        let random = handler.handle(Action::ShowRandom { category: None }).await;
        assert!(random.message.contains("\"A\""));

        let after = handler.handle(Action::ShowLast).await;
        assert_eq!(after.message, "Last viewed: \"A\"");
    }
}
