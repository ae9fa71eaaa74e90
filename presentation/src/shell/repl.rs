//! Read-eval-print loop over the quote book
//!
//! While the shell is open a background task syncs with the server on a
//! fixed interval. The task is cancelled when the shell exits.

use crate::actions::{Action, ActionHandler};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SyncStatusLine;
use colored::Colorize;
use quote_application::SyncParams;
use reedline::{
    DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

const HISTORY_SIZE: usize = 500;

/// Outcome of a built-in shell command
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Help,
    Quit,
}

impl ShellCommand {
    fn parse(line: &str) -> Option<Self> {
        match line {
            "/help" | "/h" | "/?" => Some(ShellCommand::Help),
            "/quit" | "/exit" | "/q" => Some(ShellCommand::Quit),
            _ => None,
        }
    }
}

/// Interactive quote shell
pub struct QuoteShell {
    handler: Arc<ActionHandler>,
    sync: SyncParams,
    history_path: Option<PathBuf>,
}

impl QuoteShell {
    pub fn new(handler: ActionHandler, sync: SyncParams) -> Self {
        Self {
            handler: Arc::new(handler),
            sync,
            history_path: None,
        }
    }

    /// Keep line history in `path`
    pub fn with_history(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = Some(path.into());
        self
    }

    /// Run until the user quits or closes stdin
    pub async fn run(&self) -> std::io::Result<()> {
        let mut editor = self.editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("quotes".to_string()),
            DefaultPromptSegment::Empty,
        );

        let cancel = CancellationToken::new();
        let periodic = self.spawn_periodic_sync(cancel.clone());

        self.print_welcome();

        loop {
            let signal = tokio::task::block_in_place(|| editor.read_line(&prompt));

            match signal {
                Ok(Signal::Success(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match ShellCommand::parse(line) {
                        Some(ShellCommand::Quit) => {
                            println!("Bye!");
                            break;
                        }
                        Some(ShellCommand::Help) => {
                            Self::print_help();
                            continue;
                        }
                        None => {}
                    }

                    if !line.starts_with('/') {
                        println!("Type {} for available commands", "/help".cyan());
                        continue;
                    }

                    match Action::parse_line(line) {
                        Ok(action) => {
                            let response = self.handler.handle(action).await;
                            println!("{}", response.message);
                        }
                        Err(e) => {
                            println!("{}", ConsoleFormatter::warning(&e.to_string()));
                        }
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    cancel.cancel();
                    return Err(e);
                }
            }
        }

        cancel.cancel();
        if let Some(task) = periodic {
            if let Err(e) = task.await {
                warn!("Periodic sync task ended abnormally: {}", e);
            }
        }

        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_path else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_SIZE, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Shell history unavailable at {}: {}", path.display(), e);
                editor
            }
        }
    }

    fn spawn_periodic_sync(
        &self,
        cancel: CancellationToken,
    ) -> Option<tokio::task::JoinHandle<()>> {
        if !self.sync.enabled {
            debug!("Periodic sync disabled");
            return None;
        }

        let sync = self.handler.sync_use_case().clone();
        let interval = self.sync.interval;
        Some(tokio::spawn(async move {
            sync.run_periodic(interval, cancel, &SyncStatusLine).await;
        }))
    }

    fn print_welcome(&self) {
        let book = self.handler.book();

        println!();
        println!("{}", "Quote Manager".cyan().bold());
        println!(
            "{} quotes in {} categories",
            book.len(),
            book.categories().len()
        );
        if self.sync.enabled {
            println!(
                "{}",
                format!("Syncing with server every {}s", self.sync.interval.as_secs()).dimmed()
            );
        }
        println!("Type {} for available commands", "/help".cyan());
        println!();

        println!("{}", ConsoleFormatter::view(&book.filter(), &book.view()));
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /list, /ls                  - Show quotes for the active filter");
        println!("  /random, /r [category]      - Show a random quote");
        println!("  /last                       - Show the last quote drawn this session");
        println!("  /add <text> | <category>    - Add a quote");
        println!("  /filter, /f <category|all>  - Change the category filter");
        println!("  /categories, /cats          - List categories");
        println!("  /export [path]              - Export quotes as JSON");
        println!("  /import <path>              - Import quotes from a JSON file");
        println!("  /sync                       - Sync with the server now");
        println!("  /help, /h, /?               - Show this help");
        println!("  /quit, /exit, /q            - Exit the shell");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_commands() {
        assert_eq!(ShellCommand::parse("/help"), Some(ShellCommand::Help));
        assert_eq!(ShellCommand::parse("/?"), Some(ShellCommand::Help));
        assert_eq!(ShellCommand::parse("/exit"), Some(ShellCommand::Quit));
        assert_eq!(ShellCommand::parse("/list"), None);
    }
}
