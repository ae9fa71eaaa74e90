//! Presentation layer for quote-manager
//!
//! This crate contains CLI definitions, the action handler shared by the
//! one-shot commands and the interactive shell, output formatters and
//! sync progress reporters.

pub mod actions;
pub mod cli;
pub mod output;
pub mod progress;
pub mod shell;

// Re-export commonly used types
pub use actions::{Action, ActionHandler, ParseActionError, Response};
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SyncSpinner, SyncStatusLine};
pub use shell::repl::QuoteShell;
