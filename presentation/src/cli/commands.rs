//! CLI command definitions

use crate::actions::Action;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for quote-manager
#[derive(Parser, Debug)]
#[command(name = "quote-manager")]
#[command(author, version, about = "Keep, filter and sync a personal quote collection")]
#[command(long_about = r#"
Quote Manager keeps a collection of quotes grouped by category.

Quotes are stored on disk and reconciled with a remote server: server quotes
with the same text replace local ones, new ones are appended.

Configuration files are loaded from (in priority order):
1. QUOTES_* environment variables
2. --config <path>     Explicit config file
3. ./quotes.toml       Project-level config
4. ~/.config/quote-manager/config.toml   Global config

Example:
  quote-manager add "Simplicity is the soul of efficiency." Engineering
  quote-manager list --filter Engineering
  quote-manager export --output quotes.json
  quote-manager shell
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands, one per user entry point
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a random quote
    Random {
        /// Draw only from this category (default: the active filter)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Add a quote
    Add {
        /// Quote text
        text: String,
        /// Quote category
        category: String,
    },
    /// List quotes, optionally applying and remembering a category filter
    List {
        /// Category name, or "all"
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List categories
    Categories,
    /// Export all quotes as pretty-printed JSON
    Export {
        /// Output file ("-" for stdout)
        #[arg(short, long, default_value = "quotes.json")]
        output: PathBuf,
    },
    /// Import quotes from a JSON file
    Import {
        /// File containing a JSON array of { text, category }
        file: PathBuf,
    },
    /// Sync with the server now
    Sync,
    /// Interactive shell with automatic periodic sync
    Shell,
}

impl Command {
    /// The action for a one-shot command, `None` for [`Command::Shell`]
    pub fn into_action(self) -> Option<Action> {
        let action = match self {
            Command::Random { category } => Action::ShowRandom { category },
            Command::Add { text, category } => Action::AddQuote { text, category },
            Command::List { filter: Some(value) } => Action::ApplyFilter { value },
            Command::List { filter: None } => Action::ShowView,
            Command::Categories => Action::ListCategories,
            Command::Export { output } => Action::Export { path: output },
            Command::Import { file } => Action::Import { path: file },
            Command::Sync => Action::SyncNow,
            Command::Shell => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["quote-manager", "add", "Stay hungry.", "Life"]).unwrap();
        assert_eq!(
            cli.command.and_then(Command::into_action),
            Some(Action::AddQuote {
                text: "Stay hungry.".to_string(),
                category: "Life".to_string()
            })
        );
    }

    #[test]
    fn test_parse_list_with_filter() {
        let cli = Cli::try_parse_from(["quote-manager", "list", "--filter", "all"]).unwrap();
        assert_eq!(
            cli.command.and_then(Command::into_action),
            Some(Action::ApplyFilter {
                value: "all".to_string()
            })
        );
    }

    #[test]
    fn test_export_defaults_to_quotes_json() {
        let cli = Cli::try_parse_from(["quote-manager", "export"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Export {
                output: PathBuf::from("quotes.json")
            })
        );
    }

    #[test]
    fn test_shell_has_no_action() {
        let cli = Cli::try_parse_from(["quote-manager", "-vv", "shell"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.command.and_then(Command::into_action), None);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["quote-manager"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_last_is_shell_only() {
        assert!(Cli::try_parse_from(["quote-manager", "last"]).is_err());
        assert_eq!(Action::parse_line("/last"), Ok(Action::ShowLast));
    }
}
