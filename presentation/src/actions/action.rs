//! Action definitions and shell line parsing

use std::path::PathBuf;

/// Separator between text and category in `/add <text> | <category>`
const ADD_SEPARATOR: char = '|';

/// A user-triggered operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show quotes through the active filter
    ShowView,
    ShowRandom { category: Option<String> },
    ShowLast,
    AddQuote { text: String, category: String },
    ApplyFilter { value: String },
    ListCategories,
    Export { path: PathBuf },
    Import { path: PathBuf },
    SyncNow,
}

/// Shell input that is not a valid action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseActionError {
    UnknownCommand(String),
    Usage(&'static str),
}

impl std::fmt::Display for ParseActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseActionError::UnknownCommand(cmd) => {
                write!(f, "Unknown command: {} (type /help for available commands)", cmd)
            }
            ParseActionError::Usage(usage) => write!(f, "Usage: {}", usage),
        }
    }
}

impl Action {
    /// Parse a shell line such as `/filter Life` into an action.
    ///
    /// Shell-only commands (`/help`, `/quit`) are handled by the shell
    /// before this is called.
    pub fn parse_line(line: &str) -> Result<Self, ParseActionError> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        let rest_opt = (!rest.is_empty()).then(|| rest.to_string());

        match command {
            "/list" | "/ls" => Ok(Action::ShowView),
            "/random" | "/r" => Ok(Action::ShowRandom { category: rest_opt }),
            "/last" => Ok(Action::ShowLast),
            "/add" => {
                let (text, category) = rest
                    .rsplit_once(ADD_SEPARATOR)
                    .ok_or(ParseActionError::Usage("/add <text> | <category>"))?;
                Ok(Action::AddQuote {
                    text: text.to_string(),
                    category: category.to_string(),
                })
            }
            "/filter" | "/f" => {
                let value = rest_opt.ok_or(ParseActionError::Usage("/filter <category|all>"))?;
                Ok(Action::ApplyFilter { value })
            }
            "/categories" | "/cats" => Ok(Action::ListCategories),
            "/export" => Ok(Action::Export {
                path: PathBuf::from(rest_opt.as_deref().unwrap_or(quote_domain::EXPORT_FILE_NAME)),
            }),
            "/import" => {
                let path = rest_opt.ok_or(ParseActionError::Usage("/import <file>"))?;
                Ok(Action::Import {
                    path: PathBuf::from(path),
                })
            }
            "/sync" => Ok(Action::SyncNow),
            other => Err(ParseActionError::UnknownCommand(other.to_string())),
        }
    }
}
