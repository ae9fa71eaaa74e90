//! Domain error types

use thiserror::Error;

/// Which user-supplied field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Text,
    Category,
}

impl std::fmt::Display for QuoteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuoteField::Text => write!(f, "text"),
            QuoteField::Category => write!(f, "category"),
        }
    }
}

/// User-supplied quote text or category was empty after trimming.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please enter both quote and category ({field} is empty)")]
pub struct ValidationError {
    pub field: QuoteField,
}

impl ValidationError {
    pub fn empty(field: QuoteField) -> Self {
        Self { field }
    }
}

/// A quote payload is not a sequence of quote-shaped objects.
///
/// Carries the parser's message so it can be shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid file format: {message}")]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}
