//! Quote entity

use crate::core::error::{QuoteField, ValidationError};
use serde::{Deserialize, Serialize};

/// A single quote (Value Object)
///
/// Quotes have no identifier. For merge purposes a quote is identified by
/// its `text`, compared exactly (case and whitespace sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    text: String,
    category: String,
}

impl Quote {
    /// Create a quote from user input.
    ///
    /// Both fields are trimmed; either one being empty afterwards is a
    /// [`ValidationError`].
    pub fn new(
        text: impl AsRef<str>,
        category: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let text = text.as_ref().trim();
        let category = category.as_ref().trim();

        if text.is_empty() {
            return Err(ValidationError::empty(QuoteField::Text));
        }
        if category.is_empty() {
            return Err(ValidationError::empty(QuoteField::Category));
        }

        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// Build a quote from already-structured data without validation.
    ///
    /// Used for imported files and remote batches, which accept empty fields.
    pub fn from_parts(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Get the quote text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the quote category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether this quote belongs to `category` (exact match)
    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" [{}]", self.text, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let quote = Quote::new("  Stay hungry.  ", "\tLife\n").unwrap();
        assert_eq!(quote.text(), "Stay hungry.");
        assert_eq!(quote.category(), "Life");
    }

    #[test]
    fn test_new_rejects_blank_text() {
        let err = Quote::new("   ", "Life").unwrap_err();
        assert_eq!(err.field, QuoteField::Text);
    }

    #[test]
    fn test_new_rejects_blank_category() {
        let err = Quote::new("Stay hungry.", "").unwrap_err();
        assert_eq!(err.field, QuoteField::Category);
    }

    #[test]
    fn test_from_parts_allows_empty_fields() {
        let quote = Quote::from_parts("", "");
        assert_eq!(quote.text(), "");
        assert_eq!(quote.category(), "");
    }

    #[test]
    fn test_display() {
        let quote = Quote::from_parts("A", "X");
        assert_eq!(quote.to_string(), "\"A\" [X]");
    }
}
