//! Filter selection value object

use crate::quote::category::CategorySet;
use serde::{Deserialize, Serialize};

/// Stored value meaning "no category restriction"
pub const ALL_CATEGORIES: &str = "all";

/// The last-selected category filter
///
/// Persisted as a plain string: [`ALL_CATEGORIES`] or a category name.
/// A category literally named `all` is indistinguishable from the sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterSelection {
    #[default]
    All,
    Category(String),
}

impl FilterSelection {
    /// Parse a stored or user-supplied value
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    /// The value as it is persisted
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(category) => category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Re-validate against the live category set.
    ///
    /// A category that no longer exists falls back to [`FilterSelection::All`].
    pub fn resolve(self, categories: &CategorySet) -> Self {
        match self {
            Self::Category(category) if !categories.contains(&category) => Self::All,
            other => other,
        }
    }
}

impl From<String> for FilterSelection {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<FilterSelection> for String {
    fn from(selection: FilterSelection) -> Self {
        selection.as_str().to_string()
    }
}

impl std::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "All Categories"),
            Self::Category(category) => write!(f, "{}", category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::entities::Quote;

    fn categories(names: &[&str]) -> CategorySet {
        let quotes: Vec<Quote> = names
            .iter()
            .map(|name| Quote::from_parts("q", *name))
            .collect();
        CategorySet::from_quotes(&quotes)
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!(FilterSelection::parse("all"), FilterSelection::All);
        assert_eq!(
            FilterSelection::parse("Life"),
            FilterSelection::Category("Life".to_string())
        );
    }

    #[test]
    fn test_as_str_round_trip() {
        assert_eq!(FilterSelection::All.as_str(), "all");
        assert_eq!(FilterSelection::parse("Life").as_str(), "Life");
    }

    #[test]
    fn test_resolve_keeps_live_category() {
        let live = categories(&["Life", "Motivation"]);
        let selection = FilterSelection::parse("Life").resolve(&live);
        assert_eq!(selection, FilterSelection::Category("Life".to_string()));
    }

    #[test]
    fn test_resolve_falls_back_to_all() {
        let live = categories(&["Life", "Motivation"]);
        let selection = FilterSelection::parse("NoSuchCategory").resolve(&live);
        assert!(selection.is_all());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&FilterSelection::parse("Life")).unwrap();
        assert_eq!(json, "\"Life\"");
        let parsed: FilterSelection = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, FilterSelection::All);
    }
}
