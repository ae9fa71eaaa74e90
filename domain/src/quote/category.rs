//! Category index derived from a quote list

use super::entities::Quote;
use std::collections::HashSet;

/// Distinct categories of a quote list, in first-occurrence order.
///
/// Always derived on demand from the current quotes and never persisted,
/// so it cannot go stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<String>,
}

impl CategorySet {
    /// Derive the category set from `quotes`. O(n) per call.
    pub fn from_quotes<'a>(quotes: impl IntoIterator<Item = &'a Quote>) -> Self {
        let mut seen = HashSet::new();
        let mut categories = Vec::new();
        for quote in quotes {
            if seen.insert(quote.category()) {
                categories.push(quote.category().to_string());
            }
        }
        Self { categories }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.categories
    }
}

/// Convenience wrapper returning the categories as a plain vector.
pub fn categories_of(quotes: &[Quote]) -> Vec<String> {
    CategorySet::from_quotes(quotes).into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(category: &str) -> Quote {
        Quote::from_parts(format!("quote in {category}"), category)
    }

    #[test]
    fn test_first_occurrence_order_without_duplicates() {
        let quotes = vec![quote("A"), quote("B"), quote("A"), quote("C")];
        assert_eq!(categories_of(&quotes), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_collection() {
        let quotes: Vec<Quote> = Vec::new();
        let set = CategorySet::from_quotes(&quotes);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_contains_is_exact() {
        let quotes = vec![quote("Life")];
        let set = CategorySet::from_quotes(&quotes);
        assert!(set.contains("Life"));
        assert!(!set.contains("life"));
        assert!(!set.contains("Life "));
    }
}
