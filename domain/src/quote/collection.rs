//! Quote collection aggregate

use super::category::CategorySet;
use super::entities::Quote;
use serde::{Deserialize, Serialize};

/// Ordered list of quotes.
///
/// Insertion order is preserved; the only in-place change is a full
/// replacement done by the sync merge. Duplicate texts and categories are
/// allowed and never deduplicated here. There is no removal operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteCollection {
    quotes: Vec<Quote>,
}

impl QuoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    /// Append a quote at the end
    pub fn push(&mut self, quote: Quote) {
        self.quotes.push(quote);
    }

    /// Append quotes at the end, keeping their order
    pub fn append(&mut self, quotes: impl IntoIterator<Item = Quote>) {
        self.quotes.extend(quotes);
    }

    /// Index of the first quote whose text equals `text` exactly
    pub fn position_by_text(&self, text: &str) -> Option<usize> {
        self.quotes.iter().position(|q| q.text() == text)
    }

    /// Replace the quote at `index`, returning the previous value.
    ///
    /// Returns `None` (and leaves the collection untouched) when `index`
    /// is out of range.
    pub fn replace_at(&mut self, index: usize, quote: Quote) -> Option<Quote> {
        let slot = self.quotes.get_mut(index)?;
        Some(std::mem::replace(slot, quote))
    }

    /// Derive the current category set
    pub fn categories(&self) -> CategorySet {
        CategorySet::from_quotes(&self.quotes)
    }

    /// Quotes whose category equals `category`, in collection order
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Quote> + 'a {
        self.quotes.iter().filter(move |q| q.is_in(category))
    }

    pub fn into_vec(self) -> Vec<Quote> {
        self.quotes
    }
}

impl From<Vec<Quote>> for QuoteCollection {
    fn from(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }
}

impl FromIterator<Quote> for QuoteCollection {
    fn from_iter<I: IntoIterator<Item = Quote>>(iter: I) -> Self {
        Self {
            quotes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a QuoteCollection {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}
