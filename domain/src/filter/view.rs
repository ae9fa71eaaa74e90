//! Filtered view over a quote collection

use super::selection::FilterSelection;
use crate::quote::collection::QuoteCollection;
use crate::quote::entities::Quote;

/// Quotes visible through a filter.
///
/// An empty result is never an empty list: [`FilterView::NoQuotes`] means
/// the filter matched nothing, [`FilterView::EmptyCollection`] means there
/// are no quotes at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterView {
    Quotes(Vec<Quote>),
    /// The collection has quotes but none in the selected category
    NoQuotes,
    EmptyCollection,
}

impl FilterView {
    /// Apply `selection` to `collection`
    pub fn apply(collection: &QuoteCollection, selection: &FilterSelection) -> Self {
        if collection.is_empty() {
            return Self::EmptyCollection;
        }

        let quotes: Vec<Quote> = match selection {
            FilterSelection::All => collection.iter().cloned().collect(),
            FilterSelection::Category(category) => {
                collection.in_category(category).cloned().collect()
            }
        };

        if quotes.is_empty() {
            Self::NoQuotes
        } else {
            Self::Quotes(quotes)
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        match self {
            Self::Quotes(quotes) => quotes,
            Self::NoQuotes | Self::EmptyCollection => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        !matches!(self, Self::Quotes(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection() -> QuoteCollection {
        vec![
            Quote::from_parts("A", "Life"),
            Quote::from_parts("B", "Motivation"),
            Quote::from_parts("C", "Life"),
        ]
        .into()
    }

    #[test]
    fn test_all_returns_everything() {
        let view = FilterView::apply(&collection(), &FilterSelection::All);
        assert_eq!(view.quotes(), collection().as_slice());
    }

    #[test]
    fn test_category_returns_subsequence() {
        let view = FilterView::apply(&collection(), &FilterSelection::parse("Life"));
        let texts: Vec<&str> = view.quotes().iter().map(Quote::text).collect();
        assert_eq!(texts, vec!["A", "C"]);
    }

    #[test]
    fn test_empty_view_is_signalled() {
        let view = FilterView::apply(&collection(), &FilterSelection::parse("Unknown"));
        assert_eq!(view, FilterView::NoQuotes);
        assert!(view.is_empty());

        let view = FilterView::apply(&QuoteCollection::new(), &FilterSelection::All);
        assert_eq!(view, FilterView::EmptyCollection);
        assert!(view.is_empty());
        assert_ne!(view, FilterView::NoQuotes);
    }

    #[test]
    fn test_empty_collection_wins_over_category() {
        let view = FilterView::apply(&QuoteCollection::new(), &FilterSelection::parse("Life"));
        assert_eq!(view, FilterView::EmptyCollection);
    }
}
