//! Console output formatter for quotes, filters and sync results

use colored::Colorize;
use quote_application::{RandomDraw, Refresh, SyncOutcome};
use quote_domain::{CategorySet, FilterSelection, FilterView, Quote};

/// Formats quote manager output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// A single quote: text on one line, category dimmed
    pub fn quote(quote: &Quote) -> String {
        format!(
            "\"{}\" {}",
            quote.text(),
            format!("- {}", quote.category()).dimmed()
        )
    }

    /// Quotes visible through `filter`
    pub fn view(filter: &FilterSelection, view: &FilterView) -> String {
        let mut output = Self::section_header(&format!("Showing: {}", filter));

        match view {
            FilterView::Quotes(quotes) => {
                for quote in quotes {
                    output.push_str(&format!("  * {}\n", Self::quote(quote)));
                }
                output.push_str(&format!(
                    "{}\n",
                    format!("{} quote(s)", quotes.len()).dimmed()
                ));
            }
            FilterView::NoQuotes => {
                output.push_str(&format!(
                    "  {}\n",
                    "No quotes available in this category.".yellow()
                ));
            }
            FilterView::EmptyCollection => {
                output.push_str(&format!(
                    "  {}
",
                    "No quotes yet. Add one with /add or import a file.".yellow()
                ));
            }
        }

        output
    }

    /// Category list, marking the active filter
    pub fn categories(categories: &CategorySet, active: &FilterSelection) -> String {
        let mut output = Self::section_header("Categories");

        let marker = |selected: bool| if selected { "*".green().bold() } else { " ".normal() };
        output.push_str(&format!(
            "{} {}\n",
            marker(active.is_all()),
            "All Categories".bold()
        ));
        for category in categories.iter() {
            output.push_str(&format!(
                "{} {}\n",
                marker(active.as_str() == category && !active.is_all()),
                category
            ));
        }

        output
    }

    /// Notice followed by the refreshed filter view
    pub fn refreshed(notice: &str, refresh: &Refresh) -> String {
        format!(
            "{}\n{}",
            Self::notice(notice),
            Self::view(&refresh.filter, &refresh.view)
        )
    }

    pub fn random(draw: &RandomDraw) -> String {
        match draw {
            RandomDraw::Drawn(quote) => Self::quote(quote),
            RandomDraw::NoQuotes => "No quotes found in this category.".yellow().to_string(),
        }
    }

    pub fn last_viewed(quote: Option<&Quote>) -> String {
        match quote {
            Some(quote) => format!("{} \"{}\"", "Last viewed:".cyan().bold(), quote.text()),
            None => "No quote viewed in this session.".dimmed().to_string(),
        }
    }

    /// Status line for a sync outcome
    pub fn sync(outcome: &SyncOutcome) -> String {
        match outcome {
            SyncOutcome::Merged(report) if report.conflicts > 0 => {
                Self::warning(&report.message())
            }
            SyncOutcome::Merged(report) => Self::notice(&report.message()),
            SyncOutcome::NoServerData { .. } | SyncOutcome::Skipped => {
                outcome.message().dimmed().to_string()
            }
        }
    }

    pub fn notice(message: &str) -> String {
        format!("{} {}", "v".green().bold(), message)
    }

    pub fn warning(message: &str) -> String {
        format!("{} {}", "!".yellow().bold(), message.yellow())
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "x".red().bold(), message.red())
    }

    fn section_header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain<T>(f: impl FnOnce() -> T) -> T {
        colored::control::set_override(false);
        f()
    }

    #[test]
    fn test_quote_line() {
        let text = plain(|| ConsoleFormatter::quote(&Quote::from_parts("A", "X")));
        assert_eq!(text, "\"A\" - X");
    }

    #[test]
    fn test_empty_view_message() {
        let text = plain(|| ConsoleFormatter::view(&FilterSelection::All, &FilterView::NoQuotes));
        assert!(text.contains("No quotes available in this category."));
    }

    #[test]
    fn test_empty_collection_message_differs_from_empty_filter() {
        let text = plain(|| {
            ConsoleFormatter::view(&FilterSelection::All, &FilterView::EmptyCollection)
        });
        assert!(text.contains("No quotes yet."));
        assert!(!text.contains("in this category"));
    }

    #[test]
    fn test_categories_mark_active_filter() {
        let quotes = vec![Quote::from_parts("A", "Life"), Quote::from_parts("B", "Work")];
        let set = CategorySet::from_quotes(&quotes);
        let text = plain(|| ConsoleFormatter::categories(&set, &FilterSelection::parse("Work")));

        assert!(text.contains("* Work"));
        assert!(text.contains("  Life"));
        assert!(text.contains("  All Categories"));
    }

    #[test]
    fn test_last_viewed() {
        let quote = Quote::from_parts("A", "X");
        let text = plain(|| ConsoleFormatter::last_viewed(Some(&quote)));
        assert_eq!(text, "Last viewed: \"A\"");
    }
}
