//! Default seed collection

use super::entities::Quote;

/// The three quotes used when no collection has been persisted yet
pub fn default_quotes() -> Vec<Quote> {
    vec![
        Quote::from_parts(
            "The only way to do great work is to love what you do.",
            "Motivation",
        ),
        Quote::from_parts(
            "Life is what happens when you're busy making other plans.",
            "Life",
        ),
        Quote::from_parts(
            "Success is not the key to happiness. Happiness is the key to success.",
            "Success",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_three_valid_quotes() {
        let seed = default_quotes();
        assert_eq!(seed.len(), 3);
        for quote in &seed {
            assert!(Quote::new(quote.text(), quote.category()).is_ok());
        }
    }
}
