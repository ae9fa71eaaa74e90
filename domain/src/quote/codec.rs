//! JSON codec for quote payloads
//!
//! Every payload coming from storage, an import file, or anywhere else
//! outside the process is untrusted. [`parse_quotes`] shape-checks each
//! element before anything is accepted, so a payload is either taken as a
//! whole or rejected as a whole.

use super::entities::Quote;
use crate::core::error::FormatError;
use serde_json::Value;

/// Conventional file name for exported collections
pub const EXPORT_FILE_NAME: &str = "quotes.json";

/// Parse a JSON array of `{ "text": string, "category": string }` objects.
///
/// Extra fields on an entry are ignored. Empty strings are accepted.
pub fn parse_quotes(bytes: &[u8]) -> Result<Vec<Quote>, FormatError> {
    let value: Value = serde_json::from_slice(bytes)?;

    let Value::Array(entries) = value else {
        return Err(FormatError::new("expected a JSON array of quotes"));
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| parse_entry(index, entry))
        .collect()
}

fn parse_entry(index: usize, entry: &Value) -> Result<Quote, FormatError> {
    let Value::Object(fields) = entry else {
        return Err(FormatError::new(format!(
            "entry {index} is not an object"
        )));
    };

    let field = |name: &str| -> Result<String, FormatError> {
        match fields.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(FormatError::new(format!(
                "entry {index}: field `{name}` is not a string"
            ))),
            None => Err(FormatError::new(format!(
                "entry {index}: missing field `{name}`"
            ))),
        }
    };

    Ok(Quote::from_parts(field("text")?, field("category")?))
}

/// Compact serialization used for storage
pub fn to_json(quotes: &[Quote]) -> serde_json::Result<String> {
    serde_json::to_string(quotes)
}

/// Pretty serialization (2-space indentation) used for export
pub fn to_pretty_json(quotes: &[Quote]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let payload = br#"[
            {"text": "A", "category": "X"},
            {"text": "B", "category": "Y", "author": "ignored"}
        ]"#;
        let quotes = parse_quotes(payload).unwrap();
        assert_eq!(
            quotes,
            vec![Quote::from_parts("A", "X"), Quote::from_parts("B", "Y")]
        );
    }

    #[test]
    fn test_parse_accepts_empty_strings() {
        let quotes = parse_quotes(br#"[{"text": "", "category": ""}]"#).unwrap();
        assert_eq!(quotes, vec![Quote::from_parts("", "")]);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_quotes(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_quotes(br#"{"text": "A", "category": "X"}"#).unwrap_err();
        assert!(err.message.contains("array"));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(parse_quotes(b"not json").is_err());
    }

    #[test]
    fn test_parse_rejects_whole_payload_on_one_bad_entry() {
        let payload = br#"[{"text": "A", "category": "X"}, {"text": "B"}]"#;
        let err = parse_quotes(payload).unwrap_err();
        assert_eq!(err.message, "entry 1: missing field `category`");
    }

    #[test]
    fn test_parse_rejects_non_string_field() {
        let err = parse_quotes(br#"[{"text": 42, "category": "X"}]"#).unwrap_err();
        assert_eq!(err.message, "entry 0: field `text` is not a string");
    }

    #[test]
    fn test_parse_rejects_non_object_entry() {
        let err = parse_quotes(br#"["just text"]"#).unwrap_err();
        assert_eq!(err.message, "entry 0 is not an object");
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let json = to_pretty_json(&[Quote::from_parts("A", "X")]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"text\": \"A\",\n    \"category\": \"X\"\n  }\n]"
        );
    }

    #[test]
    fn test_export_then_import_reproduces_collection() {
        let quotes = vec![
            Quote::from_parts("A", "X"),
            Quote::from_parts("B \"quoted\"", "Y"),
            Quote::from_parts("A", "X"),
        ];
        let parsed = parse_quotes(to_pretty_json(&quotes).unwrap().as_bytes()).unwrap();
        assert_eq!(parsed, quotes);
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let json = to_json(&[Quote::from_parts("A", "X"), Quote::from_parts("B", "Y")]).unwrap();
        assert_eq!(
            json,
            r#"[{"text":"A","category":"X"},{"text":"B","category":"Y"}]"#
        );
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
