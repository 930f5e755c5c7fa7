//! Vault JSON parsing

use serde_json::Value;
use tracing::debug;

use super::VaultEntry;
use crate::error::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a vault export into entries, preserving array order
///
/// The document must be a JSON array of objects, each with a string `url`.
/// A missing or null `description` becomes an empty string.
pub fn parse_entries(data: &[u8]) -> Result<Vec<VaultEntry>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let document: Value = serde_json::from_slice(data)?;
    let items = match document {
        Value::Array(items) => items,
        other => {
            return Err(Error::malformed(format!(
                "expected a JSON array of entries, found {}",
                json_type_name(&other)
            )));
        }
    };

    let entries = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let entry: VaultEntry = serde_json::from_value(item)
                .map_err(|e| Error::malformed(format!("entry {}: {}", index, e)))?;

            // A line break would split one URL across playlist lines
            if entry.url.contains(['\n', '\r']) {
                return Err(Error::malformed(format!(
                    "entry {}: url contains a line break",
                    index
                )));
            }
            Ok(entry)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} vault entries", entries.len());
    Ok(entries)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn entry(description: &str, url: &str) -> VaultEntry {
        VaultEntry {
            description: description.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_parse_preserves_order() {
        let data = br#"[
            {"description": "A", "url": "http://x/a.mp3"},
            {"description": "B", "url": "http://x/b.mp3"},
            {"description": "C", "url": "http://x/c.mp3"}
        ]"#;

        let entries = parse_entries(data).unwrap();
        let urls: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, ["http://x/a.mp3", "http://x/b.mp3", "http://x/c.mp3"]);
        assert_eq!(entries[1].description, "B");
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(parse_entries(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let entries = parse_entries(br#"[{"url": "http://x/a.mp3"}]"#).unwrap();
        assert_eq!(entries, vec![entry("", "http://x/a.mp3")]);
    }

    #[test]
    fn test_null_description_defaults_to_empty() {
        let entries = parse_entries(br#"[{"description": null, "url": "http://x/a.mp3"}]"#).unwrap();
        assert_eq!(entries, vec![entry("", "http://x/a.mp3")]);
    }

    #[test]
    fn test_null_url_is_malformed() {
        let err = parse_entries(br#"[{"description": "A", "url": null}]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let data = br#"[{"description": "A", "url": "http://x/a.mp3", "tags": ["x"], "id": 7}]"#;
        let entries = parse_entries(data).unwrap();
        assert_eq!(entries, vec![entry("A", "http://x/a.mp3")]);
    }

    #[test]
    fn test_missing_url_is_malformed() {
        let data = br#"[{"description": "A", "url": "http://x/a.mp3"}, {"description": "B"}]"#;
        let err = parse_entries(data).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().contains("entry 1"));
    }

    #[test]
    fn test_non_array_is_malformed() {
        let err = parse_entries(br#"{"url": "http://x/a.mp3"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = parse_entries(b"[{\"url\": ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_non_object_element_is_malformed() {
        let err = parse_entries(br#"["http://x/a.mp3"]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_url_with_line_break_is_malformed() {
        let err = parse_entries(br#"[{"url": "http://x/a.mp3\nhttp://x/b.mp3"}]"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_leading_bom_is_skipped() {
        let entries = parse_entries(b"\xEF\xBB\xBF[{\"url\": \"http://x/a.mp3\"}]").unwrap();
        assert_eq!(entries.len(), 1);
    }
}
