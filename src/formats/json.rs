//! JSON formatting via a full value-tree parse.
//!
//! Unlike highlighting, this path has zero tolerance: any grammar violation
//! (unterminated string, trailing comma, invalid literal) is a located
//! `ParseError`. Object keys keep their insertion order — serde_json is
//! built with the `preserve_order` feature — and re-emission uses 2-space
//! indentation with no trailing commas.

use crate::error::{Location, ParseError};
use crate::format::StructuralFormatter;
use crate::language::Language;
use serde_json::Value;

pub struct JsonFormatter;

impl StructuralFormatter for JsonFormatter {
    fn language(&self) -> Language {
        Language::Json
    }

    fn format(&self, text: &str) -> Result<String, ParseError> {
        let value: Value = serde_json::from_str(text).map_err(|err| {
            ParseError::new(Location::new(err.line(), err.column()), reason_of(&err))
        })?;
        serde_json::to_string_pretty(&value)
            .map_err(|err| ParseError::new(Location::new(1, 1), err.to_string()))
    }
}

/// serde_json appends " at line L column C" to its messages; the location is
/// carried separately in `ParseError`, so strip the suffix.
fn reason_of(err: &serde_json::Error) -> String {
    let msg = err.to_string();
    match msg.rfind(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindents_nested_values() {
        let out = JsonFormatter.format("{\"a\":1,\"b\":[1,2]}").unwrap();
        assert_eq!(out, "{\n  \"a\": 1,\n  \"b\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let out = JsonFormatter.format("{\"zeta\":1,\"alpha\":2}").unwrap();
        let zeta = out.find("zeta").unwrap();
        let alpha = out.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_truncated_object_is_located() {
        let err = JsonFormatter.format("{\"a\":1,").unwrap_err();
        assert_eq!(err.location.line, 1);
        assert!(err.location.column >= 7);
        assert!(!err.reason.contains(" at line "));
    }

    #[test]
    fn test_trailing_comma_is_rejected() {
        assert!(JsonFormatter.format("[1, 2,]").is_err());
    }
}
