//! Error types for the formatting path.
//!
//! Detection and tokenization are total functions and have no error types;
//! only structural formatting can fail, and a failure always carries enough
//! location context for the host to surface a meaningful message.

use crate::language::Language;
use std::fmt;

/// 1-based line/column position within the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Location {
        Location { line, column }
    }

    /// Location of `byte_offset` within `text`. Offsets past the end resolve
    /// to the position just after the last character.
    pub fn of_offset(text: &str, byte_offset: usize) -> Location {
        let mut line = 1;
        let mut column = 1;
        for (i, ch) in text.char_indices() {
            if i >= byte_offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Failure reported by a structural formatter variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub location: Location,
    pub reason: String,
}

impl ParseError {
    pub fn new(location: Location, reason: impl Into<String>) -> ParseError {
        ParseError {
            location,
            reason: reason.into(),
        }
    }

    /// Error located at `byte_offset` within `text`.
    pub fn at_offset(text: &str, byte_offset: usize, reason: impl Into<String>) -> ParseError {
        ParseError::new(Location::of_offset(text, byte_offset), reason)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.reason)
    }
}

impl std::error::Error for ParseError {}

/// Failure reported by the format dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No structural formatter is registered for the detected language.
    Unsupported(Language),
    /// The chosen formatter rejected the input.
    Malformed(ParseError),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::Unsupported(lang) => write!(f, "no formatter available for {lang}"),
            FormatError::Malformed(err) => write!(f, "malformed input at {err}"),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<ParseError> for FormatError {
    fn from(err: ParseError) -> FormatError {
        FormatError::Malformed(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_of_offset() {
        let text = "ab\ncd";
        assert_eq!(Location::of_offset(text, 0), Location::new(1, 1));
        assert_eq!(Location::of_offset(text, 2), Location::new(1, 3));
        assert_eq!(Location::of_offset(text, 3), Location::new(2, 1));
        assert_eq!(Location::of_offset(text, 99), Location::new(2, 3));
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::new(Location::new(2, 5), "unexpected brace");
        assert_eq!(err.to_string(), "2:5: unexpected brace");

        let unsupported = FormatError::Unsupported(Language::PlainText);
        assert_eq!(
            unsupported.to_string(),
            "no formatter available for plain-text"
        );
    }
}
