//! glint — language-aware text analysis and reformatting
//!
//!     This crate is the engine a code editor calls with raw text and a
//!     filename hint. It answers with a language tag, an ordered list of
//!     classified spans for highlighting, or a fully reformatted replacement
//!     string. It is a pure library: no file I/O, no retained references
//!     into the host's buffers, no shared mutable state between calls. The
//!     CLI binary is the only shell-aware code.
//!
//! Architecture
//!
//!     - detect: filename extension mapping with content-sniff fallback
//!     - rules: per-language rule tables, loaded once into static state
//!     - scan: rule-driven single-pass tokenizer (a lexical classifier,
//!       not a parser)
//!     - format + formats/<variant>: StructuralFormatter implementations,
//!       one per language family
//!     - registry: FormatRegistry for discovery and dispatch
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── language.rs
//!     ├── detect.rs
//!     ├── token.rs
//!     ├── rules.rs
//!     ├── scan.rs
//!     ├── format.rs           # StructuralFormatter trait definition
//!     ├── registry.rs         # FormatRegistry for discovery and dispatch
//!     ├── formats
//!     │   ├── json.rs
//!     │   ├── markup.rs       # XML and HTML
//!     │   ├── python.rs
//!     │   ├── css.rs
//!     │   └── javascript.rs
//!     └── lib.rs
//!
//! Guarantees
//!
//!     Detection and tokenization are total: they never fail, and the spans
//!     returned for any input are ordered, non-overlapping, and cover every
//!     character. Formatting is all-or-nothing: a variant returns either the
//!     complete replacement text or a located error, never a partial edit.
//!     Rule tables and the default registry are built once and read-only
//!     afterwards, so they may be shared across threads without locking.

pub mod detect;
pub mod error;
pub mod format;
pub mod formats;
pub mod language;
pub mod registry;
pub mod rules;
pub mod scan;
pub mod token;

pub use detect::detect;
pub use error::{FormatError, Location, ParseError};
pub use format::StructuralFormatter;
pub use language::Language;
pub use registry::FormatRegistry;
pub use scan::tokenize;
pub use token::{Span, TokenKind};

use once_cell::sync::Lazy;

/// Process-wide registry with the default formatter set.
static DEFAULT_REGISTRY: Lazy<FormatRegistry> = Lazy::new(FormatRegistry::with_defaults);

/// Detect the language of `text` from `filename` and reformat it using the
/// default registry. See [`FormatRegistry::auto_format`].
pub fn auto_format(text: &str, filename: &str) -> Result<String, FormatError> {
    DEFAULT_REGISTRY.auto_format(text, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_format_entry_point() {
        assert_eq!(auto_format("[1]", "a.json").unwrap(), "[\n  1\n]");
        assert_eq!(
            auto_format("hello", "notes.txt"),
            Err(FormatError::Unsupported(Language::PlainText))
        );
    }
}
