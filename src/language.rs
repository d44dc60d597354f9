//! The closed set of languages the engine understands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Language tag attached to a document at detect/format time.
///
/// The set is closed on purpose: every consumer dispatches with an exhaustive
/// `match`, so adding a language is one new variant, one rule-table entry in
/// [`crate::rules`], and one detector mapping — never an open-ended `if`
/// chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    PlainText,
    Xml,
    Html,
    Json,
    Python,
    Css,
    JavaScript,
}

impl Language {
    /// Map a lowercased file extension (without the dot) to a language.
    pub fn from_extension(ext: &str) -> Option<Language> {
        match ext {
            "xml" => Some(Language::Xml),
            "html" | "htm" => Some(Language::Html),
            "json" => Some(Language::Json),
            "py" => Some(Language::Python),
            "css" => Some(Language::Css),
            "js" | "jsx" => Some(Language::JavaScript),
            _ => None,
        }
    }

    /// Short lowercase name, used by the CLI and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Language::PlainText => "plain-text",
            Language::Xml => "xml",
            Language::Html => "html",
            Language::Json => "json",
            Language::Python => "python",
            Language::Css => "css",
            Language::JavaScript => "javascript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
