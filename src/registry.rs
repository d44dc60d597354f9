//! Formatter registry and dispatch.
//!
//! `FormatRegistry` maps each language to its structural formatter. Dispatch
//! distinguishes "no formatter available" (plain text, or any future gap)
//! from "the formatter rejected the input" — the caller always learns which,
//! and the original text is never partially rewritten.

use crate::detect::detect;
use crate::error::FormatError;
use crate::format::StructuralFormatter;
use crate::formats::{
    CssFormatter, JavaScriptFormatter, JsonFormatter, MarkupFormatter, PythonFormatter,
};
use crate::language::Language;
use std::collections::HashMap;

/// Registry of structural formatters, keyed by language.
pub struct FormatRegistry {
    formatters: HashMap<Language, Box<dyn StructuralFormatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry.
    pub fn new() -> FormatRegistry {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Create a registry with the default formatter set.
    pub fn with_defaults() -> FormatRegistry {
        let mut registry = FormatRegistry::new();
        registry.register(MarkupFormatter::new(Language::Xml));
        registry.register(MarkupFormatter::new(Language::Html));
        registry.register(JsonFormatter);
        registry.register(PythonFormatter);
        registry.register(CssFormatter::new());
        registry.register(JavaScriptFormatter);
        registry
    }

    /// Register a formatter. An existing formatter for the same language is
    /// replaced.
    pub fn register<F: StructuralFormatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.language(), Box::new(formatter));
    }

    /// Get the formatter for a language.
    pub fn get(&self, lang: Language) -> Option<&dyn StructuralFormatter> {
        self.formatters.get(&lang).map(|f| f.as_ref())
    }

    /// Check whether a language has a formatter.
    pub fn has(&self, lang: Language) -> bool {
        self.formatters.contains_key(&lang)
    }

    /// List all languages with a registered formatter (sorted by name).
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<_> = self.formatters.keys().copied().collect();
        languages.sort_by_key(|lang| lang.name());
        languages
    }

    /// Format `text` as an explicit language.
    pub fn format(&self, text: &str, lang: Language) -> Result<String, FormatError> {
        let formatter = self.get(lang).ok_or(FormatError::Unsupported(lang))?;
        formatter.format(text).map_err(FormatError::Malformed)
    }

    /// Detect the language of `text` from `filename`, then format it.
    pub fn auto_format(&self, text: &str, filename: &str) -> Result<String, FormatError> {
        self.format(text, detect(filename, text))
    }
}

impl Default for FormatRegistry {
    fn default() -> FormatRegistry {
        FormatRegistry::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    struct UpperFormatter;
    impl StructuralFormatter for UpperFormatter {
        fn language(&self) -> Language {
            Language::PlainText
        }
        fn format(&self, text: &str) -> Result<String, ParseError> {
            Ok(text.to_uppercase())
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        assert!(!registry.has(Language::PlainText));
        registry.register(UpperFormatter);
        assert!(registry.has(Language::PlainText));
        assert_eq!(
            registry.get(Language::PlainText).map(|f| f.language()),
            Some(Language::PlainText)
        );
    }

    #[test]
    fn test_defaults_cover_formattable_languages() {
        let registry = FormatRegistry::with_defaults();
        for lang in [
            Language::Xml,
            Language::Html,
            Language::Json,
            Language::Python,
            Language::Css,
            Language::JavaScript,
        ] {
            assert!(registry.has(lang), "missing formatter for {lang}");
        }
        assert!(!registry.has(Language::PlainText));
    }

    #[test]
    fn test_unsupported_language_is_reported() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.format("text", Language::PlainText),
            Err(FormatError::Unsupported(Language::PlainText))
        );
    }

    #[test]
    fn test_auto_format_uses_detection() {
        let registry = FormatRegistry::with_defaults();
        let out = registry.auto_format("[1,2]", "data.json").unwrap();
        assert_eq!(out, "[\n  1,\n  2\n]");
    }

    #[test]
    fn test_auto_format_plain_text_is_unsupported() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(
            registry.auto_format("some notes", "notes.txt"),
            Err(FormatError::Unsupported(Language::PlainText))
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = FormatRegistry::new();
        registry.register(UpperFormatter);
        registry.register(UpperFormatter);
        assert_eq!(registry.languages().len(), 1);
    }
}
