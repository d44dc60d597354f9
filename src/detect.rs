//! Language detection from filename extension and content sniffing.
//!
//! The extension is the primary signal; unknown or missing extensions fall
//! through to structural content heuristics tried in a fixed priority order
//! (markup > JSON > Python > CSS > JavaScript > plain text) where the first
//! match wins. Detection is pure and total: it never fails, and unresolvable
//! input yields [`Language::PlainText`].

use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// A `{ ... }` rule block containing a `:` declaration.
static CSS_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{[^{}]*:[^{}]*\}").expect("css block pattern is valid")
});

/// Detect the language of a document from its filename and a content sample.
pub fn detect(filename: &str, content_sample: &str) -> Language {
    if let Some(lang) = detect_from_extension(filename) {
        return lang;
    }
    detect_from_content(content_sample)
}

fn detect_from_extension(filename: &str) -> Option<Language> {
    let ext = Path::new(filename).extension()?.to_str()?;
    Language::from_extension(&ext.to_ascii_lowercase())
}

/// Content sniffing, used when the extension is absent or unknown.
pub fn detect_from_content(sample: &str) -> Language {
    let trimmed = sample.trim();
    if trimmed.is_empty() {
        return Language::PlainText;
    }
    if let Some(lang) = sniff_markup(trimmed) {
        return lang;
    }
    if sniff_json(trimmed) {
        return Language::Json;
    }
    if sniff_python(sample) {
        return Language::Python;
    }
    if sniff_css(sample) {
        return Language::Css;
    }
    if sniff_javascript(sample) {
        return Language::JavaScript;
    }
    Language::PlainText
}

fn sniff_markup(trimmed: &str) -> Option<Language> {
    if !trimmed.starts_with('<') {
        return None;
    }
    if trimmed.starts_with("<?xml") {
        return Some(Language::Xml);
    }
    // Leading '<' plus a closing construct anywhere is enough to call it markup.
    if !trimmed.contains("</") && !trimmed.contains("/>") {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("<!doctype html") || lower.contains("<html") {
        return Some(Language::Html);
    }
    Some(Language::Xml)
}

fn sniff_json(trimmed: &str) -> bool {
    (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<serde_json::Value>(trimmed).is_ok()
}

fn sniff_python(sample: &str) -> bool {
    sample.lines().any(|line| {
        let stmt = line.trim_start();
        stmt.starts_with("def ") || stmt.starts_with("import ")
    })
}

fn sniff_css(sample: &str) -> bool {
    CSS_BLOCK.is_match(sample)
}

fn sniff_javascript(sample: &str) -> bool {
    sample.contains("=>")
        || sample.lines().any(|line| {
            let stmt = line.trim_start();
            stmt.starts_with("function ")
                || stmt.starts_with("const ")
                || stmt.starts_with("let ")
                || stmt.starts_with("var ")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_beats_content() {
        // Extension wins even when the content looks like something else.
        assert_eq!(detect("data.json", "def main(): pass"), Language::Json);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(detect("INDEX.HTML", ""), Language::Html);
    }

    #[test]
    fn test_dotted_directories_are_not_extensions() {
        assert_eq!(detect("bundle.d/notes", ""), Language::PlainText);
    }

    #[test]
    fn test_xml_declaration_sniff() {
        assert_eq!(
            detect("buffer", "<?xml version=\"1.0\" encoding=\"utf-8\"?>"),
            Language::Xml
        );
    }

    #[test]
    fn test_markup_beats_json_heuristics() {
        // Fixed priority order: markup is tried before JSON.
        let sample = "<data>{\"a\": 1}</data>";
        assert_eq!(detect("buffer", sample), Language::Xml);
    }

    #[test]
    fn test_unresolvable_falls_back_to_plain_text() {
        assert_eq!(detect("", ""), Language::PlainText);
        assert_eq!(detect("README", "just words"), Language::PlainText);
    }
}
