//! Rule-driven tokenizer.
//!
//! A single left-to-right scan classifies the whole input into ordered,
//! non-overlapping spans that cover every character; unclassified characters
//! accumulate into `Plain` runs. This is a lexical classifier, not a parser:
//! the goal is a plausible, visually useful classification, so malformed
//! input degrades gracefully — an unterminated string or comment classifies
//! the rest of the text as that construct's kind through end of input.
//!
//! At each position, candidates are tried in a fixed order: comment starters,
//! string delimiters (longest delimiter first, as ordered in the rule table),
//! the numeric-literal pattern, keyword-vs-identifier on word boundaries, the
//! operator character table, and finally one character of `Plain` before
//! retrying. The scanner works on byte offsets internally and converts to
//! character offsets once at the end.

use crate::language::Language;
use crate::rules::{rules_for, HighlightRules, StringRule};
use crate::token::{Span, TokenKind};

/// Tokenize `text` for `lang`.
///
/// Spans are character-indexed; the union of the returned ranges is exactly
/// `[0, text.chars().count())`.
pub fn tokenize(text: &str, lang: Language) -> Vec<Span> {
    let mut scanner = Scanner {
        text,
        pos: 0,
        plain_start: None,
        spans: Vec::new(),
        rules: rules_for(lang),
    };
    scanner.run();
    to_char_spans(text, scanner.spans)
}

struct Scanner<'a> {
    text: &'a str,
    /// Byte offset of the scan head; always on a character boundary.
    pos: usize,
    /// Start of the current `Plain` run, if one is open.
    plain_start: Option<usize>,
    /// Byte-indexed spans, converted to character indices at the end.
    spans: Vec<Span>,
    rules: &'static HighlightRules,
}

impl Scanner<'_> {
    fn run(&mut self) {
        while self.pos < self.text.len() {
            if self.rules.markup {
                self.markup_step();
            } else {
                self.step();
            }
        }
        self.flush_plain();
    }

    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    /// Close the open `Plain` run, then emit one span ending at `end`.
    fn emit(&mut self, end: usize, kind: TokenKind) {
        self.flush_plain();
        self.spans.push(Span::new(self.pos, end, kind));
        self.pos = end;
    }

    fn flush_plain(&mut self) {
        if let Some(start) = self.plain_start.take() {
            self.spans.push(Span::new(start, self.pos, TokenKind::Plain));
        }
    }

    fn plain_char(&mut self, ch: char) {
        if self.plain_start.is_none() {
            self.plain_start = Some(self.pos);
        }
        self.pos += ch.len_utf8();
    }

    fn step(&mut self) {
        let rest = self.rest();
        if let Some(marker) = self.rules.line_comment {
            if rest.starts_with(marker) {
                let end = self.pos + rest.find('\n').unwrap_or(rest.len());
                self.emit(end, TokenKind::Comment);
                return;
            }
        }
        if let Some((open, close)) = self.rules.block_comment {
            if rest.starts_with(open) {
                let end = match rest[open.len()..].find(close) {
                    Some(idx) => self.pos + open.len() + idx + close.len(),
                    None => self.text.len(),
                };
                self.emit(end, TokenKind::Comment);
                return;
            }
        }
        for rule in self.rules.strings {
            if rest.starts_with(rule.delimiter) {
                let end = self.string_end(rule);
                self.emit(end, TokenKind::String);
                return;
            }
        }
        let Some(ch) = rest.chars().next() else {
            return;
        };
        if ch.is_ascii_digit() {
            if let Some(found) = self.rules.number.find(rest) {
                self.emit(self.pos + found.end(), TokenKind::Number);
                return;
            }
        }
        if ch.is_alphabetic() || ch == '_' {
            let end = self.pos + word_len(rest);
            let word = &self.text[self.pos..end];
            // A run glued to a preceding word character (as after a numeric
            // literal) is a word interior, never a keyword.
            let kind = if self.rules.keywords.contains(&word) && !self.after_word_char() {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            self.emit(end, kind);
            return;
        }
        if self.rules.operators.contains(ch) {
            let mut end = self.pos;
            for c in rest.chars() {
                if !self.rules.operators.contains(c) {
                    break;
                }
                end += c.len_utf8();
            }
            self.emit(end, TokenKind::Operator);
            return;
        }
        self.plain_char(ch);
    }

    fn after_word_char(&self) -> bool {
        self.text[..self.pos]
            .chars()
            .next_back()
            .map_or(false, |c| c.is_alphanumeric() || c == '_')
    }

    /// End offset of the string literal opening at `self.pos`.
    fn string_end(&self, rule: &StringRule) -> usize {
        let delim = rule.delimiter;
        let mut i = self.pos + delim.len();
        while i < self.text.len() {
            let rest = &self.text[i..];
            if rest.starts_with(delim) {
                return i + delim.len();
            }
            let Some(ch) = rest.chars().next() else {
                break;
            };
            if ch == '\n' && !rule.multiline {
                // Unterminated on its line: the construct stays open, so the
                // remainder of the input keeps the string's kind.
                return self.text.len();
            }
            if rule.escape == Some(ch) {
                i += ch.len_utf8();
                if let Some(next) = self.text[i..].chars().next() {
                    i += next.len_utf8();
                }
            } else {
                i += ch.len_utf8();
            }
        }
        self.text.len()
    }

    fn markup_step(&mut self) {
        let rest = self.rest();
        if let Some((open, close)) = self.rules.block_comment {
            if rest.starts_with(open) {
                let end = match rest[open.len()..].find(close) {
                    Some(idx) => self.pos + open.len() + idx + close.len(),
                    None => self.text.len(),
                };
                self.emit(end, TokenKind::Comment);
                return;
            }
        }
        if rest.starts_with('<') {
            self.scan_tag();
            return;
        }
        let Some(ch) = rest.chars().next() else {
            return;
        };
        self.plain_char(ch);
    }

    /// Classify a `<...>` tag body: quoted attribute values become `String`
    /// spans, everything else (name, attributes, brackets) is `Tag`.
    fn scan_tag(&mut self) {
        self.flush_plain();
        let mut segment_start = self.pos;
        let mut i = self.pos + 1;
        while i < self.text.len() {
            let rest = &self.text[i..];
            let Some(ch) = rest.chars().next() else {
                break;
            };
            match ch {
                '"' | '\'' => {
                    if segment_start < i {
                        self.spans.push(Span::new(segment_start, i, TokenKind::Tag));
                    }
                    let close = rest[1..]
                        .find(ch)
                        .map(|idx| i + 1 + idx + 1)
                        .unwrap_or(self.text.len());
                    self.spans.push(Span::new(i, close, TokenKind::String));
                    i = close;
                    segment_start = i;
                }
                '>' => {
                    i += 1;
                    break;
                }
                _ => i += ch.len_utf8(),
            }
        }
        if segment_start < i {
            self.spans.push(Span::new(segment_start, i, TokenKind::Tag));
        }
        self.pos = i;
    }
}

fn word_len(rest: &str) -> usize {
    rest.char_indices()
        .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(rest.len())
}

/// Convert byte-indexed spans to character-indexed spans. Spans arrive
/// ordered and contiguous, so one forward pass over the text suffices.
fn to_char_spans(text: &str, byte_spans: Vec<Span>) -> Vec<Span> {
    if text.is_ascii() {
        return byte_spans;
    }
    let mut offsets = CharOffsets {
        iter: text.chars(),
        byte: 0,
        ch: 0,
    };
    byte_spans
        .into_iter()
        .map(|span| {
            let start = offsets.advance_to(span.start);
            let end = offsets.advance_to(span.end);
            Span::new(start, end, span.kind)
        })
        .collect()
}

struct CharOffsets<'a> {
    iter: std::str::Chars<'a>,
    byte: usize,
    ch: usize,
}

impl CharOffsets<'_> {
    fn advance_to(&mut self, byte_offset: usize) -> usize {
        while self.byte < byte_offset {
            match self.iter.next() {
                Some(c) => {
                    self.byte += c.len_utf8();
                    self.ch += 1;
                }
                None => break,
            }
        }
        self.ch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str, lang: Language) -> Vec<(TokenKind, String)> {
        tokenize(text, lang)
            .into_iter()
            .map(|span| {
                let slice: String = text
                    .chars()
                    .skip(span.start)
                    .take(span.end - span.start)
                    .collect();
                (span.kind, slice)
            })
            .collect()
    }

    #[test]
    fn test_python_classification() {
        let toks = kinds("def f():\n    return 1", Language::Python);
        assert!(toks.contains(&(TokenKind::Keyword, "def".to_string())));
        assert!(toks.contains(&(TokenKind::Identifier, "f".to_string())));
        assert!(toks.contains(&(TokenKind::Keyword, "return".to_string())));
        assert!(toks.contains(&(TokenKind::Number, "1".to_string())));
    }

    #[test]
    fn test_json_classification() {
        let toks = kinds("{\"a\": 10, \"ok\": true}", Language::Json);
        assert!(toks.contains(&(TokenKind::String, "\"a\"".to_string())));
        assert!(toks.contains(&(TokenKind::Number, "10".to_string())));
        assert!(toks.contains(&(TokenKind::Keyword, "true".to_string())));
    }

    #[test]
    fn test_markup_tags_and_attribute_values() {
        let toks = kinds("<a href=\"x\">hi</a>", Language::Html);
        assert_eq!(
            toks,
            vec![
                (TokenKind::Tag, "<a href=".to_string()),
                (TokenKind::String, "\"x\"".to_string()),
                (TokenKind::Tag, ">".to_string()),
                (TokenKind::Plain, "hi".to_string()),
                (TokenKind::Tag, "</a>".to_string()),
            ]
        );
    }

    #[test]
    fn test_word_glued_to_number_is_not_a_keyword() {
        let toks = kinds("1def", Language::Python);
        assert_eq!(
            toks,
            vec![
                (TokenKind::Number, "1".to_string()),
                (TokenKind::Identifier, "def".to_string()),
            ]
        );
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let toks = kinds("# note\nx", Language::Python);
        assert_eq!(toks[0], (TokenKind::Comment, "# note".to_string()));
        assert_eq!(toks[1], (TokenKind::Plain, "\n".to_string()));
    }

    #[test]
    fn test_unterminated_block_comment_degrades() {
        let toks = kinds("a /* open", Language::JavaScript);
        assert_eq!(
            toks.last(),
            Some(&(TokenKind::Comment, "/* open".to_string()))
        );
    }

    #[test]
    fn test_non_ascii_spans_are_character_indexed() {
        let text = "é = \"ß\"";
        let spans = tokenize(text, Language::Python);
        assert_eq!(spans.last().map(|s| s.end), Some(text.chars().count()));
    }
}
