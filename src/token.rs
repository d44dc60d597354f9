//! Span and token-kind data model shared by the tokenizer and its consumers.

use serde::{Deserialize, Serialize};

/// Syntactic category assigned to a span.
///
/// Orthogonal to [`crate::Language`]: the rule tables map each language's raw
/// lexical patterns onto this one closed set, and the host maps each kind to
/// a color through its own theme table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Keyword,
    String,
    Comment,
    Number,
    Identifier,
    Operator,
    /// Markup tag and attribute text.
    Tag,
    Plain,
}

/// A classified half-open character range within a document.
///
/// For any input, the tokenizer produces spans in ascending order, without
/// overlap, whose union is exactly `[0, len)` in characters — unclassified
/// ranges are covered by `Plain` spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Span {
        Span { start, end, kind }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
