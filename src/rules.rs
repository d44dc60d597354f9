//! Per-language highlight rule tables.
//!
//! Pure data consumed by the scanner in [`crate::scan`]: keyword sets, string
//! delimiter rules, comment delimiters, a numeric-literal pattern, and the
//! operator character table. Tables live in process-wide read-only statics
//! and are never mutated after initialization, so they can be read from any
//! number of threads without locking. Adding a language means adding one
//! table here plus one detector mapping — the scanner itself is unchanged.

use crate::language::Language;
use once_cell::sync::Lazy;
use regex::Regex;

/// How one kind of string literal is delimited.
#[derive(Debug, Clone, Copy)]
pub struct StringRule {
    /// Opening delimiter; the closing delimiter is identical.
    pub delimiter: &'static str,
    /// Escape character honored inside the literal, if any.
    pub escape: Option<char>,
    /// Whether the literal may span line breaks. A non-multiline literal
    /// that reaches a newline unterminated degrades to end of input.
    pub multiline: bool,
}

/// The rule table for one language.
pub struct HighlightRules {
    /// Reserved words, classified `Keyword` on word boundaries.
    pub keywords: &'static [&'static str],
    /// Line comment starter; runs to the end of the line.
    pub line_comment: Option<&'static str>,
    /// Block comment delimiters; the body may span lines.
    pub block_comment: Option<(&'static str, &'static str)>,
    /// String literal rules, longest delimiter first.
    pub strings: &'static [StringRule],
    /// Anchored numeric-literal pattern.
    pub number: &'static Lazy<Regex>,
    /// Characters classified `Operator`.
    pub operators: &'static str,
    /// Markup mode: `<...>` tag bodies get `Tag` treatment and text between
    /// tags stays plain.
    pub markup: bool,
}

/// Shared numeric-literal pattern: decimal, float, exponent, hex, binary.
static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:0[xX][0-9a-fA-F]+|0[bB][01]+|\d+\.?\d*(?:[eE][+-]?\d+)?)")
        .expect("number pattern is valid")
});

/// Look up the rule table for a language.
pub fn rules_for(lang: Language) -> &'static HighlightRules {
    match lang {
        Language::PlainText => &PLAIN_TEXT,
        Language::Xml | Language::Html => &MARKUP,
        Language::Json => &JSON,
        Language::Python => &PYTHON,
        Language::Css => &CSS,
        Language::JavaScript => &JAVASCRIPT,
    }
}

const PYTHON_STRINGS: &[StringRule] = &[
    StringRule { delimiter: "\"\"\"", escape: None, multiline: true },
    StringRule { delimiter: "'''", escape: None, multiline: true },
    StringRule { delimiter: "\"", escape: Some('\\'), multiline: false },
    StringRule { delimiter: "'", escape: Some('\\'), multiline: false },
];

const JAVASCRIPT_STRINGS: &[StringRule] = &[
    StringRule { delimiter: "`", escape: Some('\\'), multiline: true },
    StringRule { delimiter: "\"", escape: Some('\\'), multiline: false },
    StringRule { delimiter: "'", escape: Some('\\'), multiline: false },
];

const JSON_STRINGS: &[StringRule] = &[
    StringRule { delimiter: "\"", escape: Some('\\'), multiline: false },
];

const CSS_STRINGS: &[StringRule] = &[
    StringRule { delimiter: "\"", escape: Some('\\'), multiline: false },
    StringRule { delimiter: "'", escape: Some('\\'), multiline: false },
];

// Plain text keeps only double-quoted strings: apostrophes in prose would
// otherwise open a string that swallows the rest of the document.
const PLAIN_STRINGS: &[StringRule] = &[
    StringRule { delimiter: "\"", escape: Some('\\'), multiline: false },
];

static PYTHON: HighlightRules = HighlightRules {
    keywords: &[
        "False", "None", "True", "and", "as", "assert", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for",
        "from", "global", "if", "import", "in", "is", "lambda", "nonlocal",
        "not", "or", "pass", "raise", "return", "try", "while", "with",
        "yield",
    ],
    line_comment: Some("#"),
    block_comment: None,
    strings: PYTHON_STRINGS,
    number: &NUMBER,
    operators: "+-*/%=<>!&|^~@:;,.()[]{}",
    markup: false,
};

static JAVASCRIPT: HighlightRules = HighlightRules {
    keywords: &[
        "async", "await", "break", "case", "catch", "class", "const",
        "continue", "default", "do", "else", "export", "extends", "false",
        "finally", "for", "function", "if", "import", "let", "new", "null",
        "return", "switch", "this", "throw", "true", "try", "typeof",
        "undefined", "var", "while",
    ],
    line_comment: Some("//"),
    block_comment: Some(("/*", "*/")),
    strings: JAVASCRIPT_STRINGS,
    number: &NUMBER,
    operators: "+-*/%=<>!&|^~?:;,.()[]{}",
    markup: false,
};

static JSON: HighlightRules = HighlightRules {
    keywords: &["false", "null", "true"],
    line_comment: None,
    block_comment: None,
    strings: JSON_STRINGS,
    number: &NUMBER,
    operators: "{}[]:,",
    markup: false,
};

static CSS: HighlightRules = HighlightRules {
    keywords: &[],
    line_comment: None,
    block_comment: Some(("/*", "*/")),
    strings: CSS_STRINGS,
    number: &NUMBER,
    operators: "{}()[]:;,.#>+~*=",
    markup: false,
};

static MARKUP: HighlightRules = HighlightRules {
    keywords: &[],
    line_comment: None,
    block_comment: Some(("<!--", "-->")),
    strings: &[],
    number: &NUMBER,
    operators: "",
    markup: true,
};

// Rules for unknown file types, carried over from the editor's generic
// highlighting: strings, numbers, hash comments, and a few literal words.
static PLAIN_TEXT: HighlightRules = HighlightRules {
    keywords: &["false", "no", "null", "off", "on", "true", "yes"],
    line_comment: Some("#"),
    block_comment: None,
    strings: PLAIN_STRINGS,
    number: &NUMBER,
    operators: "+-*/=<>!(){}[]",
    markup: false,
};
