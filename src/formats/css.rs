//! CSS formatting via a block-structure parse.
//!
//! Parses the sheet into ordered (selector, item-list) blocks — nesting
//! covers at-rules like `@media` — and re-emits one declaration per line
//! with the opening brace on the selector line and the closing brace aligned
//! under the selector. Strings and comments are honored while scanning, so
//! `;`, `{`, and `}` inside them split nothing. Unmatched braces in either
//! direction are fatal.

use crate::error::ParseError;
use crate::format::StructuralFormatter;
use crate::language::Language;

const DEFAULT_INDENT: usize = 2;

enum Item {
    Declaration(String),
    Comment(String),
    Block(Block),
}

struct Block {
    selector: String,
    items: Vec<Item>,
}

pub struct CssFormatter {
    indent_width: usize,
}

impl CssFormatter {
    pub fn new() -> CssFormatter {
        CssFormatter {
            indent_width: DEFAULT_INDENT,
        }
    }

    pub fn with_indent(indent_width: usize) -> CssFormatter {
        CssFormatter { indent_width }
    }
}

impl Default for CssFormatter {
    fn default() -> CssFormatter {
        CssFormatter::new()
    }
}

impl StructuralFormatter for CssFormatter {
    fn language(&self) -> Language {
        Language::Css
    }

    fn format(&self, text: &str) -> Result<String, ParseError> {
        let mut parser = Parser { text, pos: 0 };
        let items = parser.items(0)?;
        if items.is_empty() {
            return Err(ParseError::at_offset(text, 0, "no content to format"));
        }
        let rendered: Vec<String> = items
            .iter()
            .map(|item| render_item(item, 0, self.indent_width))
            .collect();
        Ok(rendered.join("\n\n"))
    }
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
}

impl Parser<'_> {
    /// Parse items until a closing brace (depth > 0) or end of input.
    fn items(&mut self, depth: usize) -> Result<Vec<Item>, ParseError> {
        let mut items = Vec::new();
        // Accumulates selector or declaration text until a structural char.
        let mut pending = String::new();
        loop {
            let Some(ch) = self.peek() else {
                if !pending.trim().is_empty() {
                    items.push(Item::Declaration(normalize_declaration(&pending)));
                }
                if depth > 0 {
                    return Err(ParseError::at_offset(
                        self.text,
                        self.text.len(),
                        "unclosed block",
                    ));
                }
                return Ok(items);
            };
            match ch {
                '/' if self.rest().starts_with("/*") => {
                    let comment = self.take_comment();
                    if pending.trim().is_empty() {
                        items.push(Item::Comment(comment.to_string()));
                    } else {
                        pending.push_str(comment);
                    }
                }
                '"' | '\'' => {
                    let literal = self.take_string(ch);
                    pending.push_str(literal);
                }
                '{' => {
                    let selector = normalize_text(&pending);
                    if selector.is_empty() {
                        return Err(ParseError::at_offset(
                            self.text,
                            self.pos,
                            "block without selector",
                        ));
                    }
                    pending.clear();
                    self.pos += 1;
                    let children = self.items(depth + 1)?;
                    items.push(Item::Block(Block {
                        selector,
                        items: children,
                    }));
                }
                '}' => {
                    if depth == 0 {
                        return Err(ParseError::at_offset(
                            self.text,
                            self.pos,
                            "unmatched closing brace",
                        ));
                    }
                    if !pending.trim().is_empty() {
                        items.push(Item::Declaration(normalize_declaration(&pending)));
                    }
                    self.pos += 1;
                    return Ok(items);
                }
                ';' => {
                    if !pending.trim().is_empty() {
                        items.push(Item::Declaration(normalize_declaration(&pending)));
                    }
                    pending.clear();
                    self.pos += 1;
                }
                _ => {
                    pending.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &str {
        &self.text[self.pos..]
    }

    /// Consume `/* ... */` (or the rest of the input if unterminated).
    fn take_comment(&mut self) -> &str {
        let start = self.pos;
        let end = match self.rest()[2..].find("*/") {
            Some(idx) => self.pos + 2 + idx + 2,
            None => self.text.len(),
        };
        self.pos = end;
        &self.text[start..end]
    }

    /// Consume a quoted string, honoring backslash escapes. Unterminated
    /// strings run to end of input.
    fn take_string(&mut self, quote: char) -> &str {
        let start = self.pos;
        let mut i = self.pos + quote.len_utf8();
        while i < self.text.len() {
            let Some(ch) = self.text[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();
            if ch == '\\' {
                if let Some(next) = self.text[i..].chars().next() {
                    i += next.len_utf8();
                }
            } else if ch == quote {
                break;
            }
        }
        self.pos = i;
        &self.text[start..i]
    }
}

/// Collapse whitespace runs to single spaces.
fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical `property: value;` form.
fn normalize_declaration(raw: &str) -> String {
    let raw = raw.trim();
    match raw.split_once(':') {
        Some((property, value)) => format!(
            "{}: {};",
            normalize_text(property),
            normalize_text(value)
        ),
        None => format!("{};", normalize_text(raw)),
    }
}

fn render_item(item: &Item, depth: usize, width: usize) -> String {
    let pad = " ".repeat(depth * width);
    match item {
        Item::Comment(text) => format!("{pad}{text}"),
        Item::Declaration(decl) => format!("{pad}{decl}"),
        Item::Block(block) => {
            let mut out = format!("{pad}{} {{", block.selector);
            for child in &block.items {
                out.push('\n');
                out.push_str(&render_item(child, depth + 1, width));
            }
            out.push('\n');
            out.push_str(&pad);
            out.push('}');
            out
        }
    }
}
