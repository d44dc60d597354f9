//! JavaScript-like re-indentation.
//!
//! Brace/bracket-depth-driven and best-effort: each line is stripped and
//! re-indented from the running `{`/`[`/`(` balance, counted outside strings
//! and comments (block-comment state carries across lines). Leading closers
//! dedent their own line. No expression parsing, never fails.

use crate::error::ParseError;
use crate::format::StructuralFormatter;
use crate::language::Language;

const INDENT: usize = 2;

pub struct JavaScriptFormatter;

impl StructuralFormatter for JavaScriptFormatter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn format(&self, text: &str) -> Result<String, ParseError> {
        let mut depth: usize = 0;
        let mut in_block_comment = false;
        let mut lines = Vec::new();
        for line in text.lines() {
            let stripped = line.trim();
            if stripped.is_empty() {
                lines.push(String::new());
                continue;
            }
            let counts = count_brackets(stripped, &mut in_block_comment);
            let line_depth = depth.saturating_sub(counts.leading_closers);
            lines.push(format!("{}{}", " ".repeat(line_depth * INDENT), stripped));
            depth = (depth + counts.opens).saturating_sub(counts.closes);
        }
        Ok(lines.join("\n"))
    }
}

struct BracketCounts {
    opens: usize,
    closes: usize,
    /// Closers seen before any other non-whitespace token on the line.
    leading_closers: usize,
}

fn count_brackets(line: &str, in_block_comment: &mut bool) -> BracketCounts {
    let mut counts = BracketCounts {
        opens: 0,
        closes: 0,
        leading_closers: 0,
    };
    let mut at_line_start = true;
    let mut in_string: Option<char> = None;
    let mut escaped = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if *in_block_comment {
            if ch == '*' && chars.peek() == Some(&'/') {
                chars.next();
                *in_block_comment = false;
            }
            continue;
        }
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == quote {
                in_string = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => {
                in_string = Some(ch);
                at_line_start = false;
            }
            '/' if chars.peek() == Some(&'/') => break,
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                *in_block_comment = true;
            }
            '{' | '[' | '(' => {
                counts.opens += 1;
                at_line_start = false;
            }
            '}' | ']' | ')' => {
                counts.closes += 1;
                if at_line_start {
                    counts.leading_closers += 1;
                }
            }
            c if c.is_whitespace() => {}
            _ => at_line_start = false,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reindents_brace_blocks() {
        let input = "function f() {\nif (x) {\nreturn 1;\n}\nreturn 2;\n}";
        let out = JavaScriptFormatter.format(input).unwrap();
        assert_eq!(
            out,
            "function f() {\n  if (x) {\n    return 1;\n  }\n  return 2;\n}"
        );
    }

    #[test]
    fn test_leading_closer_chain_dedents_once_each() {
        let input = "const a = [{\nb: 1,\n}];";
        let out = JavaScriptFormatter.format(input).unwrap();
        assert_eq!(out, "const a = [{\n    b: 1,\n}];");
    }

    #[test]
    fn test_braces_in_strings_are_ignored() {
        let input = "const s = \"{\";\nconst t = 1;";
        let out = JavaScriptFormatter.format(input).unwrap();
        assert_eq!(out, "const s = \"{\";\nconst t = 1;");
    }

    #[test]
    fn test_block_comment_state_carries_across_lines() {
        let input = "/* {\n{\n*/\nx = 1;";
        let out = JavaScriptFormatter.format(input).unwrap();
        assert_eq!(out, "/* {\n{\n*/\nx = 1;");
    }

    #[test]
    fn test_never_fails_on_unbalanced_input() {
        assert!(JavaScriptFormatter.format("}}}").is_ok());
    }
}
