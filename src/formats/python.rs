//! Python-like indentation normalizer.
//!
//! A best-effort cosmetic pass, not a validator: a running depth counter is
//! driven by trailing colons and dedent keywords, with no expression parsing.
//! It never fails; on inconsistent input it formats as well as the depth
//! heuristic allows.

use crate::error::ParseError;
use crate::format::StructuralFormatter;
use crate::language::Language;

const INDENT: usize = 4;

/// Keywords that re-enter the enclosing block before their own line.
const DEDENT_BEFORE: &[&str] = &["elif", "else", "except", "finally"];
/// Statements that terminate their block after their own line.
const DEDENT_AFTER: &[&str] = &["return", "pass", "break", "continue", "raise"];

pub struct PythonFormatter;

impl StructuralFormatter for PythonFormatter {
    fn language(&self) -> Language {
        Language::Python
    }

    fn format(&self, text: &str) -> Result<String, ParseError> {
        let mut depth: usize = 0;
        // A block terminator already lowered the depth; the following
        // `else`/`elif`/`except`/`finally` must not lower it again.
        let mut dedent_consumed = false;
        let mut lines = Vec::new();
        for line in text.lines() {
            let stripped = line.trim();
            if stripped.is_empty() {
                lines.push(String::new());
                continue;
            }
            if starts_with_any(stripped, DEDENT_BEFORE) && !dedent_consumed {
                depth = depth.saturating_sub(1);
            }
            dedent_consumed = false;
            lines.push(format!("{}{}", " ".repeat(depth * INDENT), stripped));
            if code_of(stripped).ends_with(':') {
                depth += 1;
            } else if starts_with_any(stripped, DEDENT_AFTER) {
                depth = depth.saturating_sub(1);
                dedent_consumed = true;
            }
        }
        Ok(lines.join("\n"))
    }
}

fn starts_with_any(line: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        line.strip_prefix(keyword).map_or(false, |rest| {
            rest.chars()
                .next()
                .map_or(true, |c| !c.is_alphanumeric() && c != '_')
        })
    })
}

/// The code portion of a line: everything before a `#` comment that is not
/// inside a quoted string. Escapes are ignored; this is a heuristic pass.
fn code_of(line: &str) -> &str {
    let mut in_string: Option<char> = None;
    for (i, ch) in line.char_indices() {
        match in_string {
            Some(quote) => {
                if ch == quote {
                    in_string = None;
                }
            }
            None => match ch {
                '\'' | '"' => in_string = Some(ch),
                '#' => return line[..i].trim_end(),
                _ => {}
            },
        }
    }
    line
}
