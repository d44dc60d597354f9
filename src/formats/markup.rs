//! XML/HTML formatting via an element-tree parse.
//!
//! The parser is tolerant in the directions common markup is sloppy:
//! self-closing tags, HTML void elements, and unclosed elements (implicitly
//! closed when an ancestor closes or at end of input) all parse. It fails
//! only on the fundamentally unbalanced case — a closing tag that matches
//! nothing open. Re-emission puts one tag-open, tag-close, or text node per
//! line, indents by nesting depth, and preserves attribute text verbatim in
//! its original order.

use crate::error::ParseError;
use crate::format::StructuralFormatter;
use crate::language::Language;

const DEFAULT_INDENT: usize = 2;

/// Elements that never take children in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link",
    "meta", "param", "source", "track", "wbr",
];

enum Node {
    Element(Element),
    /// Text content, whitespace-collapsed.
    Text(String),
    Comment(String),
    /// `<?...?>` declarations and processing instructions, kept verbatim.
    Declaration(String),
    /// `<!DOCTYPE ...>` and CDATA sections, kept verbatim.
    Verbatim(String),
}

struct Element {
    name: String,
    /// Raw attribute text, preserved verbatim in original order.
    attrs: String,
    self_closing: bool,
    children: Vec<Node>,
}

pub struct MarkupFormatter {
    language: Language,
    indent_width: usize,
}

impl MarkupFormatter {
    pub fn new(language: Language) -> MarkupFormatter {
        MarkupFormatter {
            language,
            indent_width: DEFAULT_INDENT,
        }
    }

    pub fn with_indent(language: Language, indent_width: usize) -> MarkupFormatter {
        MarkupFormatter {
            language,
            indent_width,
        }
    }
}

impl StructuralFormatter for MarkupFormatter {
    fn language(&self) -> Language {
        self.language
    }

    fn format(&self, text: &str) -> Result<String, ParseError> {
        let html = self.language == Language::Html;
        let nodes = parse(text, html)?;
        if nodes.is_empty() {
            return Err(ParseError::at_offset(text, 0, "no content to format"));
        }
        let mut out = String::new();
        for node in &nodes {
            emit(node, 0, self.indent_width, &mut out);
        }
        Ok(out.trim_end().to_string())
    }
}

fn parse(text: &str, html: bool) -> Result<Vec<Node>, ParseError> {
    let mut roots = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        match rest.find('<') {
            Some(lt) => {
                if lt > 0 {
                    push_text(&rest[..lt], &mut stack, &mut roots);
                }
                pos += lt;
            }
            None => {
                push_text(rest, &mut stack, &mut roots);
                break;
            }
        }

        let rest = &text[pos..];
        if rest.starts_with("<!--") {
            let end = rest.find("-->").map(|i| i + 3).unwrap_or(rest.len());
            push_node(Node::Comment(rest[..end].to_string()), &mut stack, &mut roots);
            pos += end;
        } else if rest.starts_with("<![CDATA[") {
            let end = rest.find("]]>").map(|i| i + 3).unwrap_or(rest.len());
            push_node(Node::Verbatim(rest[..end].to_string()), &mut stack, &mut roots);
            pos += end;
        } else if rest.starts_with("<!") {
            let end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
            push_node(Node::Verbatim(rest[..end].to_string()), &mut stack, &mut roots);
            pos += end;
        } else if rest.starts_with("<?") {
            let end = rest.find("?>").map(|i| i + 2).unwrap_or(rest.len());
            push_node(Node::Declaration(rest[..end].to_string()), &mut stack, &mut roots);
            pos += end;
        } else if rest.starts_with("</") {
            let end = tag_end(rest)
                .ok_or_else(|| ParseError::at_offset(text, pos, "unterminated closing tag"))?;
            let name = rest[2..end].trim();
            close_element(name, &mut stack, &mut roots)
                .map_err(|reason| ParseError::at_offset(text, pos, reason))?;
            pos += end + 1;
        } else {
            let end = tag_end(rest)
                .ok_or_else(|| ParseError::at_offset(text, pos, "unterminated tag"))?;
            let inner = &rest[1..end];
            let (inner, explicit_self_close) = match inner.strip_suffix('/') {
                Some(stripped) => (stripped, true),
                None => (inner, false),
            };
            let (name, attrs) = split_name(inner.trim());
            if name.is_empty() {
                return Err(ParseError::at_offset(text, pos, "missing tag name"));
            }
            let self_closing = explicit_self_close
                || (html && VOID_ELEMENTS.contains(&name.to_ascii_lowercase().as_str()));
            let element = Element {
                name: name.to_string(),
                attrs: attrs.to_string(),
                self_closing,
                children: Vec::new(),
            };
            if self_closing {
                push_node(Node::Element(element), &mut stack, &mut roots);
            } else {
                stack.push(element);
            }
            pos += end + 1;
        }
    }

    // Unclosed elements are tolerated: whatever is still open at end of
    // input closes implicitly, innermost first.
    while let Some(element) = stack.pop() {
        push_node(Node::Element(element), &mut stack, &mut roots);
    }
    Ok(roots)
}

fn push_node(node: Node, stack: &mut [Element], roots: &mut Vec<Node>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

fn push_text(raw: &str, stack: &mut [Element], roots: &mut Vec<Node>) {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !collapsed.is_empty() {
        push_node(Node::Text(collapsed), stack, roots);
    }
}

/// Close `name`, implicitly closing anything opened after it. A close that
/// matches nothing on the stack is the unbalanced case and is fatal.
fn close_element(
    name: &str,
    stack: &mut Vec<Element>,
    roots: &mut Vec<Node>,
) -> Result<(), String> {
    let Some(idx) = stack.iter().rposition(|e| e.name == name) else {
        return Err(format!("closing tag </{name}> without matching open"));
    };
    while stack.len() > idx {
        if let Some(element) = stack.pop() {
            push_node(Node::Element(element), stack, roots);
        }
    }
    Ok(())
}

/// Byte offset of the `>` terminating the tag that opens `rest`. A `>`
/// inside a quoted attribute value does not terminate the tag.
fn tag_end(rest: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (i, ch) in rest.char_indices() {
        match quote {
            Some(q) => {
                if ch == q {
                    quote = None;
                }
            }
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '>' => return Some(i),
                _ => {}
            },
        }
    }
    None
}

/// Split a tag body into its name and raw attribute text.
fn split_name(inner: &str) -> (&str, &str) {
    match inner.find(char::is_whitespace) {
        Some(idx) => (&inner[..idx], inner[idx..].trim()),
        None => (inner, ""),
    }
}

fn emit(node: &Node, depth: usize, indent_width: usize, out: &mut String) {
    let pad = " ".repeat(depth * indent_width);
    match node {
        Node::Text(text)
        | Node::Comment(text)
        | Node::Declaration(text)
        | Node::Verbatim(text) => {
            out.push_str(&pad);
            out.push_str(text);
            out.push('\n');
        }
        Node::Element(element) => {
            let attrs = if element.attrs.is_empty() {
                String::new()
            } else {
                format!(" {}", element.attrs)
            };
            if element.self_closing {
                out.push_str(&format!("{pad}<{}{}/>\n", element.name, attrs));
            } else if element.children.is_empty() {
                out.push_str(&format!("{pad}<{0}{1}></{0}>\n", element.name, attrs));
            } else {
                out.push_str(&format!("{pad}<{}{}>\n", element.name, attrs));
                for child in &element.children {
                    emit(child, depth + 1, indent_width, out);
                }
                out.push_str(&format!("{pad}</{}>\n", element.name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xml() -> MarkupFormatter {
        MarkupFormatter::new(Language::Xml)
    }

    #[test]
    fn test_nested_elements_indent() {
        let out = xml().format("<a><b/></a>").unwrap();
        assert_eq!(out, "<a>\n  <b/>\n</a>");
    }

    #[test]
    fn test_attributes_preserved_verbatim() {
        let out = xml().format("<a  z=\"1\"   y='2'><b/></a>").unwrap();
        assert_eq!(out, "<a z=\"1\"   y='2'>\n  <b/>\n</a>");
    }

    #[test]
    fn test_attribute_value_may_contain_gt() {
        let out = xml().format("<a t=\"x>y\"><b/></a>").unwrap();
        assert_eq!(out, "<a t=\"x>y\">\n  <b/>\n</a>");

        let out = xml().format("<a t='1 > 0'/>").unwrap();
        assert_eq!(out, "<a t='1 > 0'/>");
    }

    #[test]
    fn test_declaration_preserved() {
        let input = "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><r><x>v</x></r>";
        let out = xml().format(input).unwrap();
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n"));
    }

    #[test]
    fn test_unclosed_elements_close_at_end_of_input() {
        let out = xml().format("<a><b>text").unwrap();
        assert_eq!(out, "<a>\n  <b>\n    text\n  </b>\n</a>");
    }

    #[test]
    fn test_extra_close_is_fatal() {
        let err = xml().format("<a></a></b>").unwrap_err();
        assert!(err.reason.contains("</b>"));
        assert_eq!(err.location.line, 1);
        assert_eq!(err.location.column, 8);
    }

    #[test]
    fn test_html_void_elements_take_no_children() {
        let out = MarkupFormatter::new(Language::Html)
            .format("<div><br><span>x</span></div>")
            .unwrap();
        assert_eq!(
            out,
            "<div>\n  <br/>\n  <span>\n    x\n  </span>\n</div>"
        );
    }

    #[test]
    fn test_configurable_indent() {
        let out = MarkupFormatter::with_indent(Language::Xml, 4)
            .format("<a><b/></a>")
            .unwrap();
        assert_eq!(out, "<a>\n    <b/>\n</a>");
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(xml().format("   \n ").is_err());
    }
}
