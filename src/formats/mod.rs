//! Structural formatter implementations, one per language family.
//!
//! Two of the variants are strict (markup and JSON reject malformed input
//! with a located error); the Python-like and JavaScript-like variants are
//! deliberate best-effort normalizers that always produce output.

pub mod css;
pub mod javascript;
pub mod json;
pub mod markup;
pub mod python;

pub use css::CssFormatter;
pub use javascript::JavaScriptFormatter;
pub use json::JsonFormatter;
pub use markup::MarkupFormatter;
pub use python::PythonFormatter;
