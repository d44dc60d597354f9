//! The structural formatter seam.

use crate::error::ParseError;
use crate::language::Language;

/// A reformatter for one language family.
///
/// `format` is a pure function from text to text: the variant reparses the
/// document just enough to re-emit it in canonical form, and either succeeds
/// with the complete replacement text or fails with a located error. It never
/// edits the input in place and never returns a partial result. Successful
/// output is a fixed point: feeding it back through the same variant returns
/// it unchanged.
pub trait StructuralFormatter: Send + Sync {
    /// The language this variant formats.
    fn language(&self) -> Language;

    /// Re-emit `text` in canonical form.
    fn format(&self, text: &str) -> Result<String, ParseError>;
}
