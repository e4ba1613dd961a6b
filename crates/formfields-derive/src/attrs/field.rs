//! Field- and variant-level attribute definitions.

use proc_macro2::Span;

/// Processed field attributes.
#[derive(Debug)]
pub struct FieldAttrs {
    pub span: Span,
    /// Raw annotation string, parsed at runtime.
    pub annotation: Option<String>,
    /// Inline the field's own fields into the enclosing record.
    pub inline: bool,
    /// Replacement for the declared name.
    pub rename: Option<String>,
}

impl FieldAttrs {
    pub fn new(span: Span) -> Self {
        Self {
            span,
            annotation: None,
            inline: false,
            rename: None,
        }
    }
}

/// Processed enum variant attributes.
#[derive(Debug, Default)]
pub struct VariantAttrs {
    pub rename: Option<String>,
}
