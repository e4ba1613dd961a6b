mod attrs;
mod form_gen;
mod value_gen;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives `Reflect` and `Record` for a struct with named fields.
///
/// Field attributes:
///
/// - `#[form("label=Full Name;id=name")]`, `#[form = "..."]` or
///   `#[form(tag = "...")]` attach an annotation string.
/// - `#[form(inline)]` (or `embed`) inlines a nested record's fields into
///   the enclosing record instead of prefixing them with the field name.
/// - `#[form(rename = "...")]` replaces the declared name.
///
/// The container accepts `#[form(rename_all = "PascalCase")]` and the other
/// usual case conventions.
#[proc_macro_derive(Form, attributes(form))]
pub fn derive_form(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match form_gen::generate_form_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derives a scalar `Reflect` for unit-only enums and newtype structs.
#[proc_macro_derive(FormValue, attributes(form))]
pub fn derive_form_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match value_gen::generate_form_value_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
