//! Attribute parsing functions.
//!
//! Container and variant attributes use `parse_nested_meta`. Field
//! attributes additionally accept the annotation string on its own, as in
//! `#[form("label=Full Name")]` or `#[form = "label=Full Name"]`.

use syn::spanned::Spanned;
use syn::{Attribute, Expr, ExprLit, Field, Lit, LitStr, Meta, Variant};

use super::container::ContainerAttrs;
use super::field::{FieldAttrs, VariantAttrs};
use super::types::RenameStrategy;

const ATTR: &str = "form";

/// Parse container-level attributes from `#[form(...)]`.
pub fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut result = ContainerAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                let value: LitStr = meta.value()?.parse()?;
                result.rename_all = match RenameStrategy::parse(&value.value()) {
                    Some(strategy) => strategy,
                    None => {
                        return Err(syn::Error::new_spanned(
                            value,
                            "invalid rename_all value, expected one of: PascalCase, camelCase, kebab-case, snake_case, lowercase, UPPERCASE, none",
                        ));
                    }
                };
                Ok(())
            } else {
                Err(meta.error("unknown container attribute, expected `rename_all`"))
            }
        })?;
    }

    Ok(result)
}

/// Parse field-level attributes from every `#[form ...]` on `field`.
///
/// Multiple attributes are merged; a second annotation string is an error.
pub fn parse_field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut result = FieldAttrs::new(
        field
            .ident
            .as_ref()
            .map(|i| i.span())
            .unwrap_or_else(|| field.span()),
    );

    for attr in &field.attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }
        result.span = attr.span();

        match &attr.meta {
            Meta::NameValue(name_value) => {
                let lit = expect_str_lit(&name_value.value)?;
                set_annotation(&mut result, lit)?;
            }
            Meta::List(list) => {
                if let Ok(lit) = list.parse_args::<LitStr>() {
                    set_annotation(&mut result, lit)?;
                } else {
                    attr.parse_nested_meta(|meta| parse_field_meta(&meta, &mut result))?;
                }
            }
            Meta::Path(path) => {
                return Err(syn::Error::new_spanned(
                    path,
                    "expected `#[form(\"...\")]`, `#[form = \"...\"]` or `#[form(...)]`",
                ));
            }
        }
    }

    Ok(result)
}

fn parse_field_meta(meta: &syn::meta::ParseNestedMeta, result: &mut FieldAttrs) -> syn::Result<()> {
    let ident = meta.path.get_ident().map(|i| i.to_string());

    match ident.as_deref() {
        Some("tag") | Some("annotation") => {
            let lit: LitStr = meta.value()?.parse()?;
            set_annotation(result, lit)
        }
        Some("inline") | Some("embed") => {
            result.inline = if meta.input.peek(syn::Token![=]) {
                let lit: syn::LitBool = meta.value()?.parse()?;
                lit.value()
            } else {
                true
            };
            Ok(())
        }
        Some("rename") => {
            if result.rename.is_some() {
                return Err(meta.error("duplicate `rename` attribute"));
            }
            let lit: LitStr = meta.value()?.parse()?;
            result.rename = Some(lit.value());
            Ok(())
        }
        _ => Err(syn::Error::new(
            meta.path.span(),
            "unknown form attribute, expected one of: tag, inline, embed, rename",
        )),
    }
}

/// Parse variant-level attributes for `#[derive(FormValue)]` enums.
pub fn parse_variant_attrs(variant: &Variant) -> syn::Result<VariantAttrs> {
    let mut result = VariantAttrs::default();

    for attr in &variant.attrs {
        if !attr.path().is_ident(ATTR) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                result.rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown variant attribute, expected `rename`"))
            }
        })?;
    }

    Ok(result)
}

fn set_annotation(result: &mut FieldAttrs, lit: LitStr) -> syn::Result<()> {
    if result.annotation.is_some() {
        return Err(syn::Error::new_spanned(
            lit,
            "duplicate form annotation; combine segments with `;` instead",
        ));
    }
    result.annotation = Some(lit.value());
    Ok(())
}

fn expect_str_lit(expr: &Expr) -> syn::Result<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Ok(s.clone()),
        other => Err(syn::Error::new_spanned(
            other,
            "expected a string literal annotation",
        )),
    }
}
