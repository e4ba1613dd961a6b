use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, Fields};

use crate::attrs::{parse_container_attrs, parse_variant_attrs};
use crate::form_gen::with_reflect_bounds;

pub fn generate_form_value_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;

    match &input.data {
        Data::Enum(data) => generate_enum_impl(input, data),
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
                let generics = with_reflect_bounds(&input.generics);
                let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
                Ok(quote! {
                    impl #impl_generics ::formfields::Reflect for #name #ty_generics #where_clause {
                        fn reflect(&self) -> ::formfields::Reflected<'_> {
                            ::formfields::Reflected::Deref(&self.0)
                        }
                    }
                })
            }
            _ => Err(syn::Error::new_spanned(
                name,
                "FormValue can only be derived for unit-only enums or newtype structs",
            )),
        },
        Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "FormValue can only be derived for unit-only enums or newtype structs",
        )),
    }
}

fn generate_enum_impl(input: &DeriveInput, data: &DataEnum) -> syn::Result<TokenStream> {
    let enum_name = &input.ident;
    let container = parse_container_attrs(&input.attrs)?;

    let mut arms = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "FormValue enums may only contain unit variants",
            ));
        }
        let attrs = parse_variant_attrs(variant)?;
        let ident = &variant.ident;
        let rendered = attrs
            .rename
            .unwrap_or_else(|| container.rename_all.apply(&ident.to_string()));
        arms.push(quote! { Self::#ident => #rendered });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let body = if arms.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            let rendered: &'static str = match self {
                #(#arms,)*
            };
            ::formfields::Reflected::Leaf(::formfields::Value::from(rendered))
        }
    };

    Ok(quote! {
        impl #impl_generics ::formfields::Reflect for #enum_name #ty_generics #where_clause {
            fn reflect(&self) -> ::formfields::Reflected<'_> {
                #body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(tokens: TokenStream) -> syn::Result<String> {
        let input: DeriveInput = syn::parse2(tokens)?;
        generate_form_value_impl(&input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn unit_enums_render_variant_names() {
        let expanded = expand(quote! {
            #[form(rename_all = "snake_case")]
            enum Role {
                SuperAdmin,
                #[form(rename = "member")]
                Regular,
            }
        })
        .unwrap();
        assert!(expanded.contains("\"super_admin\""));
        assert!(expanded.contains("\"member\""));
        assert!(!expanded.contains("\"regular\""));
    }

    #[test]
    fn newtypes_delegate() {
        let expanded = expand(quote! { struct Email(String); }).unwrap();
        assert!(expanded.contains("Deref"));
    }

    #[test]
    fn rejects_unsupported_shapes() {
        assert!(expand(quote! { enum Shape { Circle(f64) } }).is_err());
        assert!(expand(quote! { struct Pair(u8, u8); }).is_err());
        assert!(expand(quote! { struct Named { a: u8 } }).is_err());
    }
}
