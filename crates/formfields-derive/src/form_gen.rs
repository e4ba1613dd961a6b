use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Generics, Visibility};

use crate::attrs::{ContainerAttrs, parse_container_attrs, parse_field_attrs};

/// A named struct field, ready for code generation.
struct FieldInfo {
    span: proc_macro2::Span,
    ident: syn::Ident,
    name: String,
    annotation: String,
    inline: bool,
    visible: bool,
}

impl FieldInfo {
    fn from_field(field: &syn::Field, container: &ContainerAttrs) -> syn::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let attrs = parse_field_attrs(field)?;
        let declared = ident.unraw().to_string();
        let name = match attrs.rename {
            Some(rename) => rename,
            None => container.rename_all.apply(&declared),
        };

        Ok(Self {
            span: attrs.span,
            ident,
            name,
            annotation: attrs.annotation.unwrap_or_default(),
            inline: attrs.inline,
            visible: !matches!(field.vis, Visibility::Inherited),
        })
    }

    fn component(&self) -> TokenStream {
        let ident = &self.ident;
        let name = &self.name;
        let annotation = &self.annotation;
        let inline = self.inline;
        let visible = self.visible;
        quote_spanned! {self.span=>
            ::formfields::Component::new(#name, &self.#ident)
                .with_annotation(#annotation)
                .embedded(#inline)
                .visible(#visible)
        }
    }
}

pub fn generate_form_impl(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let container = parse_container_attrs(&input.attrs)?;

    let components: Vec<TokenStream> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(|field| FieldInfo::from_field(field, &container).map(|info| info.component()))
                .collect::<syn::Result<_>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Form requires named fields; use #[derive(FormValue)] for newtype wrappers",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Form can only be derived for structs; use #[derive(FormValue)] for enums",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Form can only be derived for structs, not unions",
            ));
        }
    };

    let generics = with_reflect_bounds(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::formfields::Reflect for #struct_name #ty_generics #where_clause {
            fn reflect(&self) -> ::formfields::Reflected<'_> {
                ::formfields::Reflected::Record(self)
            }
        }

        impl #impl_generics ::formfields::Record for #struct_name #ty_generics #where_clause {
            fn components(&self) -> ::std::vec::Vec<::formfields::Component<'_>> {
                ::std::vec![#(#components),*]
            }
        }
    })
}

/// Adds a `Reflect` bound to every type parameter.
pub fn with_reflect_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(syn::parse_quote!(::formfields::Reflect));
    }
    generics
}
