//! `#[derive(Attrs)]` macro implementation.

use std::{collections::HashSet, convert::TryFrom};

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::spanned::Spanned as _;
use synthez::{ParseAttrs, ToTokens};

/// Expands `#[derive(Attrs)]` macro.
///
/// # Errors
///
/// - If `input` isn't a Rust struct definition;
/// - If failed to parse [`FieldAttrs`];
/// - If two fields are exposed under the same name.
pub fn derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input = syn::parse2::<syn::DeriveInput>(input)?;
    let definition = Definition::try_from(input)?;

    Ok(quote! { #definition })
}

/// Helper attributes of `#[derive(Attrs)]` macro placed on a struct field.
#[derive(Debug, Default, ParseAttrs)]
pub struct FieldAttrs {
    /// Name to expose the field under, instead of its Rust name.
    #[parse(value, alias = name)]
    pub rename: Option<syn::LitStr>,

    /// Indicator whether to hide this field.
    #[parse(ident, alias = skip)]
    pub ignore: Option<syn::Ident>,
}

/// Struct field exposed as an attribute.
#[derive(Debug)]
pub struct Field {
    /// Name the field is exposed under.
    pub name: syn::LitStr,

    /// Rust accessor of the field.
    pub member: syn::Member,
}

/// Representation of a struct implementing [`Attrs`], used for code
/// generation.
///
/// [`Attrs`]: maybetype_core::Attrs
#[derive(Debug, ToTokens)]
#[to_tokens(append(impl_attrs))]
pub struct Definition {
    /// [`syn::Ident`](struct@syn::Ident) of this structure's type.
    pub ident: syn::Ident,

    /// [`syn::Generics`] of this structure's type.
    pub generics: syn::Generics,

    /// Non-ignored [`Field`]s of this structure.
    pub fields: Vec<Field>,
}

impl TryFrom<syn::DeriveInput> for Definition {
    type Error = syn::Error;

    fn try_from(input: syn::DeriveInput) -> syn::Result<Self> {
        let data = if let syn::Data::Struct(data) = &input.data {
            data
        } else {
            return Err(syn::Error::new(
                input.span(),
                "expected struct only, enums and unions have no attributes",
            ));
        };

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(data.fields.len());
        for (index, field) in data.fields.iter().enumerate() {
            let parsed = if let Some(f) = Self::parse_field(index, field)? {
                f
            } else {
                continue;
            };
            if !seen.insert(parsed.name.value()) {
                return Err(syn::Error::new(
                    parsed.name.span(),
                    format!(
                        "duplicate attribute name `{}`",
                        parsed.name.value(),
                    ),
                ));
            }
            fields.push(parsed);
        }

        Ok(Self {
            ident: input.ident,
            generics: input.generics,
            fields,
        })
    }
}

impl Definition {
    /// Parses [`FieldAttrs`] of the given [`syn::Field`] at the `index`
    /// position.
    ///
    /// # Errors
    ///
    /// - If [`FieldAttrs`] failed to parse.
    fn parse_field(
        index: usize,
        field: &syn::Field,
    ) -> syn::Result<Option<Field>> {
        let attrs = FieldAttrs::parse_attrs("attr", field)?;
        if attrs.ignore.is_some() {
            return Ok(None);
        }

        let member = field.ident.clone().map_or_else(
            || syn::Member::Unnamed(index.into()),
            syn::Member::Named,
        );
        let name = attrs.rename.unwrap_or_else(|| {
            let name = match &member {
                syn::Member::Named(ident) => {
                    let name = ident.to_string();
                    name.strip_prefix("r#").unwrap_or(&name).to_owned()
                }
                syn::Member::Unnamed(idx) => idx.index.to_string(),
            };
            syn::LitStr::new(&name, Span::call_site())
        });

        Ok(Some(Field { name, member }))
    }

    /// Generates code to derive [`Attrs`] trait.
    ///
    /// [`Attrs`]: maybetype_core::Attrs
    #[must_use]
    pub fn impl_attrs(&self) -> TokenStream {
        let ty = &self.ident;
        let (impl_gens, ty_gens, where_clause) = self.generics.split_for_impl();

        let arms = self.fields.iter().map(|Field { name, member }| {
            quote! {
                #name => ::core::option::Option::Some(
                    ::maybetype::private::erase(&self.#member)
                ),
            }
        });

        quote! {
            #[automatically_derived]
            impl #impl_gens ::maybetype::Attrs for #ty #ty_gens #where_clause {
                fn attr(
                    &self,
                    name: &str,
                ) -> ::core::option::Option<&dyn ::core::any::Any> {
                    match name {
                        #( #arms )*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        }
    }
}
