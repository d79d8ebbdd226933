//! Implementation of the `#[derive(Record)]` macro.
//!
//! This macro generates an implementation of the `Record` trait and
//! attribute name constants for building selectors.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_search_attrs, ReadMode};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut names: Vec<String> = Vec::new();
    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        // Parse field attributes
        let search_attrs = parse_search_attrs(&field.attrs)?;
        if search_attrs.skip {
            continue;
        }

        // Determine the attribute name, rejecting case-insensitive clashes
        let attr_name = search_attrs
            .rename
            .unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_string());

        if names
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(&attr_name))
        {
            return Err(Error::new(
                search_attrs.span,
                format!("duplicate search attribute name '{}'", attr_name),
            ));
        }

        // Generate the name constant
        let const_name = format_ident!("{}", to_screaming_snake_case(&attr_name));
        field_constants.push(quote! {
            /// Attribute name constant for building `@` selectors.
            pub const #const_name: &'static str = #attr_name;
        });

        // Generate the match arm
        let value_expr = match search_attrs.mode {
            ReadMode::ToValue => quote! {
                ::gigasearch::ToValue::to_value(&self.#field_name)
            },
            ReadMode::Display => quote! {
                ::gigasearch::Value::Text(::std::string::ToString::to_string(&self.#field_name))
            },
        };
        field_matches.push(quote! {
            #attr_name => #value_expr,
        });

        names.push(attr_name);
    }

    // Generate the impl blocks
    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::gigasearch::Record for #struct_name #ty_generics #where_clause {
            fn field_names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn field_value(&self, field: &str) -> ::gigasearch::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::gigasearch::Value::Unavailable,
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_ascii_lowercase();
        }
    }

    result
}
