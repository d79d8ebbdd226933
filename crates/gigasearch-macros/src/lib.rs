//! Procedural macros for GigaSearch.
//!
//! ## Derive Macros
//!
//! - [`Record`] - Generate the searchable attribute table of a struct

mod record;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `gigasearch::Record` trait.
///
/// Every named field becomes a searchable attribute unless skipped. Field
/// values are read through `gigasearch::ToValue`, which covers strings,
/// numbers, `bool`, `char` and `Option`s of those.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `skip` | Exclude this field from searches |
/// | `rename = "..."` | Use a custom attribute name for selectors |
/// | `display` | Read the field through `Display` instead of `ToValue` |
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Attribute name constants (e.g., `Customer::NAME`, `Customer::CITY`)
/// 2. Implementation of `Record::field_names()` and `Record::field_value()`
///
/// # Example
///
/// ```ignore
/// use gigasearch_macros::Record;
///
/// #[derive(Record)]
/// struct Customer {
///     id: u32,
///     name: String,
///     #[search(rename = "Town")]
///     city: String,
///     #[search(display)]
///     joined: Date,
///     #[search(skip)]
///     password_hash: String,
/// }
///
/// let found = gigasearch::search("52@id&&york@town", &customers, false)?;
/// ```
#[proc_macro_derive(Record, attributes(search))]
pub fn record_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::record_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
