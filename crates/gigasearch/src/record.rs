//! The record capability and attribute resolution.
//!
//! This module provides the [`Record`] trait, which is implemented by the
//! `#[derive(Record)]` macro, and [`resolve_field`], which maps a
//! user-typed field name onto the canonical attribute name.

use crate::value::Value;

/// Trait for types that can be searched.
///
/// A record exposes a fixed, per-type table of attribute names and reads
/// one attribute at a time by canonical name. This trait is typically
/// derived using `#[derive(Record)]` from the `gigasearch-macros` crate, but
/// can also be implemented manually.
///
/// # Derive Usage
///
/// ```ignore
/// use gigasearch_macros::Record;
///
/// #[derive(Record)]
/// struct Customer {
///     id: u32,
///     name: String,
///     #[search(skip)]
///     password_hash: String,
/// }
///
/// let customers = vec![Customer { id: 52, name: "Ann".into(), password_hash: String::new() }];
/// let found = gigasearch::search("52@id", &customers, false).unwrap();
/// assert_eq!(found.len(), 1);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use gigasearch::{Number, Record, Value};
///
/// struct Customer {
///     id: u32,
///     name: String,
/// }
///
/// impl Record for Customer {
///     fn field_names() -> &'static [&'static str] {
///         &["id", "name"]
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "id" => Value::Number(Number::from(self.id)),
///             "name" => Value::String(&self.name),
///             _ => Value::Unavailable,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the canonical names of every searchable attribute, in
    /// declaration order.
    fn field_names() -> &'static [&'static str]
    where
        Self: Sized;

    /// Returns the value of one attribute.
    ///
    /// `field` is always one of [`Record::field_names`] when called by the
    /// engine. Return [`Value::Unavailable`] for attributes this particular
    /// record cannot provide (for instance an enum variant lacking it).
    fn field_value(&self, field: &str) -> Value<'_>;
}

/// Resolves a field name to the canonical attribute name of `T`.
///
/// The comparison is case-insensitive. Returns `None` when `T` has no such
/// attribute; callers fall back to searching every attribute.
pub fn resolve_field<T: Record>(name: &str) -> Option<&'static str> {
    T::field_names()
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Iterates over `(name, value)` pairs for every attribute of a record.
pub fn fields<T: Record>(record: &T) -> impl Iterator<Item = (&'static str, Value<'_>)> {
    T::field_names()
        .iter()
        .map(move |name| (*name, record.field_value(name)))
}
