//! GigaSearch - schema-free search over in-memory record collections.
//!
//! GigaSearch filters and ranks collections of arbitrary records with a
//! small, regex-based query language. Nothing is declared up front: the
//! engine discovers searchable attributes through the [`Record`] trait at
//! query time. It supports:
//!
//! - Boolean search: `||` between OR-groups, `&&` between terms
//! - Field selectors: `term@FieldName` scopes a term to one attribute
//! - Noise-tolerant matching: spaces, hyphens, slashes and parentheses are
//!   ignored on both sides
//! - Exact mode: normalized equality instead of containment
//! - Relevance ranking by total match count
//!
//! # Quick Start
//!
//! ```rust
//! use gigasearch::{Number, Record, Value};
//!
//! struct Customer {
//!     id: u32,
//!     name: String,
//!     city: String,
//! }
//!
//! impl Record for Customer {
//!     fn field_names() -> &'static [&'static str] {
//!         &["Id", "Name", "City"]
//!     }
//!
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "Id" => Value::Number(Number::from(self.id)),
//!             "Name" => Value::String(&self.name),
//!             "City" => Value::String(&self.city),
//!             _ => Value::Unavailable,
//!         }
//!     }
//! }
//!
//! let customers = vec![
//!     Customer { id: 52, name: "Ann Lee".into(), city: "New York".into() },
//!     Customer { id: 7, name: "Bo 52".into(), city: "Boston".into() },
//!     Customer { id: 9, name: "John Smith".into(), city: "New-York".into() },
//! ];
//!
//! // Field-scoped term
//! let found = gigasearch::search("52@id", &customers, false).unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name, "Ann Lee");
//!
//! // AND inside a group, OR between groups; formatting is ignored
//! let found = gigasearch::search("newyork@city&&john||boston", &customers, false).unwrap();
//! let ids: Vec<u32> = found.iter().map(|c| c.id).collect();
//! assert_eq!(ids, vec![7, 9]);
//!
//! // Ranking by relevance
//! let ranked = gigasearch::rank("new york", &customers, true);
//! assert_eq!(ranked.len(), 2);
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (every term of group 1 matches) ∨ (every term of group 2 matches) ∨ ...
//! ```
//!
//! - A blank query returns the input unchanged.
//! - Results keep input order and contain each input element at most once.
//! - A selector that names no attribute stays in the pattern as text.
//! - Parenthesized groups are not supported; they produce a [`Warning`] and
//!   the query runs with the parentheses treated as formatting.
//! - A pattern that does not compile is a [`SearchError`]; ranking falls back
//!   to literal matching instead.

mod cache;
mod error;
mod noise;
mod parser;
mod query;
mod rank;
mod record;
mod report;
mod searcher;
mod term;
mod value;

// Re-export public API
pub use cache::PatternCache;
pub use error::{Result, SearchError};
pub use noise::{is_noise, normalize, strip_noise, NOISE_CHARS};
pub use parser::{has_grouping, is_blank, parse, parse_term, ParsedQuery, TermSpec};
pub use query::Query;
pub use rank::{compare_scores, Ranking, Scored};
pub use record::{fields, resolve_field, Record};
pub use report::{Reporter, TracingReporter, Warning};
pub use searcher::{Found, SearchOptions, Searcher};
pub use term::{FieldMatch, Term};
pub use value::{Number, ToValue, Value};

#[cfg(feature = "derive")]
pub use gigasearch_macros::Record;

/// Boolean search with default settings.
///
/// Returns references into `records`, in input order. A blank query returns
/// every record. Warnings go to `tracing`.
pub fn search<'a, T: Record>(query: &str, records: &'a [T], exact: bool) -> Result<Vec<&'a T>> {
    Searcher::new()
        .exact(exact)
        .search(query, records)
        .map(Found::into_items)
}

/// Boolean search returning owned clones.
pub fn search_cloned<T: Record + Clone>(
    query: &str,
    records: &[T],
    exact: bool,
) -> Result<Vec<T>> {
    Searcher::new()
        .exact(exact)
        .search(query, records)
        .map(Found::into_cloned)
}

/// Relevance search with default settings, best first.
///
/// Equal scores keep input order. Never fails.
pub fn rank<'a, T: Record>(query: &str, records: &'a [T], include_partial: bool) -> Vec<&'a T> {
    Searcher::new()
        .include_partial(include_partial)
        .rank(query, records)
        .into_items()
}
