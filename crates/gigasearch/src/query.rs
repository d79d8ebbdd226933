//! Compiled boolean queries and their evaluation.
//!
//! A [`Query`] is an OR-list of AND-groups of compiled [`Term`]s. Each
//! AND-group narrows the input progressively: the first term filters the
//! whole collection, every later term filters only what the previous term
//! kept. Group results are unioned; each input element appears at most once
//! and results keep input order.

use crate::cache::{compile_with, PatternCache};
use crate::error::Result;
use crate::parser::{parse, ParsedQuery};
use crate::record::Record;
use crate::report::Warning;
use crate::term::Term;

/// A parsed and compiled boolean query.
///
/// # Example
///
/// ```
/// use gigasearch::{Number, Query, Record, Value};
///
/// struct Office {
///     id: u32,
///     city: &'static str,
/// }
///
/// impl Record for Office {
///     fn field_names() -> &'static [&'static str] {
///         &["id", "city"]
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "id" => Value::Number(Number::from(self.id)),
///             "city" => Value::String(self.city),
///             _ => Value::Unavailable,
///         }
///     }
/// }
///
/// let offices = vec![
///     Office { id: 52, city: "New York" },
///     Office { id: 7, city: "Boston" },
///     Office { id: 8, city: "Newark" },
/// ];
///
/// let query = Query::parse::<Office>("new@city&&york||7@id", false).unwrap();
/// let found = query.filter(&offices);
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[0].id, 52);
/// assert_eq!(found[1].id, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    groups: Vec<Vec<Term>>,
    warnings: Vec<Warning>,
    noop: bool,
}

impl Query {
    /// Parses and compiles `text` against the attributes of `T`.
    ///
    /// A blank query yields a no-op query that keeps every element.
    pub fn parse<T: Record>(text: &str, exact: bool) -> Result<Self> {
        Query::parse_with::<T>(text, exact, None)
    }

    /// Like [`Query::parse`], reusing compiled patterns from `cache`.
    pub fn parse_with<T: Record>(
        text: &str,
        exact: bool,
        cache: Option<&PatternCache>,
    ) -> Result<Self> {
        match parse::<T>(text) {
            Some(parsed) => Query::compile(parsed, exact, cache),
            None => Ok(Query::noop()),
        }
    }

    /// Compiles an already parsed query.
    pub fn compile(
        parsed: ParsedQuery,
        exact: bool,
        cache: Option<&PatternCache>,
    ) -> Result<Self> {
        let mut groups = Vec::with_capacity(parsed.groups.len());
        for specs in parsed.groups {
            let mut terms = Vec::with_capacity(specs.len());
            for spec in specs {
                let regex = compile_with(cache, &spec.pattern)?;
                terms.push(Term::new(spec.pattern, regex, spec.fields, exact));
            }
            groups.push(terms);
        }
        Ok(Query {
            groups,
            warnings: parsed.warnings,
            noop: false,
        })
    }

    /// A query that keeps every element.
    pub fn noop() -> Self {
        Query {
            noop: true,
            ..Query::default()
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Returns `true` if this query came from a blank string.
    pub fn is_noop(&self) -> bool {
        self.noop
    }

    /// The OR-groups of this query.
    pub fn groups(&self) -> &[Vec<Term>] {
        &self.groups
    }

    /// Warnings produced while parsing.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests a single item against the query.
    pub fn matches<T: Record>(&self, item: &T) -> bool {
        self.noop
            || self
                .groups
                .iter()
                .any(|group| group.iter().all(|term| term.matches(item)))
    }

    /// Returns references to matching items, in input order.
    pub fn filter<'a, T: Record>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.noop {
            return items.iter().collect();
        }

        // Mark every position kept by at least one group
        let mut keep = vec![false; items.len()];
        for group in &self.groups {
            // Narrow the group's survivors term by term
            let mut local: Vec<usize> = (0..items.len()).collect();
            for term in group {
                local.retain(|&i| term.matches(&items[i]));
                if local.is_empty() {
                    break;
                }
            }
            for i in local {
                keep[i] = true;
            }
        }

        // Collect in input order, each item once
        items
            .iter()
            .zip(keep)
            .filter_map(|(item, kept)| kept.then_some(item))
            .collect()
    }

    /// Returns owned clones of matching items.
    pub fn filter_cloned<T: Record + Clone>(&self, items: &[T]) -> Vec<T> {
        self.filter(items).into_iter().cloned().collect()
    }

    /// Removes non-matching items in place.
    pub fn retain<T: Record>(&self, items: &mut Vec<T>) {
        if !self.noop {
            items.retain(|item| self.matches(item));
        }
    }

    /// Counts matching items.
    pub fn count<T: Record>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }

    /// Returns `true` if any item matches.
    pub fn any<T: Record>(&self, items: &[T]) -> bool {
        items.iter().any(|item| self.matches(item))
    }

    /// Returns the first matching item.
    pub fn find<'a, T: Record>(&self, items: &'a [T]) -> Option<&'a T> {
        items.iter().find(|item| self.matches(*item))
    }

    /// Returns the index of the first matching item.
    pub fn position<T: Record>(&self, items: &[T]) -> Option<usize> {
        items.iter().position(|item| self.matches(item))
    }
}
