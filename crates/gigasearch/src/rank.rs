//! Relevance ranking.
//!
//! Ranking ignores `&&`/`||`. The query is split on whitespace into
//! independent regex terms; `@field` selectors anywhere in the string apply
//! to every term. A record's score is the total number of regex matches over
//! all terms and scanned attributes. Unlike boolean search, no noise
//! stripping is applied.

use std::cmp::Ordering;

use regex::Regex;

use crate::cache::{compile_with, PatternCache};
use crate::parser::{is_blank, split_selectors};
use crate::record::{resolve_field, Record};
use crate::report::{Reporter, TracingReporter, Warning};

/// An item paired with its relevance score.
#[derive(Debug, PartialEq)]
pub struct Scored<'a, T> {
    /// The ranked item.
    pub item: &'a T,
    /// Total match count.
    pub score: usize,
}

// Manual impls: deriving would require `T: Clone`/`T: Copy`.
impl<T> Clone for Scored<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Scored<'_, T> {}

/// A parsed ranking query.
///
/// # Example
///
/// ```
/// use gigasearch::{Ranking, Record, Value};
///
/// struct Note(&'static str);
///
/// impl Record for Note {
///     fn field_names() -> &'static [&'static str] {
///         &["body"]
///     }
///
///     fn field_value(&self, _field: &str) -> Value<'_> {
///         Value::String(self.0)
///     }
/// }
///
/// let notes = vec![Note("y"), Note("x x y"), Note("x")];
/// let ranking = Ranking::parse::<Note>("x y", false);
/// let ranked = ranking.rank(&notes);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].0, "x x y");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    terms: Vec<Regex>,
    fields: Vec<&'static str>,
    include_partial: bool,
    warnings: Vec<Warning>,
}

impl Ranking {
    /// Parses `text` against the attributes of `T`, reporting through
    /// `tracing`.
    ///
    /// With `include_partial`, any record with at least one match is kept;
    /// otherwise a record must score at least the number of terms.
    pub fn parse<T: Record>(text: &str, include_partial: bool) -> Self {
        Ranking::parse_with::<T>(text, include_partial, None, &TracingReporter)
    }

    /// Like [`Ranking::parse`] with an explicit cache and reporter.
    pub fn parse_with<T: Record>(
        text: &str,
        include_partial: bool,
        cache: Option<&PatternCache>,
        reporter: &dyn Reporter,
    ) -> Self {
        let mut ranking = Ranking {
            include_partial,
            ..Ranking::default()
        };
        if is_blank(text) {
            return ranking;
        }

        // Selectors are global; whatever is left is whitespace-separated terms
        let (rest, fields, dangling) = split_selectors(text, resolve_field::<T>, false);
        if dangling {
            let warning = Warning::DanglingSelector {
                term: text.to_string(),
            };
            reporter.warning(&warning);
            ranking.warnings.push(warning);
        }
        ranking.fields = fields;
        ranking.terms = rest
            .split_whitespace()
            .filter_map(|term| compile_term(term, cache, reporter))
            .collect();

        tracing::debug!(
            terms = ranking.terms.len(),
            fields = ranking.fields.len(),
            "ranking_parsed"
        );
        ranking
    }

    /// Returns `true` if there is nothing to rank by.
    pub fn is_noop(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of regex terms.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Warnings produced while parsing.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Attributes the scan is limited to; empty means every attribute.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    /// Total match count of every term over the scanned attributes.
    pub fn score<T: Record>(&self, item: &T) -> usize {
        let fields = if self.fields.is_empty() {
            T::field_names()
        } else {
            &self.fields[..]
        };
        let texts: Vec<_> = fields
            .iter()
            .filter_map(|field| item.field_value(field).text())
            .collect();

        self.terms
            .iter()
            .map(|term| {
                texts
                    .iter()
                    .map(|text| term.find_iter(text).count())
                    .sum::<usize>()
            })
            .sum()
    }

    /// Returns `true` if a score passes the inclusion threshold.
    pub fn accepts(&self, score: usize) -> bool {
        if self.include_partial {
            score > 0
        } else {
            score >= self.terms.len()
        }
    }

    /// Returns kept items with scores, best first. Ties keep input order.
    ///
    /// A no-op ranking returns every item with a score of zero.
    pub fn rank_scored<'a, T: Record>(&self, items: &'a [T]) -> Vec<Scored<'a, T>> {
        if self.is_noop() {
            return items.iter().map(|item| Scored { item, score: 0 }).collect();
        }

        // Score everything, then drop what falls under the threshold
        let mut scored: Vec<Scored<'a, T>> = items
            .iter()
            .map(|item| Scored {
                item,
                score: self.score(item),
            })
            .filter(|s| self.accepts(s.score))
            .collect();

        // Stable, so equal scores keep input order
        scored.sort_by(|a, b| compare_scores(a.score, b.score));
        scored
    }

    /// Returns kept items, best first.
    pub fn rank<'a, T: Record>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.rank_scored(items)
            .into_iter()
            .map(|scored| scored.item)
            .collect()
    }
}

/// Descending score order. Used with a stable sort so equal scores keep
/// their input positions.
pub fn compare_scores(a: usize, b: usize) -> Ordering {
    b.cmp(&a)
}

fn compile_term(
    term: &str,
    cache: Option<&PatternCache>,
    reporter: &dyn Reporter,
) -> Option<Regex> {
    match compile_with(cache, term) {
        Ok(regex) => Some(regex),
        Err(err) => {
            reporter.failure(&err);
            // Ranking never fails: fall back to matching the term literally.
            match compile_with(cache, &regex::escape(term)) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    reporter.failure(&err);
                    None
                }
            }
        }
    }
}
