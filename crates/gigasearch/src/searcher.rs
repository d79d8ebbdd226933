//! Configured entry point.
//!
//! [`Searcher`] bundles [`SearchOptions`], an optional [`PatternCache`] and a
//! [`Reporter`], and runs boolean, plain and ranked searches with them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cache::{compile_with, PatternCache};
use crate::error::Result;
use crate::parser::{has_grouping, is_blank};
use crate::query::Query;
use crate::rank::{Ranking, Scored};
use crate::record::Record;
use crate::report::{Reporter, TracingReporter, Warning};
use crate::term::Term;

/// Search behaviour switches.
///
/// Deserializes from any serde format; missing keys take their defaults.
///
/// ```
/// use gigasearch::SearchOptions;
///
/// let options: SearchOptions = serde_json::from_str(r#"{ "exact": true }"#).unwrap();
/// assert!(options.exact);
/// assert!(!options.include_partial);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Boolean and plain search: require the normalized attribute to equal
    /// the normalized pattern instead of containing a match.
    pub exact: bool,
    /// Ranking: keep records matching at least one term instead of requiring
    /// a score of at least the number of terms.
    pub include_partial: bool,
}

/// Items found by a search, plus whatever the parser warned about.
#[derive(Debug, PartialEq)]
pub struct Found<'a, T> {
    /// Matching items.
    pub items: Vec<&'a T>,
    /// Non-fatal problems with the query.
    pub warnings: Vec<Warning>,
}

impl<'a, T> Found<'a, T> {
    /// Drops the warnings.
    pub fn into_items(self) -> Vec<&'a T> {
        self.items
    }

    /// Clones the found items.
    pub fn into_cloned(self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.into_iter().cloned().collect()
    }

    /// Number of found items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing was found.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Configured search engine.
///
/// # Example
///
/// ```
/// use gigasearch::{PatternCache, Record, Searcher, Value};
///
/// struct Tag(&'static str);
///
/// impl Record for Tag {
///     fn field_names() -> &'static [&'static str] {
///         &["label"]
///     }
///
///     fn field_value(&self, _field: &str) -> Value<'_> {
///         Value::String(self.0)
///     }
/// }
///
/// let tags = vec![Tag("NY"), Tag("NYC")];
/// let searcher = Searcher::new().exact(true).cache(PatternCache::new()).build();
/// let found = searcher.search("ny", &tags).unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found.items[0].0, "NY");
/// ```
pub struct Searcher {
    options: SearchOptions,
    cache: Option<PatternCache>,
    reporter: Box<dyn Reporter>,
}

impl Default for Searcher {
    fn default() -> Self {
        Searcher {
            options: SearchOptions::default(),
            cache: None,
            reporter: Box::new(TracingReporter),
        }
    }
}

impl fmt::Debug for Searcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Searcher")
            .field("options", &self.options)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl Searcher {
    /// Creates a searcher with default options, no cache, reporting through
    /// `tracing`.
    pub fn new() -> Self {
        Searcher::default()
    }

    /// Creates a searcher from loaded options.
    pub fn with_options(options: SearchOptions) -> Self {
        Searcher {
            options,
            ..Searcher::default()
        }
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Sets exact mode.
    pub fn exact(mut self, exact: bool) -> Self {
        self.options.exact = exact;
        self
    }

    /// Sets partial inclusion for ranking.
    pub fn include_partial(mut self, include: bool) -> Self {
        self.options.include_partial = include;
        self
    }

    /// Reuses compiled patterns across calls.
    pub fn cache(mut self, cache: PatternCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replaces the reporter.
    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Finalizes the builder.
    ///
    /// This is a no-op that returns self, provided for API clarity.
    pub fn build(self) -> Self {
        self
    }

    /// The active options.
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// The pattern cache, if any.
    pub fn pattern_cache(&self) -> Option<&PatternCache> {
        self.cache.as_ref()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Parses and compiles a boolean query, reporting warnings and failures.
    pub fn query<T: Record>(&self, text: &str) -> Result<Query> {
        match Query::parse_with::<T>(text, self.options.exact, self.cache.as_ref()) {
            Ok(query) => {
                for warning in query.warnings() {
                    self.reporter.warning(warning);
                }
                Ok(query)
            }
            Err(err) => {
                self.reporter.failure(&err);
                Err(err)
            }
        }
    }

    /// Boolean search. A blank query returns every item in input order.
    pub fn search<'a, T: Record>(&self, text: &str, items: &'a [T]) -> Result<Found<'a, T>> {
        let query = self.query::<T>(text)?;
        let found = query.filter(items);
        tracing::debug!(
            candidates = items.len(),
            found = found.len(),
            "search_complete"
        );
        Ok(Found {
            items: found,
            warnings: query.warnings().to_vec(),
        })
    }

    /// Grammar-free search: `pattern` is one case-insensitive regex tested
    /// against the normalized text of every attribute. `&&`, `||` and
    /// `@field` have no special meaning.
    pub fn search_plain<'a, T: Record>(
        &self,
        pattern: &str,
        items: &'a [T],
    ) -> Result<Found<'a, T>> {
        if is_blank(pattern) {
            return Ok(Found {
                items: items.iter().collect(),
                warnings: Vec::new(),
            });
        }

        let mut warnings = Vec::new();
        if has_grouping(pattern) {
            let warning = Warning::UnsupportedGrouping {
                query: pattern.to_string(),
            };
            self.reporter.warning(&warning);
            warnings.push(warning);
        }

        let regex = compile_with(self.cache.as_ref(), pattern).map_err(|err| {
            self.reporter.failure(&err);
            err
        })?;
        let term = Term::new(pattern.to_lowercase(), regex, Vec::new(), self.options.exact);
        Ok(Found {
            items: items.iter().filter(|item| term.matches(*item)).collect(),
            warnings,
        })
    }

    /// Parses a ranking query.
    pub fn ranking<T: Record>(&self, text: &str) -> Ranking {
        Ranking::parse_with::<T>(
            text,
            self.options.include_partial,
            self.cache.as_ref(),
            self.reporter.as_ref(),
        )
    }

    /// Relevance search, best first. Never fails.
    ///
    /// Parse warnings are reported and also returned with the items.
    pub fn rank<'a, T: Record>(&self, text: &str, items: &'a [T]) -> Found<'a, T> {
        let ranking = self.ranking::<T>(text);
        let ranked = ranking.rank(items);
        tracing::debug!(
            candidates = items.len(),
            found = ranked.len(),
            "rank_complete"
        );
        Found {
            items: ranked,
            warnings: ranking.warnings().to_vec(),
        }
    }

    /// Relevance search with scores, best first.
    pub fn rank_scored<'a, T: Record>(
        &self,
        text: &str,
        items: &'a [T],
    ) -> Vec<Scored<'a, T>> {
        self.ranking::<T>(text).rank_scored(items)
    }
}
