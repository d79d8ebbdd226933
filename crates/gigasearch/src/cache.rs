//! Compiled pattern reuse.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use regex::{Regex, RegexBuilder};

use crate::error::{Result, SearchError};

/// Cache of compiled, case-insensitive patterns keyed by pattern text.
///
/// A cache only lives as long as its owner; hand one to a
/// [`Searcher`](crate::Searcher) to share compilations across calls.
/// `Regex` clones are cheap, so lookups return owned values.
///
/// Keys are query text, so an unbounded cache grows with every distinct
/// pattern it sees. Eviction is the owner's job: call
/// [`clear`](PatternCache::clear), or build the cache with
/// [`with_limit`](PatternCache::with_limit) to have it emptied whenever it
/// is full.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: Mutex<HashMap<String, Regex>>,
    limit: Option<usize>,
}

impl PatternCache {
    /// Creates an empty, unbounded cache.
    pub fn new() -> Self {
        PatternCache::default()
    }

    /// Creates an empty cache holding at most `limit` patterns.
    ///
    /// Inserting into a full cache drops every entry first. A limit of zero
    /// caches nothing.
    pub fn with_limit(limit: usize) -> Self {
        PatternCache {
            limit: Some(limit),
            ..PatternCache::default()
        }
    }

    /// The entry limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Returns the compiled form of `pattern`, compiling it on first use.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Regex> {
        let mut patterns = self.patterns.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(regex) = patterns.get(pattern) {
            return Ok(regex.clone());
        }
        let regex = compile(pattern)?;
        match self.limit {
            Some(0) => return Ok(regex),
            Some(limit) if patterns.len() >= limit => {
                tracing::debug!(limit, "pattern_cache_reset");
                patterns.clear();
            }
            _ => {}
        }
        patterns.insert(pattern.to_string(), regex.clone());
        Ok(regex)
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached pattern.
    pub fn clear(&self) {
        self.patterns
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

/// Compiles a case-insensitive pattern.
pub(crate) fn compile(pattern: &str) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| SearchError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Compiles through `cache` when one is given.
pub(crate) fn compile_with(cache: Option<&PatternCache>, pattern: &str) -> Result<Regex> {
    match cache {
        Some(cache) => cache.get_or_compile(pattern),
        None => compile(pattern),
    }
}
