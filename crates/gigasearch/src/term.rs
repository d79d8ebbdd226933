//! Single-term matching.
//!
//! A [`Term`] is one compiled regex, optionally scoped to a set of named
//! attributes. Matching always runs against normalized attribute text.

use regex::Regex;

use crate::noise::normalize;
use crate::record::Record;
use crate::value::Value;

/// Outcome of testing a term against one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMatch {
    /// The attribute matched.
    Match,
    /// The attribute was read and did not match.
    NoMatch,
    /// The attribute could not be read. Never counts as a match.
    Unavailable,
}

impl FieldMatch {
    /// Returns `true` only for [`FieldMatch::Match`].
    pub fn is_match(self) -> bool {
        matches!(self, FieldMatch::Match)
    }
}

/// One atomic, compiled search term.
#[derive(Debug, Clone)]
pub struct Term {
    pattern: String,
    regex: Regex,
    fields: Vec<&'static str>,
    exact: bool,
}

impl Term {
    /// Creates a term from an already normalized pattern and its compiled
    /// regex. An empty `fields` list means "any attribute".
    pub fn new(
        pattern: impl Into<String>,
        regex: Regex,
        fields: Vec<&'static str>,
        exact: bool,
    ) -> Self {
        Term {
            pattern: pattern.into(),
            regex,
            fields,
            exact,
        }
    }

    /// The normalized pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Attributes this term is scoped to; empty when unscoped.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }

    /// Returns `true` if exact mode is on.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// Tests one attribute value.
    pub fn match_value(&self, value: &Value<'_>) -> FieldMatch {
        let Some(text) = value.text() else {
            return FieldMatch::Unavailable;
        };
        let text = normalize(&text);
        if !self.regex.is_match(&text) {
            return FieldMatch::NoMatch;
        }
        if self.exact && text != self.pattern {
            return FieldMatch::NoMatch;
        }
        FieldMatch::Match
    }

    /// Returns `true` if any of the term's attributes (or, when unscoped,
    /// any attribute at all) matches.
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        let fields = if self.fields.is_empty() {
            T::field_names()
        } else {
            &self.fields[..]
        };
        fields
            .iter()
            .any(|field| self.match_value(&record.field_value(field)).is_match())
    }
}
