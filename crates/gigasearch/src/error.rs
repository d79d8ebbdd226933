//! Error types for the gigasearch crate.

use thiserror::Error;

/// Errors that abort a search call.
///
/// Data-shape problems (unknown fields, unreadable attributes, unsupported
/// grouping) never surface here; they degrade locally or become a
/// [`Warning`](crate::Warning). Only a pattern that cannot be compiled stops
/// evaluation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A term did not compile as a regular expression.
    #[error("invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern text after selector and noise stripping.
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl SearchError {
    /// Returns the offending pattern text.
    pub fn pattern(&self) -> &str {
        match self {
            SearchError::InvalidPattern { pattern, .. } => pattern,
        }
    }
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
