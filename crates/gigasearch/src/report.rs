//! Non-fatal notices and the sink they are reported to.

use std::fmt;

use crate::error::SearchError;

/// A problem with the query that did not stop evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The query contains a parenthesized group. Grouping is not supported;
    /// the parentheses are treated as formatting and the query runs as typed.
    UnsupportedGrouping {
        /// The raw query text.
        query: String,
    },
    /// An `@` was not followed by a field identifier and stays in the
    /// pattern as a literal character.
    DanglingSelector {
        /// The AND-term containing the stray `@`.
        term: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnsupportedGrouping { .. } => {
                write!(f, "advanced search not supported, normal search initiated")
            }
            Warning::DanglingSelector { term } => {
                write!(f, "'@' without a field name in '{}' is matched literally", term)
            }
        }
    }
}

/// Sink for warnings and failures.
///
/// Reporting is fire-and-forget: nothing the reporter does feeds back into
/// evaluation.
pub trait Reporter: Send + Sync {
    /// Called once per warning produced while parsing a query.
    fn warning(&self, warning: &Warning);

    /// Called before a [`SearchError`] is returned to the caller.
    fn failure(&self, error: &SearchError);
}

/// Reporter that forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn warning(&self, warning: &Warning) {
        tracing::warn!(warning = %warning, "search_warning");
    }

    fn failure(&self, error: &SearchError) {
        tracing::error!(error = %error, pattern = error.pattern(), "search_failure");
    }
}
