//! Query string parsing.
//!
//! The grammar is an OR-list of AND-lists:
//!
//! ```text
//! query      := orGroup ( "||" orGroup )*
//! orGroup    := term ( "&&" term )*
//! term       := text ( "@" fieldName )*
//! ```
//!
//! Parsing lowercases the query, splits it, pulls out field selectors that
//! name real attributes of the record type, and strips noise characters from
//! what is left. Nothing is compiled here; see [`Query`](crate::Query).

use crate::noise::strip_noise;
use crate::record::{resolve_field, Record};
use crate::report::Warning;

/// Separator between OR-groups.
pub const OR_TOKEN: &str = "||";
/// Separator between terms of an AND-group.
pub const AND_TOKEN: &str = "&&";
/// Prefix of a field selector.
pub const SELECTOR_PREFIX: char = '@';

/// A parsed, not yet compiled term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSpec {
    /// Normalized pattern text.
    pub pattern: String,
    /// Canonical names of the selected attributes; empty when unscoped.
    pub fields: Vec<&'static str>,
}

/// Result of parsing a non-blank query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    /// OR-groups, each an ordered list of AND-terms.
    pub groups: Vec<Vec<TermSpec>>,
    /// Non-fatal problems found while parsing.
    pub warnings: Vec<Warning>,
}

/// Returns `true` if the query should be treated as a no-op.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Returns `true` if the query contains a `( ... )` group.
pub fn has_grouping(query: &str) -> bool {
    match query.find('(') {
        Some(open) => query[open..].contains(')'),
        None => false,
    }
}

/// Parses a boolean query against the attributes of `T`.
///
/// Returns `None` for a blank query, which callers treat as "return the
/// input unchanged".
pub fn parse<T: Record>(query: &str) -> Option<ParsedQuery> {
    if is_blank(query) {
        return None;
    }

    let mut parsed = ParsedQuery::default();
    if has_grouping(query) {
        parsed.warnings.push(Warning::UnsupportedGrouping {
            query: query.to_string(),
        });
    }

    let lowered = query.to_lowercase();
    for or_group in lowered.split(OR_TOKEN).filter(|s| !s.trim().is_empty()) {
        let terms: Vec<TermSpec> = or_group
            .split(AND_TOKEN)
            .filter(|s| !s.trim().is_empty())
            .map(|term| parse_term::<T>(term, &mut parsed.warnings))
            // Formatting-only fragments would match every record
            .filter(|spec| !spec.pattern.is_empty() || !spec.fields.is_empty())
            .collect();
        if !terms.is_empty() {
            parsed.groups.push(terms);
        }
    }

    tracing::debug!(
        groups = parsed.groups.len(),
        warnings = parsed.warnings.len(),
        "query_parsed"
    );
    Some(parsed)
}

/// Parses one AND-term: extracts resolvable selectors, then strips noise.
pub fn parse_term<T: Record>(term: &str, warnings: &mut Vec<Warning>) -> TermSpec {
    let (text, fields, dangling) = split_selectors(term, resolve_field::<T>, true);
    if dangling {
        warnings.push(Warning::DanglingSelector {
            term: term.to_string(),
        });
    }
    TermSpec {
        pattern: strip_noise(&text).into_owned(),
        fields,
    }
}

/// Splits `@field` selectors out of `text`.
///
/// Selectors accepted by `resolve` are removed and returned (deduplicated,
/// in order of appearance). Unresolved selectors stay in the text when
/// `keep_unknown` is set and are dropped otherwise. The flag is `true` if an
/// `@` was not followed by an identifier.
pub(crate) fn split_selectors<F>(
    text: &str,
    resolve: F,
    keep_unknown: bool,
) -> (String, Vec<&'static str>, bool)
where
    F: Fn(&str) -> Option<&'static str>,
{
    let mut out = String::with_capacity(text.len());
    let mut fields: Vec<&'static str> = Vec::new();
    let mut dangling = false;
    let mut rest = text;

    while let Some(at) = rest.find(SELECTOR_PREFIX) {
        out.push_str(&rest[..at]);
        let after = &rest[at + SELECTOR_PREFIX.len_utf8()..];
        let ident_len = after
            .find(|c: char| !is_ident_char(c))
            .unwrap_or(after.len());
        let ident = &after[..ident_len];

        if ident.is_empty() {
            dangling = true;
            out.push(SELECTOR_PREFIX);
        } else if let Some(field) = resolve(ident) {
            if !fields.contains(&field) {
                fields.push(field);
            }
        } else {
            tracing::debug!(selector = ident, "unknown_field_selector");
            if keep_unknown {
                out.push(SELECTOR_PREFIX);
                out.push_str(ident);
            }
        }
        rest = &after[ident_len..];
    }
    out.push_str(rest);

    (out, fields, dangling)
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
