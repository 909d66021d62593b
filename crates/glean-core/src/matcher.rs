//! Single-field matching.
//!
//! A [`FieldMatcher`] is a query compiled once for a [`QueryMode`] and then
//! tested against many field values. The filter and the annotator both go
//! through it, so they always agree on what the query means.

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::error::{QueryError, Result};
use crate::mode::QueryMode;

/// Compiled-size budget per byte of a literal query.
const LITERAL_LIMIT_PER_BYTE: usize = 4 * 1024;

/// The `regex` crate's default compiled-size limit.
const DEFAULT_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A compiled, case-insensitive query.
///
/// # Example
///
/// ```
/// use glean_core::{FieldMatcher, QueryMode};
///
/// let matcher = FieldMatcher::new("c++", QueryMode::Literal);
/// assert!(matcher.matches("Modern C++ in practice"));
/// assert!(!matcher.matches("C, then Rust"));
///
/// // An invalid pattern matches nothing instead of failing.
/// let broken = FieldMatcher::new("(unclosed", QueryMode::Pattern);
/// assert!(!broken.matches("(unclosed"));
/// assert!(broken.diagnostic().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    query: String,
    mode: QueryMode,
    compiled: Compiled,
}

#[derive(Debug, Clone)]
enum Compiled {
    /// Empty query: every value matches, nothing is highlighted.
    Everything,
    Regex(Regex),
    /// The query failed to compile: nothing matches.
    Invalid(QueryError),
}

impl FieldMatcher {
    /// Compiles a query.
    ///
    /// Never fails: a malformed pattern yields a matcher that matches nothing
    /// and reports the problem through [`diagnostic`](Self::diagnostic).
    pub fn new(query: impl Into<String>, mode: QueryMode) -> Self {
        let query = query.into();
        let compiled = match compile(&query, mode) {
            Ok(compiled) => compiled,
            Err(err) => {
                tracing::warn!(
                    pattern = %query,
                    error = %err,
                    "query is not a valid pattern, matching nothing"
                );
                Compiled::Invalid(err)
            }
        };

        FieldMatcher {
            query,
            mode,
            compiled,
        }
    }

    /// Compiles a query, returning the error instead of degrading.
    pub fn try_new(query: impl Into<String>, mode: QueryMode) -> Result<Self> {
        let query = query.into();
        let compiled = compile(&query, mode)?;
        Ok(FieldMatcher {
            query,
            mode,
            compiled,
        })
    }

    /// Returns the query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the interpretation mode.
    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// Returns `true` if the query is empty and therefore matches everything.
    pub fn matches_everything(&self) -> bool {
        matches!(self.compiled, Compiled::Everything)
    }

    /// Returns the compile error, if the query could not be compiled.
    pub fn diagnostic(&self) -> Option<&QueryError> {
        match &self.compiled {
            Compiled::Invalid(err) => Some(err),
            _ => None,
        }
    }

    /// Tests whether `value` contains the query, ignoring case.
    pub fn matches(&self, value: &str) -> bool {
        match &self.compiled {
            Compiled::Everything => true,
            Compiled::Regex(regex) => regex.is_match(value),
            Compiled::Invalid(_) => false,
        }
    }

    /// Returns the byte ranges of all non-overlapping occurrences in `text`.
    ///
    /// Zero-length occurrences are dropped, and an empty or invalid query
    /// yields no ranges.
    pub fn find_spans(&self, text: &str) -> Vec<Range<usize>> {
        match &self.compiled {
            Compiled::Regex(regex) => regex
                .find_iter(text)
                .filter(|m| !m.is_empty())
                .map(|m| m.range())
                .collect(),
            Compiled::Everything | Compiled::Invalid(_) => Vec::new(),
        }
    }
}

fn compile(query: &str, mode: QueryMode) -> Result<Compiled> {
    if query.is_empty() {
        return Ok(Compiled::Everything);
    }

    let mut builder = RegexBuilder::new(&mode.pattern_source(query));
    builder.case_insensitive(true);

    // Literal queries are plain text of any length; size the limits to the
    // query instead of failing with `CompiledTooBig`.
    if mode.is_literal() {
        let limit = query
            .len()
            .saturating_mul(LITERAL_LIMIT_PER_BYTE)
            .max(DEFAULT_SIZE_LIMIT);
        builder.size_limit(limit).dfa_size_limit(limit);
    }

    builder
        .build()
        .map(Compiled::Regex)
        .map_err(|source| QueryError::InvalidQueryPattern {
            pattern: query.to_string(),
            source,
        })
}

/// Tests whether `field_value` contains `query` under `mode`, ignoring case.
///
/// Compiles the query on every call; use [`FieldMatcher`] when testing many
/// values against the same query.
pub fn matches(field_value: &str, query: &str, mode: QueryMode) -> bool {
    FieldMatcher::new(query, mode).matches(field_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_contains_ignores_case() {
        let matcher = FieldMatcher::new("eleventy", QueryMode::Literal);
        assert!(matcher.matches("Eleventy is simple"));
        assert!(matcher.matches("I like ELEVENTY"));
        assert!(!matcher.matches("Jekyll"));
    }

    #[test]
    fn literal_treats_special_characters_literally() {
        let matcher = FieldMatcher::new("C++", QueryMode::Literal);
        assert!(matcher.matches("I write C++ daily"));
        assert!(!matcher.matches("I write C daily"));

        let dot = FieldMatcher::new("a.c", QueryMode::Literal);
        assert!(dot.matches("a.c"));
        assert!(!dot.matches("abc"));
    }

    #[test]
    fn pattern_mode_uses_regex_semantics() {
        let matcher = FieldMatcher::new("a.c", QueryMode::Pattern);
        assert!(matcher.matches("ABC"));
        assert!(matcher.matches("a.c"));

        let alternation = FieldMatcher::new("rust|go", QueryMode::Pattern);
        assert!(alternation.matches("Go is fine"));
    }

    #[test]
    fn invalid_pattern_degrades_to_no_match() {
        let matcher = FieldMatcher::new("(C++", QueryMode::Pattern);
        assert!(!matcher.matches("(C++"));
        assert!(!matcher.matches(""));
        assert!(matcher.find_spans("(C++").is_empty());

        let err = matcher.diagnostic().expect("diagnostic");
        assert_eq!(err.pattern(), "(C++");
        assert!(matches!(err, QueryError::InvalidQueryPattern { .. }));
    }

    #[test]
    fn try_new_reports_invalid_pattern() {
        assert!(FieldMatcher::try_new("[a-", QueryMode::Pattern).is_err());
        assert!(FieldMatcher::try_new("[a-", QueryMode::Literal).is_ok());
    }

    #[test]
    fn long_literal_query_compiles_and_matches() {
        let query = "k".repeat(50_000);
        let text = format!("x{}y", query.to_uppercase());

        let matcher = FieldMatcher::try_new(query.as_str(), QueryMode::Literal).unwrap();
        assert!(matcher.matches(&text));
        assert_eq!(matcher.find_spans(&text), vec![1..50_001]);
        assert!(FieldMatcher::new(query, QueryMode::Literal).diagnostic().is_none());
    }

    #[test]
    fn empty_query_matches_everything() {
        let matcher = FieldMatcher::new("", QueryMode::Literal);
        assert!(matcher.matches_everything());
        assert!(matcher.matches("anything"));
        assert!(matcher.matches(""));
        assert!(matcher.find_spans("anything").is_empty());
    }

    #[test]
    fn empty_field_matches_only_empty_query() {
        assert!(!FieldMatcher::new("a", QueryMode::Literal).matches(""));
        assert!(FieldMatcher::new("", QueryMode::Literal).matches(""));
    }

    #[test]
    fn spans_are_non_overlapping() {
        let matcher = FieldMatcher::new("aa", QueryMode::Literal);
        assert_eq!(matcher.find_spans("aaaaa"), vec![0..2, 2..4]);
    }

    #[test]
    fn spans_skip_zero_length_matches() {
        let matcher = FieldMatcher::new("x*", QueryMode::Pattern);
        assert!(matcher.matches("abc"));
        assert_eq!(matcher.find_spans("axxb"), vec![1..3]);
    }

    #[test]
    fn spans_use_original_byte_offsets() {
        let matcher = FieldMatcher::new("straße", QueryMode::Literal);
        let text = "Die STRASSE, die Straße";
        let spans = matcher.find_spans(text);
        assert_eq!(spans.len(), 1);
        assert_eq!(&text[spans[0].clone()], "Straße");
    }

    #[test]
    fn free_function_matches() {
        assert!(matches("Static Site", "site", QueryMode::Literal));
        assert!(!matches("Static Site", "blog", QueryMode::Literal));
        assert!(!matches("Static Site", "(", QueryMode::Pattern));
    }
}
