//! Record filtering.
//!
//! The [`RecordFilter`] struct runs one compiled query over a collection and
//! returns the matching items, by reference and in input order.

use std::ops::Deref;

use crate::error::QueryError;
use crate::matcher::FieldMatcher;
use crate::mode::QueryMode;
use crate::traits::Searchable;

/// A query ready to be run over collections of [`Searchable`] items.
///
/// An item matches when at least one of its fields contains the query,
/// ignoring case. Fields are tested in declared order and testing stops at
/// the first hit. An empty query matches every item.
///
/// # Example
///
/// ```
/// use glean_core::{Dataset, QueryMode, Record, RecordFilter};
///
/// let dataset = Dataset::new(vec![
///     Record::new().with("title", "Eleventy is simple").with("body", "static site"),
///     Record::new().with("title", "Other").with("body", "nothing"),
/// ]);
///
/// let filter = RecordFilter::new("eleventy").mode(QueryMode::Literal).build();
/// let result = filter.filter(dataset.records());
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].get("title"), Some("Eleventy is simple"));
/// ```
#[derive(Debug, Clone)]
pub struct RecordFilter {
    matcher: FieldMatcher,
}

/// Builder for [`RecordFilter`].
#[derive(Debug, Clone)]
pub struct RecordFilterBuilder {
    query: String,
    mode: QueryMode,
}

impl RecordFilterBuilder {
    /// Sets how the query is interpreted. Defaults to [`QueryMode::Literal`].
    pub fn mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Compiles the query.
    ///
    /// A malformed pattern does not fail here; the resulting filter matches
    /// nothing and reports the error on every [`MatchResult`].
    pub fn build(self) -> RecordFilter {
        RecordFilter {
            matcher: FieldMatcher::new(self.query, self.mode),
        }
    }
}

impl RecordFilter {
    /// Starts building a filter for `query`.
    pub fn new(query: impl Into<String>) -> RecordFilterBuilder {
        RecordFilterBuilder {
            query: query.into(),
            mode: QueryMode::default(),
        }
    }

    /// Wraps an already compiled matcher.
    pub fn from_matcher(matcher: FieldMatcher) -> Self {
        RecordFilter { matcher }
    }

    /// Returns the compiled matcher.
    pub fn matcher(&self) -> &FieldMatcher {
        &self.matcher
    }

    /// Returns the query text.
    pub fn query(&self) -> &str {
        self.matcher.query()
    }

    /// Returns the interpretation mode.
    pub fn mode(&self) -> QueryMode {
        self.matcher.mode()
    }

    /// Returns the compile error, if the query could not be compiled.
    pub fn diagnostic(&self) -> Option<&QueryError> {
        self.matcher.diagnostic()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches.
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if self.matcher.matches_everything() {
            return true;
        }

        item.search_fields()
            .into_iter()
            .any(|(_, value)| self.matcher.matches(value))
    }

    /// Filters a slice, returning references to matching items in input order.
    pub fn filter<'a, T: Searchable>(&self, items: &'a [T]) -> MatchResult<'a, T> {
        let records: Vec<&'a T> = if self.diagnostic().is_some() {
            Vec::new()
        } else {
            items.iter().filter(|item| self.matches(*item)).collect()
        };

        tracing::debug!(
            query = %self.query(),
            mode = %self.mode(),
            scanned = items.len(),
            matched = records.len(),
            "filtered records"
        );

        MatchResult {
            records,
            diagnostic: self.diagnostic().cloned(),
        }
    }

    /// Counts the number of matching items.
    pub fn count<T: Searchable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }

    /// Returns `true` if any item matches.
    pub fn any<T: Searchable>(&self, items: &[T]) -> bool {
        items.iter().any(|item| self.matches(item))
    }

    /// Finds the first matching item.
    pub fn find<'a, T: Searchable>(&self, items: &'a [T]) -> Option<&'a T> {
        items.iter().find(|item| self.matches(*item))
    }

    /// Finds the first matching item and returns its index.
    pub fn position<T: Searchable>(&self, items: &[T]) -> Option<usize> {
        items.iter().position(|item| self.matches(item))
    }
}

/// Filters `items` with a one-off query.
///
/// Shorthand for `RecordFilter::new(query).mode(mode).build().filter(items)`.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str, mode: QueryMode) -> MatchResult<'a, T> {
    RecordFilter::new(query).mode(mode).build().filter(items)
}

/// The ordered subset of a collection that satisfied a query.
///
/// Holds references to the original items, never copies, in input order.
/// Dereferences to a slice of those references.
#[derive(Debug)]
pub struct MatchResult<'a, T> {
    records: Vec<&'a T>,
    diagnostic: Option<QueryError>,
}

impl<'a, T> MatchResult<'a, T> {
    /// Returns the matched items.
    pub fn records(&self) -> &[&'a T] {
        &self.records
    }

    /// Returns the compile error if the query degraded to "no match".
    ///
    /// A result with a diagnostic is always empty.
    pub fn diagnostic(&self) -> Option<&QueryError> {
        self.diagnostic.as_ref()
    }

    /// Consumes the result, returning the matched references.
    pub fn into_records(self) -> Vec<&'a T> {
        self.records
    }

    /// Clones the matched items.
    pub fn cloned(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.records.iter().map(|item| (*item).clone()).collect()
    }
}

impl<T> Clone for MatchResult<'_, T> {
    fn clone(&self) -> Self {
        MatchResult {
            records: self.records.clone(),
            diagnostic: self.diagnostic.clone(),
        }
    }
}

impl<'a, T> Deref for MatchResult<'a, T> {
    type Target = [&'a T];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl<'r, 'a, T> IntoIterator for &'r MatchResult<'a, T> {
    type Item = &'r &'a T;
    type IntoIter = std::slice::Iter<'r, &'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
