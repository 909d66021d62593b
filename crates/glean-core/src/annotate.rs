//! Keyword highlighting.
//!
//! The [`HighlightAnnotator`] turns matched records into [`AnnotatedRecord`]s
//! where every occurrence of the query is wrapped in a [`Marker`] pair.
//!
//! Text that is already inside a marker pair, and the marker tokens
//! themselves, are copied through untouched. Annotating annotated output
//! again with the same query therefore changes nothing, and a query such as
//! `"mark"` can never match inside `<mark>`.

use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::matcher::FieldMatcher;
use crate::mode::QueryMode;
use crate::record::AnnotatedRecord;
use crate::traits::Searchable;

/// The delimiter pair placed around highlighted text.
///
/// Defaults to `<mark>` / `</mark>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker {
    start: String,
    end: String,
}

impl Marker {
    /// Creates a marker pair.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Marker {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The opening delimiter.
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The closing delimiter.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Counts complete marker pairs in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        Segments::new(text, self)
            .filter(|segment| matches!(segment, Segment::Marked(_)))
            .count()
    }
}

impl Default for Marker {
    fn default() -> Self {
        Marker::new("<mark>", "</mark>")
    }
}

/// Produces highlighted copies of matched items.
///
/// # Example
///
/// ```
/// use glean_core::{HighlightAnnotator, Marker, Record, RecordFilter};
///
/// let records = vec![Record::new().with("title", "Eleventy is simple")];
/// let matches = RecordFilter::new("eleventy").build().filter(&records);
///
/// let annotated = HighlightAnnotator::new("eleventy").build().annotate(&matches);
/// assert_eq!(annotated[0].get("title"), Some("<mark>Eleventy</mark> is simple"));
///
/// let bold = HighlightAnnotator::new("simple")
///     .marker(Marker::new("<b>", "</b>"))
///     .build();
/// assert_eq!(bold.highlight("Eleventy is simple"), "Eleventy is <b>simple</b>");
/// ```
#[derive(Debug, Clone)]
pub struct HighlightAnnotator {
    matcher: FieldMatcher,
    marker: Marker,
}

/// Builder for [`HighlightAnnotator`].
#[derive(Debug, Clone)]
pub struct HighlightAnnotatorBuilder {
    query: String,
    mode: QueryMode,
    marker: Marker,
}

impl HighlightAnnotatorBuilder {
    /// Sets how the query is interpreted. Must match the mode used to filter.
    pub fn mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the marker pair.
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    /// Compiles the query.
    pub fn build(self) -> HighlightAnnotator {
        HighlightAnnotator {
            matcher: FieldMatcher::new(self.query, self.mode),
            marker: self.marker,
        }
    }
}

impl HighlightAnnotator {
    /// Starts building an annotator for `query`.
    pub fn new(query: impl Into<String>) -> HighlightAnnotatorBuilder {
        HighlightAnnotatorBuilder {
            query: query.into(),
            mode: QueryMode::default(),
            marker: Marker::default(),
        }
    }

    /// Reuses a matcher compiled for filtering.
    pub fn from_matcher(matcher: FieldMatcher, marker: Marker) -> Self {
        HighlightAnnotator { matcher, marker }
    }

    /// Returns the compiled matcher.
    pub fn matcher(&self) -> &FieldMatcher {
        &self.matcher
    }

    /// Returns the marker pair.
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Wraps every occurrence of the query in `text`.
    ///
    /// The query runs over the whole value, so anchors mean what they mean to
    /// the filter. Occurrences touching marker tokens or already marked text
    /// are left alone. An empty or invalid query returns `text` unchanged.
    pub fn highlight(&self, text: &str) -> String {
        let opaque = opaque_ranges(text, &self.marker);
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for span in self.matcher.find_spans(text) {
            if opaque
                .iter()
                .any(|range| range.start < span.end && span.start < range.end)
            {
                continue;
            }
            out.push_str(&text[last..span.start]);
            out.push_str(self.marker.start());
            out.push_str(&text[span.start..span.end]);
            out.push_str(self.marker.end());
            last = span.end;
        }
        out.push_str(&text[last..]);
        out
    }

    /// Builds the highlighted copy of one item.
    pub fn annotate_record<T: Searchable + ?Sized>(&self, item: &T) -> AnnotatedRecord {
        let fields: IndexMap<String, String> = item
            .search_fields()
            .into_iter()
            .map(|(name, value)| (name.to_string(), self.highlight(value)))
            .collect();
        AnnotatedRecord::from_fields(fields)
    }

    /// Builds highlighted copies of matched items, keeping their order.
    ///
    /// Accepts a [`MatchResult`](crate::MatchResult) directly, since it
    /// dereferences to `[&T]`.
    pub fn annotate<T: Searchable>(&self, matches: &[&T]) -> Vec<AnnotatedRecord> {
        let annotated: Vec<AnnotatedRecord> = matches
            .iter()
            .map(|item| self.annotate_record(*item))
            .collect();

        tracing::debug!(
            query = %self.matcher.query(),
            records = annotated.len(),
            "annotated records"
        );

        annotated
    }
}

/// Highlights matched items with the default marker.
///
/// Shorthand for `HighlightAnnotator::new(query).mode(mode).build().annotate(matches)`.
pub fn annotate<T: Searchable>(matches: &[&T], query: &str, mode: QueryMode) -> Vec<AnnotatedRecord> {
    HighlightAnnotator::new(query)
        .mode(mode)
        .build()
        .annotate(matches)
}

/// Pieces of a field value, split around marker tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    /// Plain text, open to highlighting.
    Text(&'a str),
    /// A complete marker pair with its content: `<mark>…</mark>`.
    Marked(&'a str),
    /// A lone start or end token.
    Stray(&'a str),
}

/// Byte ranges of marked runs and stray marker tokens in `text`.
fn opaque_ranges(text: &str, marker: &Marker) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut offset = 0;
    for segment in Segments::new(text, marker) {
        let (len, opaque) = match segment {
            Segment::Text(s) => (s.len(), false),
            Segment::Marked(s) | Segment::Stray(s) => (s.len(), true),
        };
        if opaque {
            ranges.push(offset..offset + len);
        }
        offset += len;
    }
    ranges
}

/// Splits text into plain runs and marker-delimited runs.
struct Segments<'a> {
    input: &'a str,
    pos: usize,
    marker: &'a Marker,
}

impl<'a> Segments<'a> {
    fn new(input: &'a str, marker: &'a Marker) -> Self {
        Segments {
            input,
            pos: 0,
            marker,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        let remaining = &self.input[self.pos..];
        let (start, end) = (self.marker.start(), self.marker.end());

        // Without both delimiters there is nothing to skip.
        if start.is_empty() || end.is_empty() {
            self.pos = self.input.len();
            return Some(Segment::Text(remaining));
        }

        let next_token = match (remaining.find(start), remaining.find(end)) {
            (Some(s), Some(e)) => Some(s.min(e)),
            (s, e) => s.or(e),
        };

        match next_token {
            None => {
                self.pos = self.input.len();
                Some(Segment::Text(remaining))
            }
            Some(at) if at > 0 => {
                self.pos += at;
                Some(Segment::Text(&remaining[..at]))
            }
            Some(_) => {
                let segment = if remaining.starts_with(start) {
                    match remaining[start.len()..].find(end) {
                        Some(close) => {
                            Segment::Marked(&remaining[..start.len() + close + end.len()])
                        }
                        None => Segment::Stray(&remaining[..start.len()]),
                    }
                } else {
                    Segment::Stray(&remaining[..end.len()])
                };

                let len = match segment {
                    Segment::Text(s) | Segment::Marked(s) | Segment::Stray(s) => s.len(),
                };
                self.pos += len;
                Some(segment)
            }
        }
    }
}
