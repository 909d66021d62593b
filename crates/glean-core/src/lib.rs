//! Glean core - case-insensitive matching and keyword highlighting for small
//! in-memory datasets.
//!
//! The engine turns a dataset and a query into the ordered subset of records
//! that contain the query, and into highlighted copies of those records:
//!
//! - [`FieldMatcher`]: decides whether one text field contains the query
//! - [`RecordFilter`]: keeps every record with at least one matching field,
//!   in input order
//! - [`HighlightAnnotator`]: wraps every occurrence of the query in a
//!   [`Marker`] pair, producing new [`AnnotatedRecord`]s
//!
//! Everything here is synchronous and pure: inputs are only ever borrowed,
//! and nothing is remembered between calls.
//!
//! # Quick Start
//!
//! ```rust
//! use glean_core::{Dataset, HighlightAnnotator, Record, RecordFilter};
//!
//! let dataset = Dataset::new(vec![
//!     Record::new().with("title", "Eleventy is simple").with("body", "static site"),
//!     Record::new().with("title", "Other").with("body", "nothing"),
//! ]);
//!
//! let query = "eleventy";
//! let matches = RecordFilter::new(query).build().filter(dataset.records());
//! assert_eq!(matches.len(), 1);
//!
//! let annotated = HighlightAnnotator::new(query).build().annotate(&matches);
//! assert_eq!(annotated[0].get("title"), Some("<mark>Eleventy</mark> is simple"));
//! assert_eq!(annotated[0].get("body"), Some("static site"));
//! ```
//!
//! # Query Semantics
//!
//! | Query | Filter | Highlight |
//! |-------|--------|-----------|
//! | empty | every record | no markers |
//! | literal text | records with a field containing it, any case | every occurrence |
//! | invalid pattern ([`QueryMode::Pattern`]) | no records, diagnostic reported | no markers |
//!
//! In [`QueryMode::Literal`] (the default) characters such as `+`, `.` or `(`
//! match themselves. [`QueryMode::Pattern`] keeps regular expression meaning
//! and turns a malformed pattern into a [`QueryError`] diagnostic instead of a
//! failure.

mod annotate;
mod error;
mod filter;
mod matcher;
mod mode;
mod record;
mod traits;

// Re-export public API
pub use annotate::{annotate, HighlightAnnotator, HighlightAnnotatorBuilder, Marker};
pub use error::{QueryError, Result};
pub use filter::{filter, MatchResult, RecordFilter, RecordFilterBuilder};
pub use matcher::{matches, FieldMatcher};
pub use mode::QueryMode;
pub use record::{AnnotatedRecord, Dataset, Record};
pub use traits::Searchable;
