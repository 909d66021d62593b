//! # Glean - search for small static datasets
//!
//! Glean answers a search box over a JSON array of flat records, the kind a
//! static site generator emits as `search.json`:
//!
//! 1. the dataset is fetched once per session and cached
//! 2. records with any field containing the query (case-insensitively) are
//!    selected, in dataset order
//! 3. matched text is wrapped in `<mark>` markers
//! 4. the matches are rendered into an HTML results list
//!
//! ## Quick Start
//!
//! ```rust
//! use glean::{Settings, StaticSearch};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let data = dir.path().join("search.json");
//! std::fs::write(&data, r#"[{"title":"Eleventy is simple","url":"/e/"}]"#).unwrap();
//!
//! let settings = Settings::from_yaml_str(&format!(
//!     "pathToTheSearchableData: {}\nshowStaticSearchLogo: false\n",
//!     data.display()
//! ))
//! .unwrap();
//!
//! let search = StaticSearch::from_settings(settings).unwrap();
//! let html = search.render("simple").unwrap();
//! assert!(html.contains("<p>Eleventy is <mark>simple</mark></p>"));
//! ```
//!
//! The building blocks are usable on their own: see [`RecordFilter`],
//! [`HighlightAnnotator`], [`CachedSource`] and [`ResultsRenderer`].

mod error;
mod search;
mod settings;

pub use error::GleanError;
pub use search::{DefaultSource, SearchOutcome, StaticSearch};
pub use settings::{ConfigError, Settings};

pub use glean_core::{
    annotate, filter, matches, AnnotatedRecord, Dataset, FieldMatcher, HighlightAnnotator,
    HighlightAnnotatorBuilder, Marker, MatchResult, QueryError, QueryMode, Record, RecordFilter,
    RecordFilterBuilder, Searchable,
};
pub use glean_render::{RenderError, ResultsRenderer, ResultsRendererBuilder};
pub use glean_source::{
    decode_dataset, CachedSource, DatasetSource, Fetcher, FileFetcher, HttpFetcher, MemoryStore,
    SessionStore, SourceError, StaticFetcher, DEFAULT_CACHE_KEY,
};
