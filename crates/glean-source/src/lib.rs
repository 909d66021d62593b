//! # Glean Source - dataset acquisition
//!
//! Obtains the [`Dataset`](glean_core::Dataset) searched by the engine and
//! keeps it for the rest of the session:
//!
//! - [`DatasetSource`]: `load()` contract used by the search facade
//! - [`CachedSource`]: fetch once, cache the raw payload in a [`SessionStore`],
//!   serve every later load from memory
//! - [`Fetcher`]: [`HttpFetcher`] (blocking, with timeout), [`FileFetcher`],
//!   [`StaticFetcher`]
//! - [`decode_dataset`]: JSON array of flat objects to dataset
//!
//! Failures surface as [`SourceError::DataUnavailable`] or
//! [`SourceError::InvalidData`] so the caller can show a degraded state.
//!
//! ```rust
//! use std::sync::Arc;
//! use glean_source::{CachedSource, DatasetSource, MemoryStore, SessionStore, StaticFetcher};
//!
//! let store = Arc::new(MemoryStore::new());
//! let source = CachedSource::new(
//!     "https://example.com/search.json",
//!     StaticFetcher::new(r#"[{"title":"Eleventy is simple"}]"#),
//!     Arc::clone(&store),
//! );
//!
//! assert_eq!(source.load().unwrap().len(), 1);
//! assert!(store.get("searchable-json-data").is_some());
//! ```

mod decode;
mod error;
mod fetch;
mod source;
mod store;

pub use decode::decode_dataset;
pub use error::SourceError;
pub use fetch::{FileFetcher, Fetcher, HttpFetcher, StaticFetcher};
pub use source::{CachedSource, DatasetSource};
pub use store::{MemoryStore, SessionStore, DEFAULT_CACHE_KEY};
