//! Dataset sources.
//!
//! A [`DatasetSource`] hands the engine a [`Dataset`]. [`CachedSource`]
//! implements the fetch-once strategy: the dataset is fetched at most once
//! per session, the raw payload is kept in a [`SessionStore`], and later
//! loads are served from memory.

use glean_core::Dataset;
use once_cell::sync::OnceCell;

use crate::decode::decode_dataset;
use crate::error::SourceError;
use crate::fetch::Fetcher;
use crate::store::{SessionStore, DEFAULT_CACHE_KEY};

/// Anything that can provide the dataset to search.
pub trait DatasetSource: Send + Sync {
    /// Load the dataset.
    ///
    /// Within one session repeated calls return the same dataset. Failures are
    /// returned, never swallowed, and are not remembered: the next call tries
    /// again.
    fn load(&self) -> Result<Dataset, SourceError>;
}

impl DatasetSource for Dataset {
    fn load(&self) -> Result<Dataset, SourceError> {
        Ok(self.clone())
    }
}

impl<S: DatasetSource + ?Sized> DatasetSource for Box<S> {
    fn load(&self) -> Result<Dataset, SourceError> {
        (**self).load()
    }
}

/// Fetch-once, session-cached dataset source.
///
/// Load order:
/// 1. the dataset already decoded by this source,
/// 2. the raw payload found in the session store under the cache key,
/// 3. a fresh fetch, whose payload is then written to the session store.
///
/// # Example
///
/// ```
/// use glean_source::{CachedSource, DatasetSource, MemoryStore, StaticFetcher};
///
/// let source = CachedSource::new(
///     "/search.json",
///     StaticFetcher::new(r#"[{"title":"Hello"}]"#),
///     MemoryStore::new(),
/// );
///
/// let dataset = source.load().unwrap();
/// assert_eq!(dataset.records()[0].get("title"), Some("Hello"));
/// ```
pub struct CachedSource<F, S> {
    location: String,
    cache_key: String,
    fetcher: F,
    store: S,
    loaded: OnceCell<Dataset>,
}

impl<F: Fetcher, S: SessionStore> CachedSource<F, S> {
    pub fn new(location: impl Into<String>, fetcher: F, store: S) -> Self {
        Self {
            location: location.into(),
            cache_key: DEFAULT_CACHE_KEY.to_string(),
            fetcher,
            store,
            loaded: OnceCell::new(),
        }
    }

    /// Cache the payload under `key` instead of [`DEFAULT_CACHE_KEY`].
    pub fn with_cache_key(mut self, key: impl Into<String>) -> Self {
        self.cache_key = key.into();
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns `true` once a load has succeeded.
    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    fn load_from_store(&self) -> Option<Dataset> {
        let cached = self.store.get(&self.cache_key)?;
        match decode_dataset(cached.as_bytes()) {
            Ok(dataset) => {
                tracing::debug!(
                    key = %self.cache_key,
                    records = dataset.len(),
                    "searchable data served from session store"
                );
                Some(dataset)
            }
            Err(err) => {
                tracing::warn!(
                    key = %self.cache_key,
                    error = %err,
                    "discarding unreadable searchable data in session store"
                );
                None
            }
        }
    }

    fn fetch_and_store(&self) -> Result<Dataset, SourceError> {
        tracing::info!(location = %self.location, "fetching searchable data");

        let bytes = self.fetcher.fetch(&self.location).map_err(|err| {
            tracing::warn!(location = %self.location, error = %err, "fetching searchable data failed");
            err
        })?;

        let payload = String::from_utf8(bytes)
            .map_err(|e| SourceError::invalid(format!("payload is not UTF-8: {}", e)))?;
        let dataset = decode_dataset(payload.as_bytes())?;

        self.store.set(&self.cache_key, payload);
        tracing::debug!(
            location = %self.location,
            records = dataset.len(),
            "searchable data cached for this session"
        );

        Ok(dataset)
    }
}

impl<F: Fetcher, S: SessionStore> DatasetSource for CachedSource<F, S> {
    fn load(&self) -> Result<Dataset, SourceError> {
        self.loaded
            .get_or_try_init(|| match self.load_from_store() {
                Some(dataset) => Ok(dataset),
                None => self.fetch_and_store(),
            })
            .cloned()
    }
}

impl<F, S> std::fmt::Debug for CachedSource<F, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedSource")
            .field("location", &self.location)
            .field("cache_key", &self.cache_key)
            .field("loaded", &self.loaded.get().is_some())
            .finish()
    }
}
