//! The search facade.
//!
//! [`StaticSearch`] wires acquisition, matching, highlighting and rendering
//! together the way a search box uses them: load the data once, then filter
//! and highlight on every query.

use glean_core::{
    AnnotatedRecord, FieldMatcher, HighlightAnnotator, QueryError, Record, RecordFilter,
};
use glean_render::ResultsRenderer;
use glean_source::{
    CachedSource, DatasetSource, Fetcher, FileFetcher, HttpFetcher, MemoryStore,
};

use crate::error::GleanError;
use crate::settings::Settings;

/// Source built by [`StaticSearch::from_settings`].
pub type DefaultSource = CachedSource<Box<dyn Fetcher>, MemoryStore>;

/// The result of one query.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    matches: Vec<Record>,
    annotated: Option<Vec<AnnotatedRecord>>,
    diagnostic: Option<QueryError>,
}

impl SearchOutcome {
    /// Matched records, in dataset order, unmodified.
    pub fn matches(&self) -> &[Record] {
        &self.matches
    }

    /// Highlighted copies of [`matches`](Self::matches), present when
    /// highlighting is enabled.
    pub fn annotated(&self) -> Option<&[AnnotatedRecord]> {
        self.annotated.as_deref()
    }

    /// Why the query matched nothing, when it could not be used.
    pub fn diagnostic(&self) -> Option<&QueryError> {
        self.diagnostic.as_ref()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Search over one dataset with one set of settings.
///
/// # Example
///
/// ```
/// use glean::{Dataset, Record, Settings, StaticSearch};
///
/// let dataset = Dataset::new(vec![
///     Record::new().with("title", "Eleventy is simple").with("body", "static site"),
///     Record::new().with("title", "Other").with("body", "nothing"),
/// ]);
///
/// let search = StaticSearch::new(Settings::default(), dataset).unwrap();
/// let outcome = search.search("eleventy").unwrap();
///
/// assert_eq!(outcome.len(), 1);
/// let annotated = outcome.annotated().unwrap();
/// assert_eq!(annotated[0].get("title"), Some("<mark>Eleventy</mark> is simple"));
/// ```
#[derive(Debug)]
pub struct StaticSearch<S> {
    settings: Settings,
    source: S,
    renderer: ResultsRenderer,
}

impl<S: DatasetSource> StaticSearch<S> {
    /// Fails if the configured result template does not compile.
    pub fn new(settings: Settings, source: S) -> Result<Self, GleanError> {
        let renderer = settings.renderer()?;
        Ok(Self {
            settings,
            source,
            renderer,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Loads the dataset ahead of the first query.
    pub fn prefetch(&self) -> Result<(), GleanError> {
        let dataset = self.source.load()?;
        tracing::debug!(records = dataset.len(), "searchable data ready");
        Ok(())
    }

    /// Filters the dataset by `query` and, when enabled, highlights the
    /// matches.
    pub fn search(&self, query: &str) -> Result<SearchOutcome, GleanError> {
        let dataset = self.source.load()?;

        let matcher = FieldMatcher::new(query, self.settings.query_mode());
        let filter = RecordFilter::from_matcher(matcher.clone());
        let result = filter.filter(dataset.records());

        let annotated = if self.settings.highlight_keywords {
            let annotator = HighlightAnnotator::from_matcher(matcher, self.settings.marker());
            Some(annotator.annotate(&result))
        } else {
            None
        };

        Ok(SearchOutcome {
            matches: result.cloned(),
            annotated,
            diagnostic: result.diagnostic().cloned(),
        })
    }

    /// Searches and renders the results list as HTML.
    pub fn render(&self, query: &str) -> Result<String, GleanError> {
        let outcome = self.search(query)?;
        let html = match outcome.annotated() {
            Some(annotated) => self.renderer.render(annotated)?,
            None => self.renderer.render(outcome.matches())?,
        };
        Ok(html)
    }
}

impl StaticSearch<DefaultSource> {
    /// Builds a search whose data comes from `pathToTheSearchableData`.
    ///
    /// `http://` and `https://` locations are fetched over HTTP with the
    /// configured timeout, anything else is read from disk. The raw data is
    /// kept in an in-memory session store under `cacheKey`.
    pub fn from_settings(settings: Settings) -> Result<Self, GleanError> {
        let location = settings.data_location()?.to_string();

        let fetcher: Box<dyn Fetcher> = if is_remote(&location) {
            Box::new(HttpFetcher::new().with_timeout(settings.fetch_timeout()))
        } else {
            Box::new(FileFetcher)
        };

        let source = CachedSource::new(location, fetcher, MemoryStore::new())
            .with_cache_key(settings.cache_key.as_str());

        Self::new(settings, source)
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use glean_core::{Dataset, QueryMode};
    use glean_source::SourceError;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Record::new()
                .with("title", "Eleventy is simple")
                .with("body", "static site"),
            Record::new().with("title", "Other").with("body", "nothing"),
        ])
    }

    struct Unavailable;

    impl DatasetSource for Unavailable {
        fn load(&self) -> Result<Dataset, SourceError> {
            Err(SourceError::unavailable("/search.json", "offline"))
        }
    }

    #[test]
    fn remote_locations() {
        assert!(is_remote("https://example.com/search.json"));
        assert!(is_remote("HTTP://example.com/search.json"));
        assert!(!is_remote("/srv/site/search.json"));
        assert!(!is_remote("search.json"));
    }

    #[test]
    fn search_without_highlighting() {
        let settings = Settings {
            highlight_keywords: false,
            ..Settings::default()
        };
        let search = StaticSearch::new(settings, dataset()).unwrap();
        let outcome = search.search("static").unwrap();

        assert_eq!(outcome.len(), 1);
        assert!(outcome.annotated().is_none());
        assert_eq!(outcome.matches()[0].get("body"), Some("static site"));
    }

    #[test]
    fn empty_query_returns_everything_unmarked() {
        let search = StaticSearch::new(Settings::default(), dataset()).unwrap();
        let outcome = search.search("").unwrap();

        assert_eq!(outcome.matches(), dataset().records());
        let annotated = outcome.annotated().unwrap();
        assert_eq!(annotated[1].get("title"), Some("Other"));
    }

    #[test]
    fn invalid_pattern_is_a_diagnostic() {
        let settings = Settings {
            query_literal_mode: false,
            ..Settings::default()
        };
        assert_eq!(settings.query_mode(), QueryMode::Pattern);

        let search = StaticSearch::new(settings, dataset()).unwrap();
        let outcome = search.search("(C++").unwrap();

        assert!(outcome.is_empty());
        assert_eq!(outcome.diagnostic().unwrap().pattern(), "(C++");
    }

    #[test]
    fn unavailable_data_is_reported() {
        let search = StaticSearch::new(Settings::default(), Unavailable).unwrap();

        assert!(search.prefetch().unwrap_err().is_data_unavailable());
        assert!(search.search("x").unwrap_err().is_data_unavailable());
    }

    #[test]
    fn broken_template_fails_construction() {
        let settings = Settings {
            search_results_template: "{{ title".to_string(),
            ..Settings::default()
        };
        let err = StaticSearch::new(settings, dataset()).unwrap_err();
        assert!(matches!(err, GleanError::Render(_)));
    }

    #[test]
    fn from_settings_requires_location() {
        let err = StaticSearch::from_settings(Settings::default()).unwrap_err();
        assert!(matches!(
            err,
            GleanError::Config(crate::ConfigError::MissingDataLocation)
        ));
    }
}
