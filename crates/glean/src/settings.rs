//! Search settings.
//!
//! Option names follow the camelCase keys used in page configuration, so a
//! YAML or JSON block written for a site loads unchanged:
//!
//! ```yaml
//! pathToTheSearchableData: /search.json
//! searchResultsTemplate: '<a href="{{ url }}">{{ title }}</a>'
//! noSearchResultsFoundMessage: Nothing here
//! showStaticSearchLogo: false
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use glean_core::{Marker, QueryMode};
use glean_render::{RenderError, ResultsRenderer, DEFAULT_ITEM_TEMPLATE, DEFAULT_NO_RESULTS_MESSAGE};
use glean_source::DEFAULT_CACHE_KEY;
use serde::{Deserialize, Serialize};

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported settings format '{}': expected .yaml, .yml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("pathToTheSearchableData is not set")]
    MissingDataLocation,
}

/// Configuration for a [`StaticSearch`](crate::StaticSearch).
///
/// Every field has a default, so partial documents are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Where the searchable JSON lives: an `http(s)` URL or a file path.
    pub path_to_the_searchable_data: Option<String>,
    /// Template rendered once per result, record fields as variables.
    pub search_results_template: String,
    pub no_search_results_found_message: String,
    pub show_static_search_logo: bool,
    /// Wrap matched text in markers before rendering.
    pub highlight_keywords: bool,
    /// Treat queries as literal text. When false, queries are regular
    /// expression fragments.
    pub query_literal_mode: bool,
    pub marker_start: String,
    pub marker_end: String,
    /// Session store key for the raw data.
    pub cache_key: String,
    pub fetch_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        let marker = Marker::default();
        Self {
            path_to_the_searchable_data: None,
            search_results_template: DEFAULT_ITEM_TEMPLATE.to_string(),
            no_search_results_found_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            show_static_search_logo: true,
            highlight_keywords: true,
            query_literal_mode: true,
            marker_start: marker.start().to_string(),
            marker_end: marker.end().to_string(),
            cache_key: DEFAULT_CACHE_KEY.to_string(),
            fetch_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads settings from a file; the extension selects the format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let loader: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loading search settings");
        loader(&source)
    }

    /// The configured data location.
    pub fn data_location(&self) -> Result<&str, ConfigError> {
        self.path_to_the_searchable_data
            .as_deref()
            .filter(|location| !location.trim().is_empty())
            .ok_or(ConfigError::MissingDataLocation)
    }

    pub fn query_mode(&self) -> QueryMode {
        QueryMode::from_literal_flag(self.query_literal_mode)
    }

    pub fn marker(&self) -> Marker {
        Marker::new(self.marker_start.as_str(), self.marker_end.as_str())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Builds the results renderer these settings describe.
    pub fn renderer(&self) -> Result<ResultsRenderer, RenderError> {
        ResultsRenderer::builder()
            .item_template(self.search_results_template.as_str())
            .no_results_message(self.no_search_results_found_message.as_str())
            .show_logo(self.show_static_search_logo)
            .build()
    }
}
