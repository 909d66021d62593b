//! Top-level error type.

use glean_render::RenderError;
use glean_source::SourceError;

use crate::settings::ConfigError;

/// Any failure surfaced by [`StaticSearch`](crate::StaticSearch).
///
/// Invalid query patterns are not errors: they come back as a diagnostic on
/// the [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, thiserror::Error)]
pub enum GleanError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GleanError {
    /// Returns `true` when the searchable data could not be obtained.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::Source(err) if err.is_unavailable())
    }
}
