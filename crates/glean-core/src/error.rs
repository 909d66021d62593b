//! Error types for the matching engine.

use thiserror::Error;

/// Errors raised while compiling a query.
///
/// None of these abort a filter or annotate pass. A matcher that fails to
/// compile matches nothing and hands the error back as a diagnostic.
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    /// The query is not a well-formed pattern (only possible in
    /// [`QueryMode::Pattern`](crate::QueryMode::Pattern)).
    #[error("invalid query pattern '{pattern}': {source}")]
    InvalidQueryPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl QueryError {
    /// Returns the query text that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            QueryError::InvalidQueryPattern { pattern, .. } => pattern,
        }
    }
}

/// Result type for query compilation.
pub type Result<T> = std::result::Result<T, QueryError>;
