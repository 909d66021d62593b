//! Error types for dataset acquisition.

/// Errors that can occur while obtaining a dataset.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The data could not be obtained: unreachable host, timeout, non-success
    /// status, or an unreadable file.
    #[error("Searchable data unavailable from '{location}': {reason}")]
    DataUnavailable { location: String, reason: String },

    /// The data was obtained but is not a JSON array of objects.
    #[error("Searchable data is invalid: {0}")]
    InvalidData(String),
}

impl SourceError {
    /// Create a data-unavailable error.
    pub fn unavailable(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            location: location.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-data error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Returns `true` for [`SourceError::DataUnavailable`].
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidData(err.to_string())
    }
}
