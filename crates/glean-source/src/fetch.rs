//! Byte fetchers.
//!
//! A [`Fetcher`] turns a location into raw bytes. [`HttpFetcher`] talks to a
//! remote server, [`FileFetcher`] reads the local filesystem and
//! [`StaticFetcher`] serves bytes already in memory.

use std::time::Duration;

use crate::error::SourceError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("glean/", env!("CARGO_PKG_VERSION"));

/// A source of raw bytes.
pub trait Fetcher: Send + Sync {
    /// Fetch the bytes stored at `location`.
    ///
    /// Any failure to obtain them is a [`SourceError::DataUnavailable`].
    fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError>;
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        (**self).fetch(location)
    }
}

/// HTTP(S) fetcher with a request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Give up on requests that take longer than `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()
            .map_err(|e| SourceError::unavailable(location, format!("HTTP client setup failed: {}", e)))?;

        let response = client
            .get(location)
            .send()
            .map_err(|e| SourceError::unavailable(location, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SourceError::unavailable(
                location,
                format!("server responded with status {}", response.status()),
            ));
        }

        let body = response
            .bytes()
            .map_err(|e| SourceError::unavailable(location, format!("reading body failed: {}", e)))?;

        Ok(body.to_vec())
    }
}

/// Local file fetcher; the location is a filesystem path.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, SourceError> {
        std::fs::read(location).map_err(|e| SourceError::unavailable(location, e.to_string()))
    }
}

/// Serves the same in-memory bytes for every location.
///
/// Useful for embedded data and for tests.
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    bytes: Vec<u8>,
}

impl StaticFetcher {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, _location: &str) -> Result<Vec<u8>, SourceError> {
        Ok(self.bytes.clone())
    }
}
