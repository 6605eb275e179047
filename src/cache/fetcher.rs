//! Network fetch boundary for image bytes
//!
//! The cache manager only needs "bytes for a URL, or an error". That seam is
//! a trait so tests can substitute canned responses for real network I/O.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Errors that can occur when fetching image bytes
///
/// The cache manager treats every variant the same way (no bytes available);
/// the distinction exists for logging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Unexpected HTTP status {0}")]
    Status(u16),
}

/// Retrieves raw bytes for a URL
///
/// Implemented by [`HttpFetcher`] in production and by canned-response fakes
/// in tests.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetches the raw bytes behind a URL
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Production fetcher backed by a reqwest HTTP client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// HTTP client for making requests
    http_client: Client,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher with a default client
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
