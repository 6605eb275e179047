//! Image cache manager
//!
//! Orchestrates the disk store and the network fetcher behind a single
//! operation: load a decoded image for a URL. Cached bytes are served before
//! the network is touched; freshly fetched bytes are persisted best-effort
//! after they decode successfully.

use image::DynamicImage;
use tracing::{debug, warn};

use super::fetcher::ImageFetcher;
use super::key::hash_key;
use super::store::DiskStore;

/// Outcome of a single load call
///
/// Callers that only want image-or-nothing can use
/// [`ImageCacheManager::load_image`]; this enum keeps the hit/miss and
/// failure-kind distinction available for callers that care.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Decoded from bytes already on disk; the network was not touched
    Cached(DynamicImage),
    /// Fetched from the network, decoded, and persisted to disk
    Downloaded(DynamicImage),
    /// The fetcher reported an error; nothing was written
    FetchFailed,
    /// Bytes could not be decoded, whether from disk or network
    DecodeFailed,
}

impl LoadOutcome {
    /// Collapses the outcome to the image, if any
    pub fn into_image(self) -> Option<DynamicImage> {
        match self {
            LoadOutcome::Cached(image) | LoadOutcome::Downloaded(image) => Some(image),
            LoadOutcome::FetchFailed | LoadOutcome::DecodeFailed => None,
        }
    }
}

/// Disk-first image loader
///
/// Constructed once at startup and passed by reference to consumers; tests
/// build isolated instances over temporary directories and fake fetchers.
/// Concurrent loads of the same uncached URL each fetch independently and
/// race on the destination file; content is identical per URL, so the last
/// write winning is benign.
pub struct ImageCacheManager {
    /// Persistence layer for raw image bytes
    store: DiskStore,
    /// Network retrieval capability, injected for testability
    fetcher: Box<dyn ImageFetcher>,
}

impl ImageCacheManager {
    /// Creates a manager over the platform cache directory and a real HTTP
    /// fetcher
    ///
    /// Returns `None` if the platform gives no cache location.
    pub fn new() -> Option<Self> {
        let store = DiskStore::new()?;
        Some(Self::with_parts(
            store,
            Box::new(super::fetcher::HttpFetcher::new()),
        ))
    }

    /// Creates a manager from an explicit store and fetcher
    pub fn with_parts(store: DiskStore, fetcher: Box<dyn ImageFetcher>) -> Self {
        Self { store, fetcher }
    }

    /// Loads the image behind a URL, preferring the disk cache
    ///
    /// # Behavior
    /// - Cached bytes that decode are returned without a network call.
    /// - Cached bytes that fail to decode end the call with `DecodeFailed`;
    ///   there is no fallback fetch within that call.
    /// - On a cache miss the fetcher runs; fetched bytes are decoded first
    ///   and persisted only on success, so undecodable payloads never land
    ///   on disk. A failed write does not affect the returned image.
    pub async fn load(&self, url: &str) -> LoadOutcome {
        let key = hash_key(url);

        if let Some(bytes) = self.store.read(&key) {
            return match image::load_from_memory(&bytes) {
                Ok(image) => {
                    debug!("cache hit for {}", url);
                    LoadOutcome::Cached(image)
                }
                Err(err) => {
                    warn!("corrupt cache entry {} for {}: {}", key, url, err);
                    LoadOutcome::DecodeFailed
                }
            };
        }

        let bytes = match self.fetcher.fetch(url).await {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("fetch failed for {}: {}", url, err);
                return LoadOutcome::FetchFailed;
            }
        };

        match image::load_from_memory(&bytes) {
            Ok(image) => {
                self.store.write(&key, &bytes);
                LoadOutcome::Downloaded(image)
            }
            Err(err) => {
                warn!("undecodable payload for {}: {}", url, err);
                LoadOutcome::DecodeFailed
            }
        }
    }

    /// Loads the image behind a URL, collapsing all failures to `None`
    ///
    /// This is the surface the display layer consumes: it only ever needs
    /// "image" or "no image".
    pub async fn load_image(&self, url: &str) -> Option<DynamicImage> {
        self.load(url).await.into_image()
    }
}
