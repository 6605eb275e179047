//! Disk store for raw image bytes
//!
//! Persists one file per cache key under a single cache root directory. The
//! root is created lazily on first write; if it cannot be created the store
//! degrades to reporting misses and skipping writes rather than erroring.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the platform cache path that holds image entries
const IMAGE_CACHE_DIR: &str = "ImageCache";

/// Keyed byte storage against a single cache root directory
///
/// Entries carry no metadata: filename is the hashed key, content is the raw
/// bytes. The store never deletes entries itself; an entry is only ever
/// replaced by a later write of the same key.
#[derive(Debug, Clone)]
pub struct DiskStore {
    /// Directory where cache entries are stored
    root: PathBuf,
}

impl DiskStore {
    /// Creates a new DiskStore rooted in the platform cache directory
    ///
    /// Uses `~/.cache/recipedeck/ImageCache/` on Linux, or the equivalent
    /// platform path elsewhere. Returns `None` if the platform gives no cache
    /// location (e.g., no home directory).
    pub fn new() -> Option<Self> {
        let project_dirs = ProjectDirs::from("", "", "recipedeck")?;
        let root = project_dirs.cache_dir().join(IMAGE_CACHE_DIR);
        Some(Self { root })
    }

    /// Creates a new DiskStore with a custom root directory
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_dir(root: PathBuf) -> Self {
        Self { root }
    }

    /// Ensures the cache root exists, returning its path
    ///
    /// Idempotent: repeated calls after a successful creation are no-ops and
    /// return the same path.
    pub fn ensure_root(&self) -> std::io::Result<&Path> {
        fs::create_dir_all(&self.root)?;
        Ok(&self.root)
    }

    /// Returns the path an entry for the given key lives at
    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Reads the stored bytes for a key
    ///
    /// Returns `None` if no entry exists or the read fails for any reason;
    /// a concurrently deleted file is indistinguishable from a miss.
    pub fn read(&self, key: &str) -> Option<Vec<u8>> {
        fs::read(self.entry_path(key)).ok()
    }

    /// Persists bytes under a key, overwriting any existing entry
    ///
    /// Best-effort: failures (unwritable root, disk full) are logged at debug
    /// level and swallowed. Persistence is an optimization, not a correctness
    /// requirement.
    pub fn write(&self, key: &str, data: &[u8]) {
        if let Err(err) = self.try_write(key, data) {
            debug!("skipping cache write for {}: {}", key, err);
        }
    }

    fn try_write(&self, key: &str, data: &[u8]) -> std::io::Result<()> {
        self.ensure_root()?;
        fs::write(self.entry_path(key), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (DiskStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = DiskStore::with_dir(temp_dir.path().join("ImageCache"));
        (store, temp_dir)
    }

    #[test]
    fn test_read_returns_none_for_missing_key() {
        let (store, _temp_dir) = create_test_store();
        assert!(store.read("deadbeefdeadbeef").is_none());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let (store, _temp_dir) = create_test_store();
        store.write("abc123", b"payload");
        assert_eq!(store.read("abc123"), Some(b"payload".to_vec()));
    }

    #[test]
    fn test_write_overwrites_existing_entry() {
        let (store, _temp_dir) = create_test_store();
        store.write("key", b"first");
        store.write("key", b"second");
        assert_eq!(store.read("key"), Some(b"second".to_vec()));
    }

    #[test]
    fn test_write_creates_root_if_missing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let nested = temp_dir.path().join("a").join("b").join("ImageCache");
        let store = DiskStore::with_dir(nested.clone());

        store.write("key", b"data");

        assert!(nested.exists(), "Cache root should be created on write");
        assert!(nested.join("key").exists(), "Entry file should exist");
    }

    #[test]
    fn test_ensure_root_is_idempotent() {
        let (store, _temp_dir) = create_test_store();

        let first = store.ensure_root().expect("First call should succeed").to_path_buf();
        let second = store
            .ensure_root()
            .expect("Repeated call should succeed")
            .to_path_buf();

        assert_eq!(first, second);
        assert!(first.exists());
    }

    #[test]
    fn test_unusable_root_degrades_to_misses_and_skipped_writes() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        // A root nested under a regular file can never be created
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, b"").expect("Should create blocker file");
        let store = DiskStore::with_dir(blocker.join("ImageCache"));

        assert!(store.ensure_root().is_err());
        store.write("key", b"data");
        assert!(store.read("key").is_none());
    }

    #[test]
    fn test_new_uses_platform_cache_path() {
        if let Some(store) = DiskStore::new() {
            let path_str = store.root.to_string_lossy().into_owned();
            assert!(path_str.contains("recipedeck"));
            assert!(path_str.contains(IMAGE_CACHE_DIR));
        }
        // Test passes if new() returns None (e.g., no home directory in CI)
    }
}
