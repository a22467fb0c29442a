//! Key/value backends for persisted user state

use crate::error::StoreError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// String key/value persistence, the shape of browser local storage
#[async_trait]
pub trait StateBackend: Send + Sync {
    /// Read the value stored under a key, if any
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store a value under a key, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// One file per key under a root directory
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend storing its files under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a key to its file, rejecting keys that could escape the root
    fn key_path(&self, key: &str) -> StoreResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl StateBackend for FileBackend {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::BackendError(e.to_string())),
        }
    }

    /// Writes to a temp file then renames to avoid partial writes
    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.key_path(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StoreError::BackendError(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, value)
            .await
            .map_err(|e| StoreError::BackendError(e.to_string()))?;
        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StoreError::BackendError(e.to_string()))
    }
}

/// In-memory backend (for testing)
#[derive(Default)]
pub struct MemoryBackend {
    data: std::sync::RwLock<std::collections::HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before the store is opened
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.data
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl StateBackend for MemoryBackend {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.read().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.data
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_backend() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("nightMode").await.unwrap(), None);

        backend.set("nightMode", "true").await.unwrap();
        assert_eq!(backend.get("nightMode").await.unwrap().as_deref(), Some("true"));

        backend.set("nightMode", "false").await.unwrap();
        assert_eq!(backend.get("nightMode").await.unwrap().as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn test_file_backend_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("state"));

        assert_eq!(backend.get("quranBookmarks").await.unwrap(), None);
        backend.set("quranBookmarks", "[\"1:1\"]").await.unwrap();
        assert_eq!(
            backend.get("quranBookmarks").await.unwrap().as_deref(),
            Some("[\"1:1\"]")
        );
        assert!(dir.path().join("state/quranBookmarks.json").exists());
        assert!(!dir.path().join("state/quranBookmarks.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_file_backend_rejects_traversal() {
        let dir = tempfile::TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());

        for key in ["../escape", "a/b", "", "dot.key"] {
            assert!(matches!(
                backend.set(key, "x").await,
                Err(StoreError::InvalidKey(_))
            ));
        }
    }
}
