use crate::errors::StorageError;
use std::{
    collections::BTreeMap,
    future::Future,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

// `set`/`remove` only stage; `flush` persists everything staged.
pub trait Storage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
    fn flush(&mut self) -> impl Future<Output = Result<(), StorageError>> + Send;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    async fn flush(&mut self) -> Result<(), StorageError> {
        Ok(())
    }
}

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl FileStorage {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = load_entries(&path).await;
        Self {
            path,
            entries,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.dirty = true;
        }
    }

    async fn flush(&mut self) -> Result<(), StorageError> {
        if !self.dirty {
            return Ok(());
        }
        let payload = serde_json::to_vec_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, payload).await?;
        fs::rename(&tmp, &self.path).await?;
        self.dirty = false;
        Ok(())
    }
}

async fn load_entries(path: &Path) -> BTreeMap<String, String> {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(entries) => entries,
            Err(err) => {
                error!("failed to parse data file: {err}");
                BTreeMap::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
        Err(err) => {
            error!("failed to read data file: {err}");
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn file_storage_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut storage = FileStorage::open(&path).await;
        storage.set("jokeCount", "3".to_string());
        storage.set("favorites", "[\"97\"]".to_string());
        storage.flush().await.unwrap();
        drop(storage);

        let reopened = FileStorage::open(&path).await;
        assert_eq!(reopened.get("jokeCount").as_deref(), Some("3"));
        assert_eq!(reopened.get("favorites").as_deref(), Some("[\"97\"]"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn staged_changes_are_not_written_before_flush() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut storage = FileStorage::open(&path).await;
        storage.set("jokeCount", "1".to_string());
        assert!(!path.exists());

        storage.flush().await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn file_storage_remove_deletes_key() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        let mut storage = FileStorage::open(&path).await;
        storage.set("jokesHistory", "[]".to_string());
        storage.flush().await.unwrap();
        storage.remove("jokesHistory");
        storage.flush().await.unwrap();

        assert!(FileStorage::open(&path).await.get("jokesHistory").is_none());
    }

    #[tokio::test]
    async fn corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::open(&path).await;
        assert!(storage.get("jokeCount").is_none());
    }

    #[tokio::test]
    async fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert!(storage.get("k").is_none());
        storage.set("k", "v".to_string());
        storage.flush().await.unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        storage.remove("k");
        assert!(storage.get("k").is_none());
    }
}
