use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::session::ports::SessionStore;

/// Durable store keeping the whole key/value map as one JSON file.
///
/// Plays the role browser local storage plays for the original storefront: a
/// small same-origin map surviving reloads. Any I/O or parse failure degrades
/// to an empty map or a dropped write, never an error.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store, loading any existing entries from `path`.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path).await;

        tracing::info!(path = %path.display(), entries = entries.len(), "File store opened");

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    async fn load(path: &Path) -> HashMap<String, String> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Store file unreadable, starting empty");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Store file corrupt, starting empty");
                HashMap::new()
            }
        }
    }

    async fn flush(&self, entries: &HashMap<String, String>) {
        let serialized = match serde_json::to_string_pretty(entries) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to serialize store");
                return;
            }
        };

        if let Err(e) = tokio::fs::write(&self.path, serialized).await {
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to write store file");
        }
    }
}

#[async_trait]
impl SessionStore for JsonFileStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries).await;
    }

    async fn remove(&self, key: &str) {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            self.flush(&entries).await;
        }
    }
}
