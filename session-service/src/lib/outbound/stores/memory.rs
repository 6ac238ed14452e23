use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::session::ports::SessionStore;

/// Non-durable store.
///
/// The default backing for tests and for embeddings that do not need
/// persistence across restarts.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.entries.write().await.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = InMemoryStore::new();

        assert_eq!(store.get("cart").await, None);

        store.set("cart", "[]").await;
        assert_eq!(store.get("cart").await.as_deref(), Some("[]"));

        store.set("cart", "[1]").await;
        assert_eq!(store.get("cart").await.as_deref(), Some("[1]"));

        store.remove("cart").await;
        assert_eq!(store.get("cart").await, None);
    }
}
