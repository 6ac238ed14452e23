use async_trait::async_trait;

use crate::session::ports::SessionStore;

/// Store for environments with no persistent backing.
///
/// Mirrors running the storefront outside a browser context: reads are
/// absent, writes are dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

#[async_trait]
impl SessionStore for NullStore {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: &str) {}

    async fn remove(&self, _key: &str) {}
}
