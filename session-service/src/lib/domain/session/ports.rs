use async_trait::async_trait;

use crate::domain::session::models::Notification;
use crate::session::errors::NotificationError;

/// Port for the persistent key/value store backing the session layer.
///
/// Adapters never surface failures: a backing that cannot be reached reports
/// "absent" on reads and drops writes, logging at warn level. The session
/// container is the only writer.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str);

    /// Remove the entry under `key`, if present.
    async fn remove(&self, key: &str);
}

/// Port for transient user feedback (toasts in the original storefront).
#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    /// Deliver one success/error notification.
    ///
    /// # Errors
    /// * `DeliveryFailed` - Sink could not deliver the notification
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError>;
}
