use async_trait::async_trait;

use crate::domain::session::models::Notification;
use crate::domain::session::models::NotificationKind;
use crate::session::errors::NotificationError;
use crate::session::ports::NotificationSink;

/// Notification sink that emits through the tracing pipeline.
///
/// Stands in for the toast layer when the session container runs headless.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!(message = %notification.message, "Notification")
            }
            NotificationKind::Error => {
                tracing::warn!(message = %notification.message, "Notification")
            }
        }
        Ok(())
    }
}
