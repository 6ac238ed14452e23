use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use session_service::domain::session::models::EmailAddress;
use session_service::domain::session::models::LastName;
use session_service::domain::session::models::Notification;
use session_service::domain::session::models::RegisterCommand;
use session_service::domain::session::service::SessionService;
use session_service::outbound::stores::InMemoryStore;
use session_service::session::errors::NotificationError;
use session_service::session::errors::SessionError;
use session_service::session::ports::NotificationSink;
use tokio::sync::Mutex;

/// Delay matching the original storefront's simulated round trip.
pub const TEST_LOGIN_DELAY: Duration = Duration::from_millis(1000);

/// Notification sink capturing everything it receives.
#[derive(Default)]
pub struct RecordingSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn messages(&self) -> Vec<String> {
        self.notifications
            .lock()
            .await
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().await.clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn notify(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.notifications.lock().await.push(notification.clone());
        Ok(())
    }
}

/// Shared harness: a container over an in-memory store with a recording sink.
pub struct TestContext {
    pub service: Arc<SessionService<InMemoryStore, RecordingSink>>,
    pub store: Arc<InMemoryStore>,
    pub sink: Arc<RecordingSink>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::over_store(Arc::new(InMemoryStore::new())).await
    }

    /// Build a container over an existing store, as a page reload would.
    pub async fn over_store(store: Arc<InMemoryStore>) -> Self {
        init_tracing();

        let sink = Arc::new(RecordingSink::new());
        let service = Arc::new(
            SessionService::initialize(Arc::clone(&store), Arc::clone(&sink), TEST_LOGIN_DELAY)
                .await,
        );

        Self {
            service,
            store,
            sink,
        }
    }

    pub async fn register(
        &self,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        self.service
            .register_user(register_command(last_name, email, password), || {})
            .await
    }
}

pub fn register_command(last_name: &str, email: &str, password: &str) -> RegisterCommand {
    RegisterCommand::new(
        LastName::new(last_name.to_string()).expect("valid last name"),
        EmailAddress::new(email.to_string()).expect("valid email"),
        password.to_string(),
    )
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "session_service=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
