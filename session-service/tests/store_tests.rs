use std::sync::Arc;

use session_service::config::Config;
use session_service::config::LoginConfig;
use session_service::config::StorageConfig;
use session_service::config::ThemeConfig;
use session_service::domain::session::models::Credentials;
use session_service::domain::session::models::EmailAddress;
use session_service::domain::session::models::LastName;
use session_service::domain::session::models::RegisterCommand;
use session_service::outbound::notify::LogNotifier;
use session_service::outbound::stores::JsonFileStore;
use session_service::outbound::stores::NullStore;
use session_service::session::ports::SessionStore;
use session_service::SessionService;
use session_service::ThemeMode;
use session_service::ThemeState;

#[tokio::test]
async fn test_file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("session.json");

    {
        let store = JsonFileStore::open(&path).await;
        store.set("registeredUsers", "[]").await;
        store.set("loggedInUser", "{\"lastName\":\"Doe\"}").await;
    }

    let reopened = JsonFileStore::open(&path).await;
    assert_eq!(reopened.get("registeredUsers").await.as_deref(), Some("[]"));
    assert_eq!(
        reopened.get("loggedInUser").await.as_deref(),
        Some("{\"lastName\":\"Doe\"}")
    );
}

#[tokio::test]
async fn test_file_store_remove_is_durable() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("session.json");

    {
        let store = JsonFileStore::open(&path).await;
        store.set("loggedInUser", "{}").await;
        store.remove("loggedInUser").await;
    }

    let reopened = JsonFileStore::open(&path).await;
    assert_eq!(reopened.get("loggedInUser").await, None);
}

#[tokio::test]
async fn test_file_store_degrades_on_corrupt_content() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("session.json");
    tokio::fs::write(&path, "{not json at all")
        .await
        .expect("Failed to seed corrupt file");

    let store = JsonFileStore::open(&path).await;
    assert_eq!(store.get("registeredUsers").await, None);

    // The store keeps working after the degraded open
    store.set("registeredUsers", "[]").await;
    let reopened = JsonFileStore::open(&path).await;
    assert_eq!(reopened.get("registeredUsers").await.as_deref(), Some("[]"));
}

#[tokio::test]
async fn test_file_store_starts_empty_without_a_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonFileStore::open(dir.path().join("absent.json")).await;

    assert_eq!(store.get("registeredUsers").await, None);
}

#[tokio::test(start_paused = true)]
async fn test_container_wired_from_configuration() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    // The shape an embedding application would get from Config::load()
    let config = Config {
        login: LoginConfig {
            simulated_delay_ms: 1000,
        },
        storage: StorageConfig {
            file: Some(dir.path().join("storefront-session.json")),
        },
        theme: ThemeConfig {
            default_mode: ThemeMode::Dark,
        },
    };

    let store_path = config.storage.file.clone().expect("file store configured");
    let store = Arc::new(JsonFileStore::open(store_path.clone()).await);
    let service = SessionService::initialize(
        Arc::clone(&store),
        Arc::new(LogNotifier),
        config.login.simulated_delay(),
    )
    .await;

    service
        .register_user(
            RegisterCommand::new(
                LastName::new("Doe".to_string()).unwrap(),
                EmailAddress::new("a@x.com".to_string()).unwrap(),
                "password1".to_string(),
            ),
            || {},
        )
        .await
        .expect("registration should succeed");
    service
        .login_user(Credentials::new("a@x.com", "password1"), |_| {})
        .await
        .expect("login should succeed");

    let theme = ThemeState::new(config.theme.default_mode);
    assert_eq!(theme.current_mode(), ThemeMode::Dark);

    // A container over a fresh store at the same path sees the session
    let reopened = Arc::new(JsonFileStore::open(store_path).await);
    let restored = SessionService::initialize(
        reopened,
        Arc::new(LogNotifier),
        config.login.simulated_delay(),
    )
    .await;
    assert_eq!(restored.current_user().await.unwrap().username, "Doe");
    assert_eq!(restored.registered_users().await.len(), 1);
}

#[tokio::test]
async fn test_null_store_reports_everything_absent() {
    let store = NullStore;

    store.set("registeredUsers", "[]").await;
    store.set("cart", "[]").await;

    assert_eq!(store.get("registeredUsers").await, None);
    assert_eq!(store.get("cart").await, None);
}
