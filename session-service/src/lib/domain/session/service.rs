use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::domain::session::models::Credentials;
use crate::domain::session::models::CurrentUser;
use crate::domain::session::models::EmailAddress;
use crate::domain::session::models::Notification;
use crate::domain::session::models::RegisterCommand;
use crate::domain::session::models::UserRecord;
use crate::domain::session::records::CART_KEY;
use crate::domain::session::records::LOGGED_IN_USER_KEY;
use crate::domain::session::records::REGISTERED_USERS_KEY;
use crate::domain::session::records::StoredUser;
use crate::session::errors::SessionError;
use crate::session::ports::NotificationSink;
use crate::session::ports::SessionStore;

/// Message held in the feedback state and surfaced on a failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

const REGISTRATION_SUCCESS_MESSAGE: &str = "Registration successful!";
const DUPLICATE_USER_MESSAGE: &str = "User already exists!";
const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";

#[derive(Debug, Default)]
struct SessionState {
    registered_users: Vec<UserRecord>,
    current_user: Option<CurrentUser>,
    loading: bool,
    error: Option<String>,
}

/// Session state container for the storefront.
///
/// Owns the registered-user list, the current session, and the login
/// feedback flags; synchronizes them to the injected store and reports
/// outcomes through the injected notification sink. All mutation goes
/// through the operations below.
pub struct SessionService<SS, NS>
where
    SS: SessionStore,
    NS: NotificationSink,
{
    store: Arc<SS>,
    notifier: Arc<NS>,
    verifier: auth::CredentialVerifier,
    state: RwLock<SessionState>,
    login_epoch: AtomicU64,
    login_delay: Duration,
}

impl<SS, NS> SessionService<SS, NS>
where
    SS: SessionStore,
    NS: NotificationSink,
{
    /// Initialize a container over the injected store and sink.
    ///
    /// Loads the registered-user list from storage (empty on absence) and
    /// restores a minimal session from the persisted record, keeping only
    /// its last name as the display username. Running this as the
    /// constructor makes the load happen exactly once, before any other
    /// operation is observable.
    ///
    /// # Arguments
    /// * `store` - Persistent key/value store implementation
    /// * `notifier` - Transient feedback implementation
    /// * `login_delay` - Simulated latency for login attempts
    pub async fn initialize(store: Arc<SS>, notifier: Arc<NS>, login_delay: Duration) -> Self {
        let registered_users = Self::load_registered_users(store.as_ref()).await;
        let current_user = Self::restore_session(store.as_ref()).await;

        tracing::info!(
            registered_users = registered_users.len(),
            restored_session = current_user.is_some(),
            "Session container initialized"
        );

        Self {
            store,
            notifier,
            verifier: auth::CredentialVerifier::new(),
            state: RwLock::new(SessionState {
                registered_users,
                current_user,
                loading: false,
                error: None,
            }),
            login_epoch: AtomicU64::new(0),
            login_delay,
        }
    }

    /// Register a new user.
    ///
    /// Rejects an email that is already registered without touching any
    /// state. Otherwise hashes the password, appends the record (insertion
    /// order is preserved), persists the updated list, emits a success
    /// notification, and invokes `on_success`. No artificial delay.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Another record holds this exact email
    /// * `Password` - Hashing the password failed
    pub async fn register_user<F>(
        &self,
        command: RegisterCommand,
        on_success: F,
    ) -> Result<(), SessionError>
    where
        F: FnOnce() + Send,
    {
        let email = command.email.as_str().to_string();

        let password_hash = self.verifier.hash_password(&command.password)?;

        let persisted = {
            let mut state = self.state.write().await;
            if state
                .registered_users
                .iter()
                .any(|u| u.email == command.email)
            {
                None
            } else {
                state.registered_users.push(UserRecord {
                    last_name: command.last_name,
                    email: command.email,
                    password_hash,
                });
                Some(
                    state
                        .registered_users
                        .iter()
                        .map(StoredUser::from)
                        .collect::<Vec<_>>(),
                )
            }
        };

        match persisted {
            None => {
                tracing::info!(email = %email, "Registration rejected, email already registered");
                self.deliver(Notification::error(DUPLICATE_USER_MESSAGE)).await;
                Err(SessionError::EmailAlreadyExists(email))
            }
            Some(stored) => {
                self.persist_registered_users(&stored).await;
                tracing::info!(email = %email, registered_users = stored.len(), "User registered");
                self.deliver(Notification::success(REGISTRATION_SUCCESS_MESSAGE))
                    .await;
                on_success();
                Ok(())
            }
        }
    }

    /// Attempt to log in with raw form credentials.
    ///
    /// Sets the loading flag, clears any previous error, waits the simulated
    /// latency, then resolves against the registered list. On a match the
    /// record is persisted as the active session, the current user is set to
    /// its last name, a success notification is emitted, and `on_success` is
    /// invoked. On no match the fixed invalid-credentials message is held in
    /// the feedback state and emitted as an error notification.
    ///
    /// Each attempt supersedes any still-pending one: a resolution that is
    /// no longer the newest applies nothing.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No registered record matches
    /// * `LoginSuperseded` - A newer attempt started during the delay
    pub async fn login_user<F>(
        &self,
        credentials: Credentials,
        on_success: F,
    ) -> Result<CurrentUser, SessionError>
    where
        F: FnOnce(&CurrentUser) + Send,
    {
        let epoch = self.login_epoch.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        // Simulated round trip to the credential backend that does not exist
        tokio::time::sleep(self.login_delay).await;

        if self.login_epoch.load(Ordering::SeqCst) != epoch {
            tracing::debug!(email = %credentials.email, "Login resolution superseded by a newer attempt");
            return Err(SessionError::LoginSuperseded);
        }

        match self.find_match(&credentials).await {
            Some(record) => {
                self.persist_logged_in_user(&record).await;

                let user = CurrentUser {
                    username: record.last_name.as_str().to_string(),
                };
                {
                    let mut state = self.state.write().await;
                    state.current_user = Some(user.clone());
                    state.loading = false;
                    state.error = None;
                }

                tracing::info!(email = %record.email, "Login succeeded");
                self.deliver(Notification::success(LOGIN_SUCCESS_MESSAGE)).await;
                on_success(&user);
                Ok(user)
            }
            None => {
                {
                    let mut state = self.state.write().await;
                    state.loading = false;
                    state.error = Some(INVALID_CREDENTIALS_MESSAGE.to_string());
                }

                tracing::info!(email = %credentials.email, "Login failed, invalid credentials");
                self.deliver(Notification::error(INVALID_CREDENTIALS_MESSAGE))
                    .await;
                Err(SessionError::InvalidCredentials)
            }
        }
    }

    /// End the current session.
    ///
    /// Clears the current user and removes the session and cart entries from
    /// the store. Idempotent: logging out while signed out changes nothing.
    pub async fn logout(&self) {
        {
            let mut state = self.state.write().await;
            state.current_user = None;
        }
        self.store.remove(LOGGED_IN_USER_KEY).await;
        self.store.remove(CART_KEY).await;
        tracing::info!("Logged out");
    }

    /// The authenticated identity, if any.
    pub async fn current_user(&self) -> Option<CurrentUser> {
        self.state.read().await.current_user.clone()
    }

    /// Whether a login attempt is pending.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// The message from the most recent failed login, if it has not been
    /// cleared by a newer attempt.
    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    /// Snapshot of the registered-user list in insertion order.
    pub async fn registered_users(&self) -> Vec<UserRecord> {
        self.state.read().await.registered_users.clone()
    }

    async fn find_match(&self, credentials: &Credentials) -> Option<UserRecord> {
        // An unparseable email can never match a registered record
        let email = EmailAddress::new(credentials.email.clone()).ok()?;

        let state = self.state.read().await;
        let record = state.registered_users.iter().find(|u| u.email == email)?;
        match self.verifier.verify(&credentials.password, &record.password_hash) {
            Ok(()) => Some(record.clone()),
            Err(auth::AuthError::InvalidCredentials) => None,
            Err(auth::AuthError::PasswordError(e)) => {
                tracing::warn!(email = %email, error = %e, "Stored hash could not be checked");
                None
            }
        }
    }

    async fn load_registered_users(store: &SS) -> Vec<UserRecord> {
        let Some(raw) = store.get(REGISTERED_USERS_KEY).await else {
            return Vec::new();
        };

        let stored: Vec<StoredUser> = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(error = %e, "Stored user list is unreadable, starting empty");
                return Vec::new();
            }
        };

        stored
            .into_iter()
            .filter_map(|entry| {
                let email = entry.email.clone();
                match entry.into_record() {
                    Ok(record) => Some(record),
                    Err(e) => {
                        tracing::warn!(email = %email, error = %e, "Skipping invalid stored user");
                        None
                    }
                }
            })
            .collect()
    }

    async fn restore_session(store: &SS) -> Option<CurrentUser> {
        let raw = store.get(LOGGED_IN_USER_KEY).await?;
        match serde_json::from_str::<StoredUser>(&raw) {
            Ok(stored) => Some(CurrentUser {
                username: stored.last_name,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Stored session is unreadable, starting signed out");
                None
            }
        }
    }

    async fn persist_registered_users(&self, stored: &[StoredUser]) {
        match serde_json::to_string(stored) {
            Ok(serialized) => self.store.set(REGISTERED_USERS_KEY, &serialized).await,
            Err(e) => tracing::warn!(error = %e, "Failed to serialize registered users"),
        }
    }

    async fn persist_logged_in_user(&self, record: &UserRecord) {
        match serde_json::to_string(&StoredUser::from(record)) {
            Ok(serialized) => self.store.set(LOGGED_IN_USER_KEY, &serialized).await,
            Err(e) => tracing::warn!(error = %e, "Failed to serialize session record"),
        }
    }

    async fn deliver(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(&notification).await {
            tracing::error!(
                error = %e,
                message = %notification.message,
                "Failed to deliver notification"
            );
        }
    }
}
