use thiserror::Error;

/// Error for LastName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LastNameError {
    #[error("Last name must not be blank")]
    Empty,

    #[error("Last name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for notification delivery operations.
///
/// Delivery failures are logged by the session container and never fail the
/// operation that triggered the notification.
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Failed to deliver notification: {0}")]
    DeliveryFailed(String),
}

/// Top-level error for all session operations
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid last name: {0}")]
    InvalidLastName(#[from] LastNameError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    // Domain-level errors
    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Login attempt superseded by a newer attempt")]
    LoginSuperseded,

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for SessionError {
    fn from(err: anyhow::Error) -> Self {
        SessionError::Unknown(err.to_string())
    }
}
