use std::fmt;
use std::str::FromStr;

use crate::session::errors::EmailError;
use crate::session::errors::LastNameError;

/// Registered user entry.
///
/// Created once by registration and never mutated afterwards. The password
/// is kept only as an Argon2id PHC hash string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub last_name: LastName,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Last name value type
///
/// Ensures the name is non-blank and at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastName(String);

impl LastName {
    const MAX_LENGTH: usize = 64;

    /// Create a validated last name.
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 64 characters
    pub fn new(last_name: String) -> Result<Self, LastNameError> {
        if last_name.trim().is_empty() {
            return Err(LastNameError::Empty);
        }
        let length = last_name.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(LastNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        Ok(Self(last_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. The raw string is
/// kept as submitted: comparisons are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The authenticated identity visible to UI consumers.
///
/// Carries only the display name derived from the registered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub username: String,
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub last_name: LastName,
    pub email: EmailAddress,
    pub password: String,
}

impl RegisterCommand {
    /// Construct a new register command.
    ///
    /// # Arguments
    /// * `last_name` - Validated last name
    /// * `email` - Validated email address
    /// * `password` - Plain text password (will be hashed by the service)
    pub fn new(last_name: LastName, email: EmailAddress, password: String) -> Self {
        Self {
            last_name,
            email,
            password,
        }
    }
}

/// Raw login form input.
///
/// Stays unvalidated: a malformed email is indistinguishable from wrong
/// credentials to the caller.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Transient user feedback event delivered to the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}
