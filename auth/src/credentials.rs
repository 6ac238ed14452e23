use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Credential verification coordinator.
///
/// Wraps the password hasher with the two operations the session layer
/// needs: hashing a password at registration and checking a submitted
/// password at login.
pub struct CredentialVerifier {
    password_hasher: PasswordHasher,
}

/// Credential operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl CredentialVerifier {
    pub fn new() -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a submitted password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be checked
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<(), AuthError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

impl Default for CredentialVerifier {
    fn default() -> Self {
        Self::new()
    }
}
