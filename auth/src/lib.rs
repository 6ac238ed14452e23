//! Credential utilities library
//!
//! Reusable credential infrastructure for the storefront session layer:
//! - Password hashing (Argon2id, PHC string format)
//! - Credential verification
//!
//! Consumers define their own domain traits and adapt these implementations,
//! so the session container stays decoupled from the hashing backend.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Credential Verification
//! ```
//! use auth::CredentialVerifier;
//!
//! let verifier = CredentialVerifier::new();
//!
//! // Registration: hash the password for storage
//! let stored = verifier.hash_password("password123").unwrap();
//!
//! // Login: verify the submitted password against the stored hash
//! assert!(verifier.verify("password123", &stored).is_ok());
//! assert!(verifier.verify("wrong", &stored).is_err());
//! ```

pub mod credentials;
pub mod password;

// Re-export commonly used items
pub use credentials::AuthError;
pub use credentials::CredentialVerifier;
pub use password::PasswordError;
pub use password::PasswordHasher;
