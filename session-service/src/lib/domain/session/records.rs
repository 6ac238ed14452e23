use serde::Deserialize;
use serde::Serialize;

use crate::domain::session::models::EmailAddress;
use crate::domain::session::models::LastName;
use crate::domain::session::models::UserRecord;
use crate::session::errors::SessionError;

/// Store key holding the serialized registered-user list.
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";

/// Store key holding the serialized record of the authenticated user.
pub const LOGGED_IN_USER_KEY: &str = "loggedInUser";

/// Store key owned by the cart collaborator; only ever removed here.
pub const CART_KEY: &str = "cart";

/// Wire form of a user record.
///
/// Field names match the storage layout the rest of the storefront reads
/// (`{lastName, email, password}`); `password` carries the PHC hash string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<&UserRecord> for StoredUser {
    fn from(record: &UserRecord) -> Self {
        Self {
            last_name: record.last_name.as_str().to_string(),
            email: record.email.as_str().to_string(),
            password: record.password_hash.clone(),
        }
    }
}

impl StoredUser {
    /// Rebuild the domain record, re-validating both value fields.
    ///
    /// # Errors
    /// * `InvalidLastName` - Stored name fails validation
    /// * `InvalidEmail` - Stored email fails validation
    pub fn into_record(self) -> Result<UserRecord, SessionError> {
        Ok(UserRecord {
            last_name: LastName::new(self.last_name)?,
            email: EmailAddress::new(self.email)?,
            password_hash: self.password,
        })
    }
}
