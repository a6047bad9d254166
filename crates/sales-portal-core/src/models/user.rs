// crates/sales-portal-core/src/models/user.rs
// ============================================================================
// Module: User Models
// Description: User record, user creation payload, and login credentials.
// Purpose: Mirror the backend user contract on the wire.
// Dependencies: serde
// ============================================================================

//! User record, user creation payload, and login credentials.

use serde::Deserialize;
use serde::Serialize;

use crate::enums::UserRole;

/// User as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier (`_id` on the wire).
    #[serde(rename = "_id")]
    pub id: String,
    /// Login name.
    pub username: String,
    /// Given name.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Granted roles.
    pub roles: Vec<UserRole>,
    /// Creation timestamp.
    #[serde(rename = "createdOn")]
    pub created_on: String,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserPayload {
    /// Login name.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Family name.
    #[serde(rename = "lastName")]
    pub last_name: String,
}

/// Login request body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
