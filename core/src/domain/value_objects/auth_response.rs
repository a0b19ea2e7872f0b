//! Authentication response returned by login and registration.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// Bearer token plus the authenticated user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token for subsequent requests
    pub access_token: String,

    /// The authenticated user (password hash is never serialized)
    pub user: User,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(access_token: impl Into<String>, user: User) -> Self {
        Self {
            access_token: access_token.into(),
            user,
        }
    }
}
