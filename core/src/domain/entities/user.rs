//! User entity representing a registered account in the Kolo platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to a user at registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Platform administrator
    Admin,
    /// Merchant selling through the store service
    Merchant,
    /// Field agent
    Agent,
}

/// User entity representing a registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Registered phone number
    pub phone_number: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Email address, optional at registration
    pub email: Option<String>,

    /// Role assigned at registration
    pub role: Role,

    /// bcrypt hash of the user's password; never serialized
    #[serde(skip_serializing, default)]
    pub hashed_password: String,

    /// Whether the user may authenticate. Only phone verification (or a
    /// manual admin override) makes this true.
    pub is_active: bool,

    /// Superusers can never be deleted
    pub is_super_user: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new inactive user
    pub fn new(
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: Role,
        hashed_password: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            role,
            hashed_password: hashed_password.into(),
            is_active: false,
            is_super_user: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the user as allowed to authenticate
    pub fn activate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }

    /// Replaces the registered phone number
    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
        self.updated_at = Utc::now();
    }

    /// Checks if the user holds the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new("08099100752", "Ada", "Obi", Role::Agent, "$2b$10$hash")
    }

    #[test]
    fn test_new_user_is_inactive() {
        let user = sample_user();
        assert!(!user.is_active);
        assert!(!user.is_super_user);
        assert_eq!(user.role, Role::Agent);
    }

    #[test]
    fn test_activate() {
        let mut user = sample_user();
        user.activate();
        assert!(user.is_active);
    }

    #[test]
    fn test_set_phone_number() {
        let mut user = sample_user();
        user.set_phone_number("08020202020");
        assert_eq!(user.phone_number, "08020202020");
    }

    #[test]
    fn test_hashed_password_is_not_serialized() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("$2b$10$hash"));
    }

    #[test]
    fn test_has_role() {
        let user = sample_user();
        assert!(user.has_role(Role::Agent));
        assert!(!user.has_role(Role::Admin));
    }
}
