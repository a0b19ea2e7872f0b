//! Profile entity holding per-user verification and onboarding state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile attached to every user at registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the profile
    pub id: Uuid,

    /// The user this profile belongs to
    pub user_id: Uuid,

    /// Whether the user's phone number has been verified
    pub is_phone_verified: bool,

    /// Whether the onboarding service has marked this user onboarded
    pub is_onboarded: bool,

    /// Home address supplied at registration
    pub home_address: String,

    /// Timestamp when the profile was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile for a user
    pub fn new(user_id: Uuid, is_phone_verified: bool, home_address: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            is_phone_verified,
            is_onboarded: false,
            home_address: home_address.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the phone number as verified
    pub fn mark_phone_verified(&mut self) {
        self.is_phone_verified = true;
        self.updated_at = Utc::now();
    }

    /// Marks the user as onboarded
    pub fn mark_onboarded(&mut self) {
        self.is_onboarded = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile() {
        let user_id = Uuid::new_v4();
        let profile = Profile::new(user_id, false, "12 Marina Rd, Lagos");

        assert_eq!(profile.user_id, user_id);
        assert!(!profile.is_phone_verified);
        assert!(!profile.is_onboarded);
    }

    #[test]
    fn test_mark_phone_verified() {
        let mut profile = Profile::new(Uuid::new_v4(), false, "addr");
        profile.mark_phone_verified();
        assert!(profile.is_phone_verified);
    }

    #[test]
    fn test_mark_onboarded() {
        let mut profile = Profile::new(Uuid::new_v4(), true, "addr");
        profile.mark_onboarded();
        assert!(profile.is_onboarded);
    }
}
