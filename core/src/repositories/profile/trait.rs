//! Profile repository trait defining the interface for profile persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

/// Repository trait for Profile entity persistence operations
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Persist a new profile
    async fn insert(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Find the profile belonging to a user
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, DomainError>;

    /// Update an existing profile
    ///
    /// # Returns
    /// * `Ok(affected)` - Number of rows updated (0 when the profile is gone)
    async fn update(&self, profile: Profile) -> Result<u64, DomainError>;
}
