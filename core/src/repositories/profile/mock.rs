//! In-memory implementation of ProfileRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

use super::trait_::ProfileRepository;

/// Mock profile repository backed by a HashMap
pub struct MockProfileRepository {
    profiles: Arc<RwLock<HashMap<Uuid, Profile>>>,
}

impl MockProfileRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with a profile, for test setup
    pub async fn seed(&self, profile: Profile) {
        self.profiles.write().await.insert(profile.id, profile);
    }
}

impl Default for MockProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn insert(&self, profile: Profile) -> Result<Profile, DomainError> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.values().find(|p| p.user_id == user_id).cloned())
    }

    async fn update(&self, profile: Profile) -> Result<u64, DomainError> {
        let mut profiles = self.profiles.write().await;
        match profiles.contains_key(&profile.id) {
            true => {
                profiles.insert(profile.id, profile);
                Ok(1)
            }
            false => Ok(0),
        }
    }
}
