//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Update and delete report the number of affected rows instead of failing:
/// zero affected rows is the sole concurrency-conflict signal this system
/// recognizes, and the services decide what it means per operation.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their registered phone number
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored record
    /// * `Err(DomainError)` - Creation failed
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user record
    ///
    /// # Returns
    /// * `Ok(affected)` - Number of rows updated (0 when the user is gone)
    async fn update(&self, user: User) -> Result<u64, DomainError>;

    /// Replace a user's password hash
    ///
    /// # Returns
    /// * `Ok(affected)` - Number of rows updated
    async fn update_password_hash(
        &self,
        id: Uuid,
        hashed_password: &str,
    ) -> Result<u64, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(affected)` - Number of rows removed (0 when already absent)
    async fn delete(&self, id: Uuid) -> Result<u64, DomainError>;

    /// List users with skip/limit pagination
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<User>, DomainError>;
}
