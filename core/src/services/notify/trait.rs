//! Trait for cross-service event publishing

use async_trait::async_trait;

use crate::domain::entities::confirmation_code::ConfirmationCode;
use crate::domain::entities::user::User;

/// Trait for emitting events to the sibling services.
///
/// Downstream consumers assume at-least-once delivery; this port gives no
/// stronger guarantee. Errors are plain strings, mirroring the transport's
/// own reporting, and callers decide whether to surface or swallow them.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Hand a confirmation code to the messaging service for SMS delivery
    async fn publish_confirmation_code(&self, code: &ConfirmationCode) -> Result<(), String>;

    /// Announce a newly registered user to the onboarding and store services
    async fn publish_user_created(&self, user: &User) -> Result<(), String>;

    /// Announce a verified phone number to the onboarding and store services
    async fn publish_phone_verified(&self, user: &User) -> Result<(), String>;

    /// Announce a deleted user to the onboarding and store services
    async fn publish_user_deleted(&self, user: &User) -> Result<(), String>;
}
