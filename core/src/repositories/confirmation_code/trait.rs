//! Confirmation code repository trait defining the persistence contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::confirmation_code::{ConfirmationCode, ConfirmationCodeType};
use crate::errors::DomainError;

/// Delivery-tracking fields patched once the messaging service reports back.
///
/// This is the only mutation a stored code ever sees; the `value` column is
/// written once at insert and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryPatch {
    /// When the SMS was sent
    pub date_sent: DateTime<Utc>,
    /// Whether the SMS was actually sent
    pub message_sent: bool,
    /// Message identifier assigned by the messaging provider
    pub messaging_id: String,
}

/// Repository trait for confirmation code persistence
///
/// The store does not enforce uniqueness per (phone, type); the engine's
/// regeneration path is responsible for retiring the old record before
/// issuing a new one.
#[async_trait]
pub trait ConfirmationCodeRepository: Send + Sync {
    /// Persist a freshly generated code
    ///
    /// # Returns
    /// * `Ok(ConfirmationCode)` - The stored record
    /// * `Err(DomainError)` - Database error occurred
    async fn insert(&self, code: ConfirmationCode) -> Result<ConfirmationCode, DomainError>;

    /// Find a code by its record identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ConfirmationCode>, DomainError>;

    /// Find a code by the value shown to the user
    async fn find_by_value(&self, value: &str) -> Result<Option<ConfirmationCode>, DomainError>;

    /// Find the code issued for a phone number within a given flow
    async fn find_by_phone_and_type(
        &self,
        phone_number: &str,
        code_type: ConfirmationCodeType,
    ) -> Result<Option<ConfirmationCode>, DomainError>;

    /// Delete a code record
    ///
    /// # Returns
    /// * `Ok(affected)` - Number of rows removed (0 when already absent)
    /// * `Err(DomainError)` - Database error occurred
    async fn delete(&self, id: Uuid) -> Result<u64, DomainError>;

    /// Patch the delivery-tracking fields of a stored code
    ///
    /// # Returns
    /// * `Ok(affected)` - Number of rows updated (0 when the record is gone)
    /// * `Err(DomainError)` - Database error occurred
    async fn update_delivery(
        &self,
        id: Uuid,
        patch: DeliveryPatch,
    ) -> Result<u64, DomainError>;
}
