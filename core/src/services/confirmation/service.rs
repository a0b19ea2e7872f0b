//! Confirmation-code engine implementation

use std::sync::Arc;

use kolo_shared::utils::mask_phone_number;
use uuid::Uuid;

use crate::domain::entities::confirmation_code::{ConfirmationCode, ConfirmationCodeType};
use crate::domain::entities::user::User;
use crate::domain::value_objects::DeliveryReceipt;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ConfirmationCodeRepository, DeliveryPatch};
use crate::services::notify::EventPublisher;

use super::config::ConfirmationCodeConfig;

/// Engine driving the lifecycle of confirmation codes.
///
/// A code moves through created → dispatch requested → delivery acknowledged
/// → consumed, where consumption deletes the record. Expiry is a condition
/// derived from the clock on demand; it never deletes anything by itself, so
/// an expired-but-unconsumed code stays queryable until regeneration or
/// consumption retires it.
pub struct ConfirmationCodeService<R, P>
where
    R: ConfirmationCodeRepository,
    P: EventPublisher,
{
    /// Durable store of outstanding codes
    repository: Arc<R>,
    /// Outbound port to the messaging service
    publisher: Arc<P>,
    /// Service configuration
    config: ConfirmationCodeConfig,
}

impl<R, P> ConfirmationCodeService<R, P>
where
    R: ConfirmationCodeRepository,
    P: EventPublisher,
{
    /// Create a new confirmation-code service
    pub fn new(repository: Arc<R>, publisher: Arc<P>, config: ConfirmationCodeConfig) -> Self {
        Self {
            repository,
            publisher,
            config,
        }
    }

    /// Generates and persists a fresh code for a user.
    ///
    /// Dispatch is a separate explicit step; this method only persists.
    ///
    /// # Arguments
    ///
    /// * `user` - The subject; the code is bound to their current phone number
    /// * `code_type` - The flow the code belongs to
    pub async fn create_confirmation_code(
        &self,
        user: &User,
        code_type: ConfirmationCodeType,
    ) -> DomainResult<ConfirmationCode> {
        let code = ConfirmationCode::new(
            user.phone_number.clone(),
            code_type,
            self.config.seconds_to_expire,
        );

        let stored = self.repository.insert(code).await?;

        tracing::info!(
            phone = %mask_phone_number(&stored.phone_number),
            code_id = %stored.id,
            code_type = ?stored.code_type,
            "created confirmation code"
        );

        Ok(stored)
    }

    /// Hands a code to the messaging service for SMS delivery.
    ///
    /// Fire-and-forget: a queue failure is logged and swallowed, and the
    /// delivery outcome arrives later through `update_confirmation_code_sent_details`.
    pub async fn send_confirmation_code(&self, code: &ConfirmationCode) -> DomainResult<()> {
        if let Err(e) = self.publisher.publish_confirmation_code(code).await {
            tracing::warn!(
                code_id = %code.id,
                error = %e,
                "failed to hand confirmation code to the messaging queue"
            );
        }
        Ok(())
    }

    /// Looks a code up by the value the user typed in.
    ///
    /// # Returns
    ///
    /// * `Err(InvalidConfirmationCode)` - No live record carries this value
    pub async fn get_confirmation_code(&self, value: &str) -> DomainResult<ConfirmationCode> {
        self.repository
            .find_by_value(value)
            .await?
            .ok_or(DomainError::InvalidConfirmationCode)
    }

    /// Pure time-window check on a code value.
    ///
    /// Fails iff the code is absent or `now >= created_at + seconds_to_expire`.
    /// Independent of consumption state and of delivery tracking.
    pub async fn ensure_code_valid(&self, value: &str) -> DomainResult<()> {
        let code = self.get_confirmation_code(value).await?;

        if code.is_expired() {
            tracing::debug!(code_id = %code.id, "confirmation code expired");
            return Err(DomainError::InvalidConfirmationCode);
        }

        Ok(())
    }

    /// Consumes a code by deleting its record.
    ///
    /// Idempotent by effect: deleting an already-absent record is success,
    /// so racing consumers cannot observe different outcomes.
    pub async fn mark_used(&self, id: Uuid) -> DomainResult<()> {
        let affected = self.repository.delete(id).await?;
        if affected == 0 {
            tracing::debug!(code_id = %id, "confirmation code already consumed");
        }
        Ok(())
    }

    /// Finds the code issued for a phone number within a given flow.
    ///
    /// # Returns
    ///
    /// * `Err(NotFound)` - No code exists for this phone number and flow
    pub async fn get_confirmation_code_by_phone_number(
        &self,
        phone_number: &str,
        code_type: ConfirmationCodeType,
    ) -> DomainResult<ConfirmationCode> {
        self.repository
            .find_by_phone_and_type(phone_number, code_type)
            .await?
            .ok_or_else(|| {
                DomainError::not_found("ConfirmationCode", mask_phone_number(phone_number))
            })
    }

    /// Replaces an expired code with a fresh one for the same flow.
    ///
    /// Refuses while the old code is still live: the user must wait out the
    /// window before a new code can be requested. The new code binds to the
    /// user's current phone number, which may differ from the old record's.
    /// The old record is retired first; dispatch of the replacement is the
    /// caller's responsibility.
    pub async fn regenerate_confirmation_code_if_expired(
        &self,
        user: &User,
        old_value: &str,
    ) -> DomainResult<ConfirmationCode> {
        let old_code = self.get_confirmation_code(old_value).await?;

        if !old_code.is_expired() {
            tracing::debug!(
                code_id = %old_code.id,
                "regeneration refused, previous code still live"
            );
            return Err(DomainError::CodeNotExpired);
        }

        // Not atomic with the insert below. A crash in between leaves no code
        // for the phone number and the user re-requests from scratch.
        self.repository.delete(old_code.id).await?;

        let replacement = self
            .create_confirmation_code(user, old_code.code_type)
            .await?;

        tracing::info!(
            old_code_id = %old_code.id,
            new_code_id = %replacement.id,
            "regenerated expired confirmation code"
        );

        Ok(replacement)
    }

    /// Correlates an asynchronous delivery receipt with its code record and
    /// patches the delivery-tracking fields.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfirmationCode)` - The patched record
    /// * `Err(NotFound)` - The code is gone, e.g. consumed before the
    ///   receipt arrived
    pub async fn update_confirmation_code_sent_details(
        &self,
        receipt: DeliveryReceipt,
    ) -> DomainResult<ConfirmationCode> {
        let code_id = receipt.extras.confirmation_code_id;

        let mut code = self
            .repository
            .find_by_id(code_id)
            .await?
            .ok_or_else(|| DomainError::not_found("ConfirmationCode", code_id.to_string()))?;

        let patch = DeliveryPatch {
            date_sent: receipt.time_sent,
            message_sent: receipt.message_sent,
            messaging_id: receipt.message_id.clone(),
        };

        let affected = self.repository.update_delivery(code_id, patch).await?;
        if affected == 0 {
            return Err(DomainError::UpdateFailed {
                message: "The server is unable to record the delivery outcome".to_string(),
            });
        }

        code.record_delivery(receipt.time_sent, receipt.message_sent, receipt.message_id);

        tracing::info!(
            code_id = %code_id,
            messaging_id = ?code.messaging_id,
            message_sent = code.message_sent,
            "recorded confirmation code delivery outcome"
        );

        Ok(code)
    }
}
