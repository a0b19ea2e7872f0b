//! Confirmation code entity for phone verification and password resets.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the confirmation code value
pub const CODE_LENGTH: usize = 6;

/// The flow a confirmation code belongs to.
///
/// Codes are not interchangeable across flows: a password-reset code can
/// never activate a phone number, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationCodeType {
    /// Phone-number activation after registration
    PhoneNumber,
    /// Password reset for a user who forgot their password
    PasswordReset,
}

/// A short-lived numeric code proving control of a phone number.
///
/// Records are created by the engine on demand, patched once the messaging
/// service reports delivery, and deleted on consumption. A consumed code has
/// no "used" flag; it is simply gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationCode {
    /// Unique identifier for the code record
    pub id: Uuid,

    /// Phone number the code was issued for, captured at issuance time.
    /// Not necessarily the user's current number: regeneration may rebind
    /// a flow to a corrected number.
    pub phone_number: String,

    /// The numeric code payload shown to the user
    pub value: String,

    /// Which flow this code belongs to
    pub code_type: ConfirmationCodeType,

    /// Validity window in seconds, captured from config at creation
    pub seconds_to_expire: i64,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,

    /// When the messaging service reported the SMS as sent
    pub date_sent: Option<DateTime<Utc>>,

    /// Whether the messaging service managed to send the SMS
    pub message_sent: bool,

    /// Message identifier assigned by the messaging service
    pub messaging_id: Option<String>,
}

impl ConfirmationCode {
    /// Creates a new confirmation code with a random numeric value
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The phone number the code is issued for
    /// * `code_type` - The flow the code belongs to
    /// * `seconds_to_expire` - Validity window in seconds
    pub fn new(
        phone_number: impl Into<String>,
        code_type: ConfirmationCodeType,
        seconds_to_expire: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            value: Self::generate_value(),
            code_type,
            seconds_to_expire,
            created_at: now,
            updated_at: now,
            date_sent: None,
            message_sent: false,
            messaging_id: None,
        }
    }

    /// Generates a random numeric code value from the OS CSPRNG.
    ///
    /// The value is independent of the clock, so it cannot be guessed from
    /// the record's timestamps.
    pub fn generate_value() -> String {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:06}", num)
    }

    /// The instant the code stops being accepted by validity checks
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + Duration::seconds(self.seconds_to_expire)
    }

    /// Checks if the validity window has elapsed.
    ///
    /// Expiry never deletes the record by itself; an expired code stays
    /// queryable so regeneration can locate and retire it.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at()
    }

    /// Records the delivery outcome reported by the messaging service
    pub fn record_delivery(
        &mut self,
        date_sent: DateTime<Utc>,
        message_sent: bool,
        messaging_id: impl Into<String>,
    ) {
        self.date_sent = Some(date_sent);
        self.message_sent = message_sent;
        self.messaging_id = Some(messaging_id.into());
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_confirmation_code() {
        let code = ConfirmationCode::new("08020202020", ConfirmationCodeType::PhoneNumber, 300);

        assert_eq!(code.phone_number, "08020202020");
        assert_eq!(code.code_type, ConfirmationCodeType::PhoneNumber);
        assert_eq!(code.value.len(), CODE_LENGTH);
        assert_eq!(code.seconds_to_expire, 300);
        assert!(!code.message_sent);
        assert!(code.date_sent.is_none());
        assert!(code.messaging_id.is_none());
        assert!(!code.is_expired());
    }

    #[test]
    fn test_generate_value_format() {
        for _ in 0..100 {
            let value = ConfirmationCode::generate_value();
            assert_eq!(value.len(), CODE_LENGTH);
            assert!(value.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_value_uniqueness() {
        let values: std::collections::HashSet<String> =
            (0..100).map(|_| ConfirmationCode::generate_value()).collect();
        assert!(values.len() > 1);
    }

    #[test]
    fn test_expires_at() {
        let code = ConfirmationCode::new("08020202020", ConfirmationCodeType::PasswordReset, 30);
        assert_eq!(code.expires_at(), code.created_at + Duration::seconds(30));
    }

    #[test]
    fn test_zero_window_is_expired_immediately() {
        let code = ConfirmationCode::new("08020202020", ConfirmationCodeType::PhoneNumber, 0);
        assert!(code.is_expired());
    }

    #[test]
    fn test_record_delivery() {
        let mut code = ConfirmationCode::new("08020202020", ConfirmationCodeType::PhoneNumber, 300);
        let sent_at = Utc::now();

        code.record_delivery(sent_at, true, "msg-42");

        assert_eq!(code.date_sent, Some(sent_at));
        assert!(code.message_sent);
        assert_eq!(code.messaging_id.as_deref(), Some("msg-42"));
    }

    #[test]
    fn test_code_type_serialization() {
        let json = serde_json::to_string(&ConfirmationCodeType::PhoneNumber).unwrap();
        assert_eq!(json, "\"PHONE_NUMBER\"");
        let json = serde_json::to_string(&ConfirmationCodeType::PasswordReset).unwrap();
        assert_eq!(json, "\"PASSWORD_RESET\"");
    }
}
