//! Request and response bodies for the HTTP surface.

pub mod auth;
pub mod users;

use validator::ValidationError;

use kolo_shared::utils::is_valid_phone_number;

/// Validator hook for Nigerian mobile numbers
pub(crate) fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone_number(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone_number"))
    }
}
