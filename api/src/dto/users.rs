//! User route request bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::validate_phone;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyPhoneRequest {
    #[validate(custom = "validate_phone")]
    pub phone_number: String,

    #[validate(length(equal = 6))]
    pub confirmation_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendVerifyPhoneRequest {
    /// The number the account is registered with
    #[validate(custom = "validate_phone")]
    pub phone_number: String,

    /// A corrected number, when the original was mistyped
    #[validate(custom = "validate_phone")]
    pub new_phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordLockedRequest {
    #[validate(length(min = 1))]
    pub existing_password: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,

    pub confirmation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_phone_request_requires_six_digit_code() {
        let request = VerifyPhoneRequest {
            phone_number: "08099100752".to_string(),
            confirmation_code: "12345".to_string(),
        };
        assert!(request.validate().is_err());

        let request = VerifyPhoneRequest {
            phone_number: "08099100752".to_string(),
            confirmation_code: "123456".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_resend_request_validates_optional_new_number() {
        let request = ResendVerifyPhoneRequest {
            phone_number: "08099100752".to_string(),
            new_phone_number: Some("not-a-number".to_string()),
        };
        assert!(request.validate().is_err());

        let request = ResendVerifyPhoneRequest {
            phone_number: "08099100752".to_string(),
            new_phone_number: None,
        };
        assert!(request.validate().is_ok());
    }
}
