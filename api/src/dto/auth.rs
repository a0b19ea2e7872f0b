//! Authentication request bodies.

use serde::{Deserialize, Serialize};
use validator::Validate;

use kolo_core::domain::entities::user::Role;

use crate::dto::validate_phone;
use crate::handlers::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Nigerian mobile number, local or international form
    #[validate(custom = "validate_phone")]
    pub phone_number: String,

    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub home_address: String,

    /// One of "admin", "merchant", "agent"
    pub role: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,

    pub confirmation: String,

    /// Required when registering with the admin role
    pub admin_sign_up_token: Option<String>,
}

impl RegisterRequest {
    /// Parse the requested role
    pub fn parse_role(&self) -> Result<Role, ApiError> {
        match self.role.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "merchant" => Ok(Role::Merchant),
            "agent" => Ok(Role::Agent),
            _ => Err(ApiError::Validation(
                "role must be one of: admin, merchant, agent".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_phone")]
    pub phone_number: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestPasswordChangeRequest {
    #[validate(custom = "validate_phone")]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResendResetCodeRequest {
    /// The number the account is registered with
    #[validate(custom = "validate_phone")]
    pub phone_number: String,

    /// A corrected number, when the original was mistyped
    #[validate(custom = "validate_phone")]
    pub new_phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResetPasswordWithCodeRequest {
    #[validate(length(equal = 6))]
    pub confirmation_code: String,

    #[validate(length(min = 8, max = 72))]
    pub password: String,

    pub confirmation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_valid_body() {
        let request = RegisterRequest {
            phone_number: "08099100752".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: Some("ada@example.com".to_string()),
            home_address: "12 Marina Rd, Lagos".to_string(),
            role: "agent".to_string(),
            password: "Secret1!".to_string(),
            confirmation: "Secret1!".to_string(),
            admin_sign_up_token: None,
        };

        assert!(request.validate().is_ok());
        assert_eq!(request.parse_role().unwrap(), Role::Agent);
    }

    #[test]
    fn test_register_request_rejects_foreign_phone_number() {
        let request = RegisterRequest {
            phone_number: "+8613812345678".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: None,
            home_address: "12 Marina Rd, Lagos".to_string(),
            role: "agent".to_string(),
            password: "Secret1!".to_string(),
            confirmation: "Secret1!".to_string(),
            admin_sign_up_token: None,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_rejects_unknown_role() {
        let request = RegisterRequest {
            phone_number: "08099100752".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: None,
            home_address: "12 Marina Rd, Lagos".to_string(),
            role: "superuser".to_string(),
            password: "Secret1!".to_string(),
            confirmation: "Secret1!".to_string(),
            admin_sign_up_token: None,
        };

        assert!(request.parse_role().is_err());
    }

    #[test]
    fn test_reset_password_request_requires_six_digit_code() {
        let request = ResetPasswordWithCodeRequest {
            confirmation_code: "1234".to_string(),
            password: "Secret1!".to_string(),
            confirmation: "Secret1!".to_string(),
        };

        assert!(request.validate().is_err());
    }
}
