//! Phone-verification and password-hashing configuration

use serde::{Deserialize, Serialize};

/// Confirmation-code expiry settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Validity window of a confirmation code, in seconds. Captured on each
    /// code at creation time.
    pub seconds_to_expire: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            seconds_to_expire: 300, // 5 minutes
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables (`PHONE_VERIFICATION_SECONDS_TO_EXPIRE`)
    pub fn from_env() -> Self {
        let seconds_to_expire = std::env::var("PHONE_VERIFICATION_SECONDS_TO_EXPIRE")
            .unwrap_or_else(|_| "300".to_string())
            .parse()
            .unwrap_or(300);

        Self { seconds_to_expire }
    }
}

/// Password hashing settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// bcrypt cost factor used when hashing passwords
    pub number_of_rounds: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            number_of_rounds: 10,
        }
    }
}

impl SecurityConfig {
    /// Create from environment variables (`NUMBER_OF_ROUNDS`)
    pub fn from_env() -> Self {
        let number_of_rounds = std::env::var("NUMBER_OF_ROUNDS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        Self { number_of_rounds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_config_default() {
        let config = VerificationConfig::default();
        assert_eq!(config.seconds_to_expire, 300);
    }

    #[test]
    fn test_security_config_default() {
        let config = SecurityConfig::default();
        assert_eq!(config.number_of_rounds, 10);
    }
}
