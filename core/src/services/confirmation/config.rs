//! Configuration for the confirmation-code service

use kolo_shared::config::VerificationConfig;

/// Configuration for the confirmation-code service
#[derive(Debug, Clone)]
pub struct ConfirmationCodeConfig {
    /// Validity window stamped onto every new code, in seconds
    pub seconds_to_expire: i64,
}

impl Default for ConfirmationCodeConfig {
    fn default() -> Self {
        Self {
            seconds_to_expire: VerificationConfig::default().seconds_to_expire,
        }
    }
}

impl From<&VerificationConfig> for ConfirmationCodeConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            seconds_to_expire: config.seconds_to_expire,
        }
    }
}
