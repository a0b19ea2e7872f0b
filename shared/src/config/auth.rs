//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

/// JWT bearer-token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Bearer token expiry time in seconds
    pub token_expiry_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-in-production"),
            token_expiry_seconds: 86_400, // 24 hours
            issuer: String::from("kolo-identity"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.token_expiry_seconds = minutes * 60;
        self
    }

    /// Check if the default secret is still in place (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == JwtConfig::default().secret
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Token that must accompany an Admin registration. Admin sign-up is
    /// disabled when unset.
    pub admin_sign_up_token: Option<String>,
}

impl AuthConfig {
    /// Create from environment variables (`JWT_SECRET`, `JWT_EXPIRATION_TIME`,
    /// `ADMIN_SIGN_UP_TOKEN`)
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| JwtConfig::default().secret);
        let token_expiry_seconds = std::env::var("JWT_EXPIRATION_TIME")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86_400);
        let admin_sign_up_token = std::env::var("ADMIN_SIGN_UP_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        Self {
            jwt: JwtConfig {
                secret,
                token_expiry_seconds,
                issuer: JwtConfig::default().issuer,
            },
            admin_sign_up_token,
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            admin_sign_up_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.token_expiry_seconds, 86_400);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("my-secret").with_expiry_minutes(30);
        assert_eq!(config.token_expiry_seconds, 1800);
        assert!(!config.is_using_default_secret());
    }
}
