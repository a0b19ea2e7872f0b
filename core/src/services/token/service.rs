//! JWT bearer-token service

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kolo_shared::config::JwtConfig;

use crate::errors::{DomainError, TokenError};

/// Claims carried inside a bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id
    pub sub: String,
    /// Issued-at, seconds since epoch
    pub iat: i64,
    /// Expiry, seconds since epoch
    pub exp: i64,
    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Parse the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, DomainError> {
        Uuid::parse_str(&self.sub).map_err(|_| TokenError::InvalidToken.into())
    }
}

/// Service for minting and verifying HS256 bearer tokens
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from JWT configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.clone()]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates a signed bearer token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user the token authenticates
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainError)` - Token generation failed
    pub fn generate_bearer_token(&self, user_id: Uuid) -> Result<String, DomainError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + self.config.token_expiry_seconds,
            iss: self.config.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Verifies a bearer token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The verified claims
    /// * `Err(DomainError)` - Expired or malformed token
    pub fn verify_bearer_token(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    TokenError::TokenExpired.into()
                }
                _ => TokenError::InvalidToken.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new(JwtConfig::new("test-secret"))
    }

    #[test]
    fn test_round_trip() {
        let service = service();
        let user_id = Uuid::new_v4();

        let token = service.generate_bearer_token(user_id).unwrap();
        let claims = service.verify_bearer_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.iss, "kolo-identity");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = service();
        let result = service.verify_bearer_token("not-a-token");
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::InvalidToken))
        ));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issuing = TokenService::new(JwtConfig::new("secret-a"));
        let verifying = TokenService::new(JwtConfig::new("secret-b"));

        let token = issuing.generate_bearer_token(Uuid::new_v4()).unwrap();
        assert!(verifying.verify_bearer_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry_seconds: -60,
            issuer: "kolo-identity".to_string(),
        };
        let service = TokenService::new(config);

        let token = service.generate_bearer_token(Uuid::new_v4()).unwrap();
        let result = service.verify_bearer_token(&token);
        assert!(matches!(
            result,
            Err(DomainError::Token(TokenError::TokenExpired))
        ));
    }
}
