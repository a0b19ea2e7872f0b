//! Domain-specific error types and error handling.
//!
//! The taxonomy is deliberately small: lookup failures, confirmation-code
//! rejections, domain-rule conflicts, and persistence faults. The HTTP layer
//! maps these onto status codes; nothing in this crate retries.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// A required record does not exist
    #[error("{resource} with {identifier} could not be found")]
    NotFound { resource: String, identifier: String },

    /// The confirmation code does not exist or its validity window elapsed.
    /// Deliberately indistinguishable so callers cannot probe for codes.
    #[error("The confirmation code is invalid or has expired")]
    InvalidConfirmationCode,

    /// Regeneration was attempted while the previous code is still live
    #[error("The previous confirmation code has not expired yet")]
    CodeNotExpired,

    /// The chosen password and its confirmation do not match
    #[error("The chosen password and the confirmation password must match")]
    PasswordMismatch,

    /// Login or existing-password check failed
    #[error("Wrong credentials provided")]
    WrongCredentials,

    /// A domain rule forbids the operation
    #[error("{message}")]
    Forbidden { message: String },

    /// A record with the same natural key already exists
    #[error("{resource} with {identifier} already exists")]
    DuplicateResource { resource: String, identifier: String },

    /// An update or delete touched zero rows where one was expected
    #[error("{message}")]
    UpdateFailed { message: String },

    /// Underlying storage failure
    #[error("Database error: {message}")]
    Database { message: String },

    /// Anything else that should never surface to a client verbatim
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to token errors
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Convenience constructor for lookup failures
    pub fn not_found(resource: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
            identifier: identifier.into(),
        }
    }

    /// Convenience constructor for domain-rule violations
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DomainError::not_found("User", "08099100752");
        assert_eq!(err.to_string(), "User with 08099100752 could not be found");
    }

    #[test]
    fn test_invalid_code_message_does_not_leak_cause() {
        let err = DomainError::InvalidConfirmationCode;
        let message = err.to_string();
        assert!(message.contains("invalid or has expired"));
        assert!(!message.contains("not found"));
    }

    #[test]
    fn test_token_error_bridge() {
        let err: DomainError = TokenError::TokenExpired.into();
        assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
    }
}
