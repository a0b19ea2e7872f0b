//! Mapping from domain errors to HTTP responses.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use kolo_core::errors::DomainError;
use kolo_shared::types::response::ApiResponse;

/// Error type returned by every route handler
#[derive(Debug)]
pub enum ApiError {
    /// A domain operation failed
    Domain(DomainError),
    /// The request body failed validation
    Validation(String),
}

pub type ApiResult = Result<HttpResponse, ApiError>;

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::Domain(error)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        Self::Validation(format!("Invalid request fields: {}", fields.join(", ")))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => e.fmt(f),
            Self::Validation(message) => f.write_str(message),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Domain(error) => match error {
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::InvalidConfirmationCode | DomainError::PasswordMismatch => {
                    StatusCode::BAD_REQUEST
                }
                DomainError::CodeNotExpired | DomainError::DuplicateResource { .. } => {
                    StatusCode::CONFLICT
                }
                DomainError::WrongCredentials | DomainError::Forbidden { .. } => {
                    StatusCode::FORBIDDEN
                }
                DomainError::Token(_) => StatusCode::UNAUTHORIZED,
                DomainError::UpdateFailed { .. }
                | DomainError::Database { .. }
                | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            // storage faults are logged server-side, never echoed to clients
            Self::Domain(DomainError::Database { message })
            | Self::Domain(DomainError::Internal { message }) => {
                tracing::error!(error = %message, "request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolo_core::errors::TokenError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(DomainError::not_found("User", "x")),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(DomainError::InvalidConfirmationCode),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(DomainError::PasswordMismatch),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(DomainError::CodeNotExpired),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(DomainError::WrongCredentials),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::from(DomainError::Token(TokenError::TokenExpired)),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::from(DomainError::Database {
                    message: "boom".to_string(),
                }),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{:?}", error);
        }
    }

    #[test]
    fn test_database_details_are_not_echoed() {
        let error = ApiError::from(DomainError::Database {
            message: "connection refused at 10.0.0.5:3306".to_string(),
        });

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
