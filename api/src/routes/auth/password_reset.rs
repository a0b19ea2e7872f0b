//! Handlers for the anonymous password-reset flow.
//!
//! The request and resend endpoints answer 200 with the same "code sent"
//! message whether or not the phone number maps to an account, so they
//! cannot be used to enumerate users.

use actix_web::{web, HttpResponse};
use validator::Validate;

use kolo_core::domain::entities::confirmation_code::ConfirmationCodeType;
use kolo_core::errors::DomainError;
use kolo_core::services::users::CODE_SENT_MESSAGE;
use kolo_shared::types::response::MessageResponse;
use kolo_shared::utils::normalize_phone_number;

use crate::app::AppUsersService;
use crate::dto::auth::{
    RequestPasswordChangeRequest, ResendResetCodeRequest, ResetPasswordWithCodeRequest,
};
use crate::handlers::ApiResult;

/// POST /request-password-change
pub async fn request_password_change(
    users: web::Data<AppUsersService>,
    body: web::Json<RequestPasswordChangeRequest>,
) -> ApiResult {
    body.validate()?;
    let phone = normalize_phone_number(&body.phone_number);

    let message = match users.request_password_reset(&phone).await {
        Ok(message) => message,
        // unknown numbers get the same answer as known ones
        Err(DomainError::NotFound { .. }) => CODE_SENT_MESSAGE.to_string(),
        Err(e) => return Err(e.into()),
    };

    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

/// POST /resend-reset-password-confirmation-code
pub async fn resend_reset_password_confirmation_code(
    users: web::Data<AppUsersService>,
    body: web::Json<ResendResetCodeRequest>,
) -> ApiResult {
    body.validate()?;
    let phone = normalize_phone_number(&body.phone_number);
    let new_phone = body.new_phone_number.as_deref().map(normalize_phone_number);

    let result = users
        .resend_confirmation_code(
            &phone,
            new_phone.as_deref(),
            ConfirmationCodeType::PasswordReset,
        )
        .await;

    match result {
        Ok(_) => {}
        // unknown numbers get the same answer as known ones
        Err(DomainError::NotFound { .. }) => {}
        Err(e) => return Err(e.into()),
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new(CODE_SENT_MESSAGE)))
}

/// PUT /reset-password-with-code
pub async fn reset_password_with_code(
    users: web::Data<AppUsersService>,
    body: web::Json<ResetPasswordWithCodeRequest>,
) -> ApiResult {
    body.validate()?;

    users
        .update_password_with_code(&body.confirmation_code, &body.password, &body.confirmation)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Your password has been updated")))
}
