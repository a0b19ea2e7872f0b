//! Handlers for phone-number verification.

use actix_web::{web, HttpResponse};
use validator::Validate;

use kolo_core::domain::entities::confirmation_code::ConfirmationCodeType;
use kolo_core::services::users::CODE_SENT_MESSAGE;
use kolo_shared::types::response::{ApiResponse, MessageResponse};
use kolo_shared::utils::normalize_phone_number;

use crate::app::AppUsersService;
use crate::dto::users::{ResendVerifyPhoneRequest, VerifyPhoneRequest};
use crate::handlers::ApiResult;

/// POST /users/verify-phone
///
/// Consumes the confirmation code and activates the account.
pub async fn verify_phone(
    users: web::Data<AppUsersService>,
    body: web::Json<VerifyPhoneRequest>,
) -> ApiResult {
    body.validate()?;

    let user = users
        .verify_phone_from_code(
            &normalize_phone_number(&body.phone_number),
            &body.confirmation_code,
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}

/// POST /users/resend-verify-phone-confirmation-code
///
/// Re-dispatches the verification code once the previous one has expired,
/// optionally rebinding the account to a corrected phone number.
pub async fn resend_verify_phone_confirmation_code(
    users: web::Data<AppUsersService>,
    body: web::Json<ResendVerifyPhoneRequest>,
) -> ApiResult {
    body.validate()?;
    let phone = normalize_phone_number(&body.phone_number);
    let new_phone = body.new_phone_number.as_deref().map(normalize_phone_number);

    users
        .resend_confirmation_code(
            &phone,
            new_phone.as_deref(),
            ConfirmationCodeType::PhoneNumber,
        )
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(CODE_SENT_MESSAGE)))
}
