//! Handler for POST /register

use actix_web::{web, HttpResponse};
use validator::Validate;

use kolo_core::services::auth::Registration;
use kolo_shared::types::response::ApiResponse;
use kolo_shared::utils::normalize_phone_number;

use crate::app::AppAuthService;
use crate::dto::auth::RegisterRequest;
use crate::handlers::ApiResult;

/// Registers a new account.
///
/// Returns 201 with a bearer token and the (still inactive) user; the
/// phone-verification code is dispatched as a side effect.
pub async fn register(
    auth: web::Data<AppAuthService>,
    body: web::Json<RegisterRequest>,
) -> ApiResult {
    body.validate()?;
    let role = body.parse_role()?;
    let body = body.into_inner();

    let response = auth
        .register(Registration {
            phone_number: normalize_phone_number(&body.phone_number),
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            home_address: body.home_address,
            role,
            password: body.password,
            confirmation: body.confirmation,
            admin_sign_up_token: body.admin_sign_up_token,
        })
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}
