//! Handler for POST /log-in

use actix_web::{web, HttpResponse};
use validator::Validate;

use kolo_shared::types::response::ApiResponse;
use kolo_shared::utils::normalize_phone_number;

use crate::app::AppAuthService;
use crate::dto::auth::LoginRequest;
use crate::handlers::ApiResult;

/// Checks credentials and returns a bearer token
pub async fn log_in(auth: web::Data<AppAuthService>, body: web::Json<LoginRequest>) -> ApiResult {
    body.validate()?;

    let response = auth
        .authenticate(&normalize_phone_number(&body.phone_number), &body.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
