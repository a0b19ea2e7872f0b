//! Handler for GET /me

use actix_web::HttpResponse;

use kolo_shared::types::response::ApiResponse;

use crate::handlers::ApiResult;
use crate::middleware::AuthenticatedUser;

/// Returns the user the bearer token authenticates
pub async fn me(user: AuthenticatedUser) -> ApiResult {
    Ok(HttpResponse::Ok().json(ApiResponse::success(user.0)))
}
