//! Handler for PUT /users/reset-password

use actix_web::{web, HttpResponse};
use validator::Validate;

use kolo_shared::types::response::MessageResponse;

use crate::app::AppUsersService;
use crate::dto::users::ResetPasswordLockedRequest;
use crate::handlers::ApiResult;
use crate::middleware::AuthenticatedUser;

/// Changes the password of the authenticated user; the existing password
/// is required.
pub async fn reset_password(
    user: AuthenticatedUser,
    users: web::Data<AppUsersService>,
    body: web::Json<ResetPasswordLockedRequest>,
) -> ApiResult {
    body.validate()?;

    users
        .update_user_password_locked(
            user.0.id,
            &body.existing_password,
            &body.password,
            &body.confirmation,
        )
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Your password has been updated")))
}
