//! Admin and account-management handlers.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use kolo_core::domain::entities::user::Role;
use kolo_shared::types::pagination::PaginationParams;
use kolo_shared::types::response::{ApiResponse, MessageResponse};

use crate::app::AppUsersService;
use crate::handlers::ApiResult;
use crate::middleware::auth::ensure_access;
use crate::middleware::AuthenticatedUser;

/// GET /users/{id}
pub async fn get_user(
    caller: AuthenticatedUser,
    users: web::Data<AppUsersService>,
    path: web::Path<Uuid>,
) -> ApiResult {
    ensure_access(&caller.0, None, true)?;

    let user = users.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}

/// GET /users
pub async fn list_users(
    caller: AuthenticatedUser,
    users: web::Data<AppUsersService>,
    query: web::Query<PaginationParams>,
) -> ApiResult {
    ensure_access(&caller.0, Some(Role::Admin), true)?;

    let page = users.get_all_users(query.skip, query.limit).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(page)))
}

/// DELETE /users/{id}
pub async fn delete_user(
    caller: AuthenticatedUser,
    users: web::Data<AppUsersService>,
    path: web::Path<Uuid>,
) -> ApiResult {
    ensure_access(&caller.0, Some(Role::Admin), true)?;

    users.delete_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("User deleted")))
}

/// PATCH /users/{id}/verify-user
///
/// Manual activation override for accounts that cannot complete SMS
/// verification.
pub async fn verify_user(
    caller: AuthenticatedUser,
    users: web::Data<AppUsersService>,
    path: web::Path<Uuid>,
) -> ApiResult {
    ensure_access(&caller.0, Some(Role::Admin), true)?;

    let target = users.get_by_id(path.into_inner()).await?;
    let user = users.mark_phone_number_verified(&target.phone_number).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(user)))
}
