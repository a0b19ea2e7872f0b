//! Concrete service types and route wiring.

use actix_web::web;

use kolo_core::services::auth::AuthService;
use kolo_core::services::confirmation::ConfirmationCodeService;
use kolo_core::services::users::UsersService;
use kolo_infra::database::mysql::{
    MySqlConfirmationCodeRepository, MySqlProfileRepository, MySqlUserRepository,
};
use kolo_infra::queue::RedisEventPublisher;

use crate::middleware::auth::JwtAuth;
use crate::routes;

/// The confirmation-code engine over the production stack
pub type AppConfirmationService =
    ConfirmationCodeService<MySqlConfirmationCodeRepository, RedisEventPublisher>;

/// The users service over the production stack
pub type AppUsersService = UsersService<
    MySqlUserRepository,
    MySqlProfileRepository,
    MySqlConfirmationCodeRepository,
    RedisEventPublisher,
>;

/// The auth service over the production stack
pub type AppAuthService = AuthService<
    MySqlUserRepository,
    MySqlProfileRepository,
    MySqlConfirmationCodeRepository,
    RedisEventPublisher,
>;

/// Registers every route of the HTTP surface.
///
/// Public routes come first; everything else sits behind `JwtAuth`, which
/// resolves the bearer token to a user before the handler runs.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // public
    cfg.route("/register", web::post().to(routes::auth::register))
        .route("/log-in", web::post().to(routes::auth::log_in))
        .route(
            "/request-password-change",
            web::post().to(routes::auth::request_password_change),
        )
        .route(
            "/resend-reset-password-confirmation-code",
            web::post().to(routes::auth::resend_reset_password_confirmation_code),
        )
        .route(
            "/reset-password-with-code",
            web::put().to(routes::auth::reset_password_with_code),
        )
        .route(
            "/users/verify-phone",
            web::post().to(routes::users::verify_phone),
        )
        .route(
            "/users/resend-verify-phone-confirmation-code",
            web::post().to(routes::users::resend_verify_phone_confirmation_code),
        );

    // authenticated
    cfg.service(
        web::resource("/me")
            .wrap(JwtAuth)
            .route(web::get().to(routes::auth::me)),
    )
    .service(
        web::resource("/users/reset-password")
            .wrap(JwtAuth)
            .route(web::put().to(routes::users::reset_password)),
    )
    .service(
        web::resource("/users")
            .wrap(JwtAuth)
            .route(web::get().to(routes::users::list_users)),
    )
    .service(
        web::resource("/users/{id}")
            .wrap(JwtAuth)
            .route(web::get().to(routes::users::get_user))
            .route(web::delete().to(routes::users::delete_user)),
    )
    .service(
        web::resource("/users/{id}/verify-user")
            .wrap(JwtAuth)
            .route(web::patch().to(routes::users::verify_user)),
    );
}
