//! Kolo identity service binary.
//!
//! Wires the MySQL repositories, the Redis queue transport and the core
//! services together, spawns the delivery-receipt listener and serves the
//! HTTP surface.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use kolo_api::app::{configure_routes, AppAuthService, AppUsersService};
use kolo_api::middleware::cors::create_cors;
use kolo_core::services::auth::{AuthService, PasswordHasher};
use kolo_core::services::confirmation::{ConfirmationCodeConfig, ConfirmationCodeService};
use kolo_core::services::token::TokenService;
use kolo_core::services::users::UsersService;
use kolo_infra::database::connection::create_pool;
use kolo_infra::database::mysql::{
    MySqlConfirmationCodeRepository, MySqlProfileRepository, MySqlUserRepository,
};
use kolo_infra::queue::{DeliveryReceiptListener, RedisEventPublisher};
use kolo_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        tracing::warn!("JWT_SECRET is not set, tokens are signed with the default secret");
    }

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let profile_repository = Arc::new(MySqlProfileRepository::new(pool.clone()));
    let code_repository = Arc::new(MySqlConfirmationCodeRepository::new(pool));

    let publisher = Arc::new(
        RedisEventPublisher::connect(config.queue.clone())
            .await
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    let confirmation_service = Arc::new(ConfirmationCodeService::new(
        Arc::clone(&code_repository),
        Arc::clone(&publisher),
        ConfirmationCodeConfig::from(&config.verification),
    ));

    let hasher = PasswordHasher::from(&config.security);
    let users_service: Arc<AppUsersService> = Arc::new(UsersService::new(
        Arc::clone(&user_repository),
        profile_repository,
        Arc::clone(&publisher),
        Arc::clone(&confirmation_service),
        hasher.clone(),
    ));

    let token_service = Arc::new(TokenService::new(config.auth.jwt.clone()));
    let auth_service: Arc<AppAuthService> = Arc::new(AuthService::new(
        Arc::clone(&users_service),
        user_repository,
        token_service,
        hasher,
        config.auth.admin_sign_up_token.clone(),
    ));

    let listener = DeliveryReceiptListener::new(Arc::clone(&confirmation_service), &config.queue)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    tokio::spawn(listener.run());

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "starting kolo identity service");

    let users_data = web::Data::from(users_service);
    let auth_data = web::Data::from(auth_service);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(create_cors())
            .app_data(users_data.clone())
            .app_data(auth_data.clone())
            .configure(configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
