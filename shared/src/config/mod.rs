//! Application configuration assembled from environment variables.
//!
//! Services never read the environment themselves; they are handed the
//! relevant config struct at construction time.

mod auth;
mod database;
mod queue;
mod server;
mod verification;

pub use auth::{AuthConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use queue::QueueConfig;
pub use server::ServerConfig;
pub use verification::{SecurityConfig, VerificationConfig};

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// MySQL connection settings
    pub database: DatabaseConfig,

    /// JWT and admin sign-up settings
    pub auth: AuthConfig,

    /// Confirmation-code expiry settings
    pub verification: VerificationConfig,

    /// Password hashing settings
    pub security: SecurityConfig,

    /// Redis queue settings for cross-service events
    pub queue: QueueConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            verification: VerificationConfig::from_env(),
            security: SecurityConfig::from_env(),
            queue: QueueConfig::from_env(),
        }
    }
}
