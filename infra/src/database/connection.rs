//! MySQL connection pool setup

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

use kolo_core::errors::DomainError;
use kolo_shared::config::DatabaseConfig;

/// Builds the shared MySQL connection pool from configuration
///
/// # Returns
///
/// * `Ok(MySqlPool)` - A pool connected to the configured database
/// * `Err(DomainError)` - The database is unreachable
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, DomainError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::Database {
            message: format!("Failed to connect to MySQL: {}", e),
        })?;

    tracing::info!(
        max_connections = config.max_connections,
        "database pool ready"
    );

    Ok(pool)
}
