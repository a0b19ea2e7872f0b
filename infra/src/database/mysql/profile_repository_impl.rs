//! MySQL implementation of the ProfileRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kolo_core::domain::entities::profile::Profile;
use kolo_core::errors::DomainError;
use kolo_core::repositories::ProfileRepository;

/// MySQL implementation of ProfileRepository
pub struct MySqlProfileRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlProfileRepository {
    /// Create a new MySQL profile repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Profile entity
    fn row_to_profile(row: &sqlx::mysql::MySqlRow) -> Result<Profile, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(Profile {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid profile UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            is_phone_verified: row
                .try_get("is_phone_verified")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get is_phone_verified: {}", e),
                })?,
            is_onboarded: row.try_get("is_onboarded").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_onboarded: {}", e),
            })?,
            home_address: row.try_get("home_address").map_err(|e| DomainError::Internal {
                message: format!("Failed to get home_address: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl ProfileRepository for MySqlProfileRepository {
    async fn insert(&self, profile: Profile) -> Result<Profile, DomainError> {
        let query = r#"
            INSERT INTO profiles (
                id, user_id, is_phone_verified, is_onboarded, home_address,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(profile.id.to_string())
            .bind(profile.user_id.to_string())
            .bind(profile.is_phone_verified)
            .bind(profile.is_onboarded)
            .bind(&profile.home_address)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to insert profile: {}", e),
            })?;

        Ok(profile)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, DomainError> {
        let query = r#"
            SELECT id, user_id, is_phone_verified, is_onboarded, home_address,
                   created_at, updated_at
            FROM profiles
            WHERE user_id = ?
        "#;

        let row = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find profile: {}", e),
            })?;

        row.as_ref().map(Self::row_to_profile).transpose()
    }

    async fn update(&self, profile: Profile) -> Result<u64, DomainError> {
        let query = r#"
            UPDATE profiles
            SET is_phone_verified = ?, is_onboarded = ?, home_address = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(profile.is_phone_verified)
            .bind(profile.is_onboarded)
            .bind(&profile.home_address)
            .bind(profile.updated_at)
            .bind(profile.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update profile: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
