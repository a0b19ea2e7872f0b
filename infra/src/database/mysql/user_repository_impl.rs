//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kolo_core::domain::entities::user::{Role, User};
use kolo_core::errors::DomainError;
use kolo_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn role_to_str(role: Role) -> &'static str {
        match role {
            Role::Admin => "admin",
            Role::Merchant => "merchant",
            Role::Agent => "agent",
        }
    }

    fn str_to_role(value: &str) -> Result<Role, DomainError> {
        match value {
            "admin" => Ok(Role::Admin),
            "merchant" => Ok(Role::Merchant),
            "agent" => Ok(Role::Agent),
            other => Err(DomainError::Internal {
                message: format!("Unknown role in database: {}", other),
            }),
        }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let role: String = row.try_get("role").map_err(|e| DomainError::Internal {
            message: format!("Failed to get role: {}", e),
        })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            phone_number: row.try_get("phone_number").map_err(|e| DomainError::Internal {
                message: format!("Failed to get phone_number: {}", e),
            })?,
            first_name: row.try_get("first_name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get first_name: {}", e),
            })?,
            last_name: row.try_get("last_name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get last_name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            role: Self::str_to_role(&role)?,
            hashed_password: row
                .try_get("hashed_password")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get hashed_password: {}", e),
                })?,
            is_active: row.try_get("is_active").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_active: {}", e),
            })?,
            is_super_user: row
                .try_get("is_super_user")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get is_super_user: {}", e),
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

const SELECT_COLUMNS: &str = "id, phone_number, first_name, last_name, email, role, \
                              hashed_password, is_active, is_super_user, created_at, updated_at";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ?", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find user by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE phone_number = ?", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find user by phone: {}", e),
            })?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, phone_number, first_name, last_name, email, role,
                hashed_password, is_active, is_super_user, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.phone_number)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(Self::role_to_str(user.role))
            .bind(&user.hashed_password)
            .bind(user.is_active)
            .bind(user.is_super_user)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e.as_database_error().map(|d| d.kind()) {
                Some(sqlx::error::ErrorKind::UniqueViolation) => DomainError::DuplicateResource {
                    resource: "User".to_string(),
                    identifier: user.phone_number.clone(),
                },
                _ => DomainError::Database {
                    message: format!("Failed to create user: {}", e),
                },
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<u64, DomainError> {
        let query = r#"
            UPDATE users
            SET phone_number = ?, first_name = ?, last_name = ?, email = ?,
                role = ?, is_active = ?, is_super_user = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.phone_number)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(Self::role_to_str(user.role))
            .bind(user.is_active)
            .bind(user.is_super_user)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        hashed_password: &str,
    ) -> Result<u64, DomainError> {
        let query = "UPDATE users SET hashed_password = ?, updated_at = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(hashed_password)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update password hash: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete user: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users ORDER BY created_at LIMIT ? OFFSET ?",
            SELECT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to list users: {}", e),
            })?;

        rows.iter().map(Self::row_to_user).collect()
    }
}
