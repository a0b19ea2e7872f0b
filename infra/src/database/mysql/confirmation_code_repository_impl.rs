//! MySQL implementation of the ConfirmationCodeRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use kolo_core::domain::entities::confirmation_code::{ConfirmationCode, ConfirmationCodeType};
use kolo_core::errors::DomainError;
use kolo_core::repositories::{ConfirmationCodeRepository, DeliveryPatch};

/// MySQL implementation of ConfirmationCodeRepository
pub struct MySqlConfirmationCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const SELECT_COLUMNS: &str = "id, phone_number, value, code_type, seconds_to_expire, \
                              created_at, updated_at, date_sent, message_sent, messaging_id";

impl MySqlConfirmationCodeRepository {
    /// Create a new MySQL confirmation code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn type_to_str(code_type: ConfirmationCodeType) -> &'static str {
        match code_type {
            ConfirmationCodeType::PhoneNumber => "PHONE_NUMBER",
            ConfirmationCodeType::PasswordReset => "PASSWORD_RESET",
        }
    }

    fn str_to_type(value: &str) -> Result<ConfirmationCodeType, DomainError> {
        match value {
            "PHONE_NUMBER" => Ok(ConfirmationCodeType::PhoneNumber),
            "PASSWORD_RESET" => Ok(ConfirmationCodeType::PasswordReset),
            other => Err(DomainError::Internal {
                message: format!("Unknown confirmation code type in database: {}", other),
            }),
        }
    }

    /// Convert a database row to a ConfirmationCode entity
    fn row_to_code(row: &sqlx::mysql::MySqlRow) -> Result<ConfirmationCode, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let code_type: String = row.try_get("code_type").map_err(|e| DomainError::Internal {
            message: format!("Failed to get code_type: {}", e),
        })?;

        Ok(ConfirmationCode {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid confirmation code UUID: {}", e),
            })?,
            phone_number: row.try_get("phone_number").map_err(|e| DomainError::Internal {
                message: format!("Failed to get phone_number: {}", e),
            })?,
            value: row.try_get("value").map_err(|e| DomainError::Internal {
                message: format!("Failed to get value: {}", e),
            })?,
            code_type: Self::str_to_type(&code_type)?,
            seconds_to_expire: row
                .try_get("seconds_to_expire")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get seconds_to_expire: {}", e),
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
            date_sent: row
                .try_get::<Option<DateTime<Utc>>, _>("date_sent")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get date_sent: {}", e),
                })?,
            message_sent: row.try_get("message_sent").map_err(|e| DomainError::Internal {
                message: format!("Failed to get message_sent: {}", e),
            })?,
            messaging_id: row.try_get("messaging_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get messaging_id: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl ConfirmationCodeRepository for MySqlConfirmationCodeRepository {
    async fn insert(&self, code: ConfirmationCode) -> Result<ConfirmationCode, DomainError> {
        let query = r#"
            INSERT INTO confirmation_codes (
                id, phone_number, value, code_type, seconds_to_expire,
                created_at, updated_at, date_sent, message_sent, messaging_id
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(code.id.to_string())
            .bind(&code.phone_number)
            .bind(&code.value)
            .bind(Self::type_to_str(code.code_type))
            .bind(code.seconds_to_expire)
            .bind(code.created_at)
            .bind(code.updated_at)
            .bind(code.date_sent)
            .bind(code.message_sent)
            .bind(&code.messaging_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to insert confirmation code: {}", e),
            })?;

        Ok(code)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ConfirmationCode>, DomainError> {
        let query = format!("SELECT {} FROM confirmation_codes WHERE id = ?", SELECT_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find confirmation code by id: {}", e),
            })?;

        row.as_ref().map(Self::row_to_code).transpose()
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<ConfirmationCode>, DomainError> {
        let query = format!(
            "SELECT {} FROM confirmation_codes WHERE value = ?",
            SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find confirmation code by value: {}", e),
            })?;

        row.as_ref().map(Self::row_to_code).transpose()
    }

    async fn find_by_phone_and_type(
        &self,
        phone_number: &str,
        code_type: ConfirmationCodeType,
    ) -> Result<Option<ConfirmationCode>, DomainError> {
        let query = format!(
            "SELECT {} FROM confirmation_codes WHERE phone_number = ? AND code_type = ? \
             ORDER BY created_at DESC LIMIT 1",
            SELECT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(phone_number)
            .bind(Self::type_to_str(code_type))
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to find confirmation code by phone: {}", e),
            })?;

        row.as_ref().map(Self::row_to_code).transpose()
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM confirmation_codes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete confirmation code: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn update_delivery(&self, id: Uuid, patch: DeliveryPatch) -> Result<u64, DomainError> {
        let query = r#"
            UPDATE confirmation_codes
            SET date_sent = ?, message_sent = ?, messaging_id = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(patch.date_sent)
            .bind(patch.message_sent)
            .bind(&patch.messaging_id)
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update confirmation code delivery: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
