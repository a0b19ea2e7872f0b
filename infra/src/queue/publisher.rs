//! Redis implementation of the EventPublisher port.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::Serialize;
use uuid::Uuid;

use kolo_core::domain::entities::confirmation_code::ConfirmationCode;
use kolo_core::domain::entities::user::User;
use kolo_core::errors::DomainError;
use kolo_core::services::notify::EventPublisher;
use kolo_shared::config::QueueConfig;

/// Correlation data echoed back by the messaging service in its receipt
#[derive(Debug, Serialize)]
struct MessageExtras {
    #[serde(rename = "confirmationCodeID")]
    confirmation_code_id: Uuid,
}

/// SMS dispatch request for the messaging service
#[derive(Debug, Serialize)]
struct ConfirmationCodeMessage<'a> {
    #[serde(rename = "phoneNumber")]
    phone_number: &'a str,
    message: String,
    /// Queue the messaging service posts its delivery receipt to
    reply_to_queue: &'a str,
    extras: MessageExtras,
}

/// User lifecycle event for the onboarding and store services
#[derive(Debug, Serialize)]
struct UserEvent<'a> {
    event: &'a str,
    #[serde(rename = "userID")]
    user_id: Uuid,
    #[serde(rename = "phoneNumber")]
    phone_number: &'a str,
    #[serde(rename = "firstName")]
    first_name: &'a str,
    #[serde(rename = "lastName")]
    last_name: &'a str,
}

impl<'a> UserEvent<'a> {
    fn new(event: &'a str, user: &'a User) -> Self {
        Self {
            event,
            user_id: user.id,
            phone_number: &user.phone_number,
            first_name: &user.first_name,
            last_name: &user.last_name,
        }
    }
}

/// Publishes cross-service events onto Redis list queues.
///
/// Field names on the wire keep the camelCase keys the consuming services
/// were built against.
pub struct RedisEventPublisher {
    /// Multiplexed connection, cloned per operation
    conn: ConnectionManager,
    /// Queue names and connection settings
    config: QueueConfig,
}

impl RedisEventPublisher {
    /// Connects to Redis and returns a ready publisher
    pub async fn connect(config: QueueConfig) -> Result<Self, DomainError> {
        let client =
            redis::Client::open(config.redis_url.as_str()).map_err(|e| DomainError::Database {
                message: format!("Invalid Redis URL: {}", e),
            })?;
        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to connect to Redis: {}", e),
            })?;

        tracing::info!("queue publisher connected");

        Ok(Self { conn, config })
    }

    async fn push(&self, queue: &str, payload: &impl Serialize) -> Result<(), String> {
        let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;

        let mut conn = self.conn.clone();
        conn.lpush::<_, _, ()>(queue, body)
            .await
            .map_err(|e| e.to_string())?;

        tracing::debug!(queue = %queue, "event queued");
        Ok(())
    }

    /// Fan a user lifecycle event out to the onboarding and store services
    async fn push_user_event(&self, event: &str, user: &User) -> Result<(), String> {
        let payload = UserEvent::new(event, user);
        self.push(&self.config.onboarding_queue, &payload).await?;
        self.push(&self.config.store_queue, &payload).await
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish_confirmation_code(&self, code: &ConfirmationCode) -> Result<(), String> {
        let payload = ConfirmationCodeMessage {
            phone_number: &code.phone_number,
            message: format!("Your Kolo confirmation code is {}", code.value),
            reply_to_queue: &self.config.auth_service_queue,
            extras: MessageExtras {
                confirmation_code_id: code.id,
            },
        };
        self.push(&self.config.messaging_queue, &payload).await
    }

    async fn publish_user_created(&self, user: &User) -> Result<(), String> {
        self.push_user_event("add-user", user).await
    }

    async fn publish_phone_verified(&self, user: &User) -> Result<(), String> {
        self.push_user_event("verify-phone", user).await
    }

    async fn publish_user_deleted(&self, user: &User) -> Result<(), String> {
        self.push_user_event("delete-user", user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kolo_core::domain::entities::confirmation_code::ConfirmationCodeType;
    use kolo_core::domain::entities::user::Role;

    #[test]
    fn test_confirmation_code_message_wire_format() {
        let code = ConfirmationCode::new("08099100752", ConfirmationCodeType::PhoneNumber, 300);
        let payload = ConfirmationCodeMessage {
            phone_number: &code.phone_number,
            message: format!("Your Kolo confirmation code is {}", code.value),
            reply_to_queue: "auth-service-queue",
            extras: MessageExtras {
                confirmation_code_id: code.id,
            },
        };

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();

        assert_eq!(json["phoneNumber"], "08099100752");
        assert_eq!(json["reply_to_queue"], "auth-service-queue");
        assert_eq!(json["extras"]["confirmationCodeID"], code.id.to_string());
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains(&code.value));
    }

    #[test]
    fn test_user_event_wire_format() {
        let user = User::new("08099100752", "Ada", "Obi", Role::Agent, "$2b$10$hash");
        let payload = UserEvent::new("add-user", &user);

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();

        assert_eq!(json["event"], "add-user");
        assert_eq!(json["userID"], user.id.to_string());
        assert_eq!(json["phoneNumber"], "08099100752");
        assert_eq!(json["firstName"], "Ada");
        // the password hash never leaves the service
        assert!(json.get("hashedPassword").is_none());
        assert!(json.get("hashed_password").is_none());
    }
}
