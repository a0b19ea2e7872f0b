//! Cross-service queue configuration
//!
//! The identity service talks to its sibling services (onboarding, store,
//! messaging) exclusively through named queues backed by Redis lists.

use serde::{Deserialize, Serialize};

/// Redis queue settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueueConfig {
    /// Redis connection URL
    pub redis_url: String,

    /// Queue consumed by the onboarding service
    pub onboarding_queue: String,

    /// Queue consumed by the store service
    pub store_queue: String,

    /// Queue consumed by the messaging (SMS) service
    pub messaging_queue: String,

    /// Queue this service listens on for delivery receipts
    pub auth_service_queue: String,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            redis_url: String::from("redis://127.0.0.1:6379"),
            onboarding_queue: String::from("onboarding-queue"),
            store_queue: String::from("store-queue"),
            messaging_queue: String::from("messaging-queue"),
            auth_service_queue: String::from("auth-service-queue"),
        }
    }
}

impl QueueConfig {
    /// Create from environment variables (`REDIS_URL`, `*_QUEUE_NAME`)
    pub fn from_env() -> Self {
        let defaults = QueueConfig::default();
        Self {
            redis_url: std::env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            onboarding_queue: std::env::var("ONBOARDING_QUEUE_NAME")
                .unwrap_or(defaults.onboarding_queue),
            store_queue: std::env::var("STORE_QUEUE_NAME").unwrap_or(defaults.store_queue),
            messaging_queue: std::env::var("MESSAGING_QUEUE_NAME")
                .unwrap_or(defaults.messaging_queue),
            auth_service_queue: std::env::var("AUTH_SERVICE_QUEUE_NAME")
                .unwrap_or(defaults.auth_service_queue),
        }
    }
}
