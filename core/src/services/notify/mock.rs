//! Recording implementation of EventPublisher for testing

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::domain::entities::confirmation_code::ConfirmationCode;
use crate::domain::entities::user::User;

use super::trait_::EventPublisher;

/// Event captured by the recording publisher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishedEvent {
    /// A confirmation code was handed off for SMS delivery
    ConfirmationCode { code_id: Uuid, phone_number: String },
    /// A new user was announced
    UserCreated { user_id: Uuid },
    /// A verified phone number was announced
    PhoneVerified { user_id: Uuid },
    /// A deleted user was announced
    UserDeleted { user_id: Uuid },
}

/// Publisher that records events in memory, optionally failing every call
pub struct RecordingEventPublisher {
    events: Arc<Mutex<Vec<PublishedEvent>>>,
    should_fail: bool,
}

impl RecordingEventPublisher {
    /// Create a publisher that accepts every event
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            should_fail: false,
        }
    }

    /// Create a publisher that rejects every event
    pub fn failing() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    /// All events recorded so far
    pub fn events(&self) -> Vec<PublishedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Whether nothing has been published
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }

    fn record(&self, event: PublishedEvent) -> Result<(), String> {
        if self.should_fail {
            return Err("queue connection refused".to_string());
        }
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

impl Default for RecordingEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish_confirmation_code(&self, code: &ConfirmationCode) -> Result<(), String> {
        self.record(PublishedEvent::ConfirmationCode {
            code_id: code.id,
            phone_number: code.phone_number.clone(),
        })
    }

    async fn publish_user_created(&self, user: &User) -> Result<(), String> {
        self.record(PublishedEvent::UserCreated { user_id: user.id })
    }

    async fn publish_phone_verified(&self, user: &User) -> Result<(), String> {
        self.record(PublishedEvent::PhoneVerified { user_id: user.id })
    }

    async fn publish_user_deleted(&self, user: &User) -> Result<(), String> {
        self.record(PublishedEvent::UserDeleted { user_id: user.id })
    }
}
