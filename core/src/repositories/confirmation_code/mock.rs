//! In-memory implementation of ConfirmationCodeRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::confirmation_code::{ConfirmationCode, ConfirmationCodeType};
use crate::errors::DomainError;

use super::trait_::{ConfirmationCodeRepository, DeliveryPatch};

/// Mock confirmation code repository backed by a HashMap
pub struct MockConfirmationCodeRepository {
    codes: Arc<RwLock<HashMap<Uuid, ConfirmationCode>>>,
}

impl MockConfirmationCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live records, for test assertions
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.codes.read().await.is_empty()
    }
}

impl Default for MockConfirmationCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfirmationCodeRepository for MockConfirmationCodeRepository {
    async fn insert(&self, code: ConfirmationCode) -> Result<ConfirmationCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.insert(code.id, code.clone());
        Ok(code)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ConfirmationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes.get(&id).cloned())
    }

    async fn find_by_value(&self, value: &str) -> Result<Option<ConfirmationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes.values().find(|c| c.value == value).cloned())
    }

    async fn find_by_phone_and_type(
        &self,
        phone_number: &str,
        code_type: ConfirmationCodeType,
    ) -> Result<Option<ConfirmationCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .values()
            .find(|c| c.phone_number == phone_number && c.code_type == code_type)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DomainError> {
        let mut codes = self.codes.write().await;
        Ok(codes.remove(&id).map_or(0, |_| 1))
    }

    async fn update_delivery(
        &self,
        id: Uuid,
        patch: DeliveryPatch,
    ) -> Result<u64, DomainError> {
        let mut codes = self.codes.write().await;
        match codes.get_mut(&id) {
            Some(code) => {
                code.record_delivery(patch.date_sent, patch.message_sent, patch.messaging_id);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
