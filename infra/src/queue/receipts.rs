//! Delivery-receipt listener draining the service's own queue.

use std::sync::Arc;
use std::time::Duration;

use redis::aio::ConnectionManager;

use kolo_core::domain::value_objects::DeliveryReceipt;
use kolo_core::errors::DomainError;
use kolo_core::repositories::ConfirmationCodeRepository;
use kolo_core::services::confirmation::ConfirmationCodeService;
use kolo_core::services::notify::EventPublisher;
use kolo_shared::config::QueueConfig;

/// Seconds a single BRPOP blocks before the loop re-polls
const BLOCK_SECONDS: u64 = 5;

/// Delay before reconnecting after a Redis error
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Background worker consuming delivery receipts from the messaging service.
///
/// Each receipt correlates back to a confirmation code by the id embedded in
/// its `extras`. A receipt may legitimately arrive after the user has
/// already consumed the code; that race is logged and dropped, never
/// surfaced as an error.
pub struct DeliveryReceiptListener<R, P>
where
    R: ConfirmationCodeRepository,
    P: EventPublisher,
{
    /// Confirmation-code engine recording the delivery outcome
    engine: Arc<ConfirmationCodeService<R, P>>,
    /// Redis client, turned into a managed connection on `run`
    client: redis::Client,
    /// Queue this service receives receipts on
    queue: String,
}

impl<R, P> DeliveryReceiptListener<R, P>
where
    R: ConfirmationCodeRepository,
    P: EventPublisher,
{
    /// Create a listener for the configured auth-service queue
    pub fn new(
        engine: Arc<ConfirmationCodeService<R, P>>,
        config: &QueueConfig,
    ) -> Result<Self, DomainError> {
        let client =
            redis::Client::open(config.redis_url.as_str()).map_err(|e| DomainError::Database {
                message: format!("Invalid Redis URL: {}", e),
            })?;

        Ok(Self {
            engine,
            client,
            queue: config.auth_service_queue.clone(),
        })
    }

    /// Drains the receipt queue until the task is aborted.
    ///
    /// Redis errors back off and retry; the managed connection reconnects
    /// on its own.
    pub async fn run(self) {
        let mut conn = loop {
            match ConnectionManager::new(self.client.clone()).await {
                Ok(conn) => break conn,
                Err(e) => {
                    tracing::warn!(error = %e, "receipt listener cannot reach Redis, retrying");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        };

        tracing::info!(queue = %self.queue, "receipt listener started");

        loop {
            let response: Result<Option<(String, String)>, redis::RedisError> =
                redis::cmd("BRPOP")
                    .arg(&self.queue)
                    .arg(BLOCK_SECONDS)
                    .query_async(&mut conn)
                    .await;

            match response {
                Ok(Some((_, payload))) => self.handle(&payload).await,
                // timeout with nothing queued
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "receipt queue read failed");
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    async fn handle(&self, payload: &str) {
        let receipt: DeliveryReceipt = match serde_json::from_str(payload) {
            Ok(receipt) => receipt,
            Err(e) => {
                tracing::warn!(error = %e, "discarding malformed delivery receipt");
                return;
            }
        };

        let code_id = receipt.extras.confirmation_code_id;
        match self
            .engine
            .update_confirmation_code_sent_details(receipt)
            .await
        {
            Ok(code) => {
                tracing::debug!(
                    code_id = %code.id,
                    message_sent = code.message_sent,
                    "delivery receipt recorded"
                );
            }
            // the user consumed the code before the receipt arrived
            Err(DomainError::NotFound { .. }) => {
                tracing::debug!(code_id = %code_id, "receipt for already-consumed code dropped");
            }
            Err(e) => {
                tracing::warn!(code_id = %code_id, error = %e, "failed to record delivery receipt");
            }
        }
    }
}
