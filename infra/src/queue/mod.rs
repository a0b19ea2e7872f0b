//! Redis list transport between the identity service and its siblings.
//!
//! Outbound events are LPUSHed onto the queues the onboarding, store and
//! messaging services consume; delivery receipts come back on this
//! service's own queue and are drained with BRPOP.

pub mod publisher;
pub mod receipts;

pub use publisher::RedisEventPublisher;
pub use receipts::DeliveryReceiptListener;
