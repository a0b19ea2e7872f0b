//! # Kolo Infrastructure
//!
//! Infrastructure layer for the Kolo identity service: MySQL repository
//! implementations backed by sqlx, and the Redis list transport carrying
//! events to the sibling services and delivery receipts back.

pub mod database;
pub mod queue;

pub use database::connection::create_pool;
pub use database::mysql::{
    MySqlConfirmationCodeRepository, MySqlProfileRepository, MySqlUserRepository,
};
pub use queue::{DeliveryReceiptListener, RedisEventPublisher};
