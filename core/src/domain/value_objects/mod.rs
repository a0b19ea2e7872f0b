//! Value objects shared across services.

pub mod auth_response;
pub mod delivery_receipt;

pub use auth_response::AuthResponse;
pub use delivery_receipt::{DeliveryReceipt, DeliveryReceiptExtras};
