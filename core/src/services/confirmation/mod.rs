//! Confirmation-code lifecycle: generation, expiry, regeneration,
//! consumption and delivery tracking.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::ConfirmationCodeConfig;
pub use service::ConfirmationCodeService;
