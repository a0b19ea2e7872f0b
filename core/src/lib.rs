//! # Kolo Core
//!
//! Core business logic and domain layer for the Kolo identity service.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::confirmation_code::{ConfirmationCode, ConfirmationCodeType, CODE_LENGTH};
pub use domain::entities::profile::Profile;
pub use domain::entities::user::{Role, User};
pub use domain::value_objects::{AuthResponse, DeliveryReceipt, DeliveryReceiptExtras};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{
    ConfirmationCodeRepository, DeliveryPatch, ProfileRepository, UserRepository,
};
pub use services::{
    AuthService, Claims, ConfirmationCodeConfig, ConfirmationCodeService, EventPublisher,
    PasswordHasher, TokenService, UsersService,
};
