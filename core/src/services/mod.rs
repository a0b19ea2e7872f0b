//! Business services orchestrating domain operations.

pub mod auth;
pub mod confirmation;
pub mod notify;
pub mod token;
pub mod users;

pub use auth::{AuthService, PasswordHasher};
pub use confirmation::{ConfirmationCodeConfig, ConfirmationCodeService};
pub use notify::EventPublisher;
pub use token::{Claims, TokenService};
pub use users::UsersService;
