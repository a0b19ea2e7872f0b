//! Domain entities representing core business objects.

pub mod confirmation_code;
pub mod profile;
pub mod user;

// Re-export commonly used types
pub use confirmation_code::{ConfirmationCode, ConfirmationCodeType, CODE_LENGTH};
pub use profile::Profile;
pub use user::{Role, User};
