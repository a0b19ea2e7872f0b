//! Authentication: registration entry point, credential checks and
//! bearer-token issuance.

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::PasswordHasher;
pub use service::{AuthService, Registration};
