//! User lifecycle orchestration: registration, phone verification,
//! password resets and account management.

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewUser, UsersService, CODE_SENT_MESSAGE};

pub(crate) use service::passwords_match;
