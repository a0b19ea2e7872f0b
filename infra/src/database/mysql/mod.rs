//! MySQL repository implementations backed by sqlx.
//!
//! UUIDs are stored as CHAR(36) strings and mapped back with
//! `Uuid::parse_str`; affected-row counts come straight from
//! `rows_affected()` so the services can apply their zero-row rules.

mod confirmation_code_repository_impl;
mod profile_repository_impl;
mod user_repository_impl;

pub use confirmation_code_repository_impl::MySqlConfirmationCodeRepository;
pub use profile_repository_impl::MySqlProfileRepository;
pub use user_repository_impl::MySqlUserRepository;
