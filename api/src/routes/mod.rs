//! Route handlers, grouped by surface.

pub mod auth;
pub mod users;
