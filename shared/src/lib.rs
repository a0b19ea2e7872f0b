//! # Kolo Shared
//!
//! Cross-cutting pieces shared by every crate of the identity service:
//! configuration loaded from the environment, common response types and
//! phone-number utilities.

pub mod config;
pub mod types;
pub mod utils;
