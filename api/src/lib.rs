//! # Kolo API
//!
//! HTTP layer for the Kolo identity service: DTO validation, JWT
//! middleware, route handlers and the error-to-status mapping.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
