//! CORS policy for the HTTP surface.

use actix_cors::Cors;

/// Builds the CORS middleware from the `CORS_ALLOWED_ORIGIN` variable.
/// Without it, any origin is accepted, which suits local development.
pub fn create_cors() -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allow_any_header()
        .max_age(3600);

    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origin) => cors.allowed_origin(&origin),
        Err(_) => cors.allow_any_origin(),
    }
}
