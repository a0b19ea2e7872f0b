//! JWT authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, resolves it to
//! a user through the auth service, and injects the user into the request
//! extensions for handlers to pick up with the `AuthenticatedUser`
//! extractor. Role and activation checks stay in the handlers, composed
//! from `ensure_access`.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;

use kolo_core::domain::entities::user::{Role, User};
use kolo_core::errors::{DomainError, TokenError};

use crate::app::AppAuthService;
use crate::handlers::ApiError;

/// The user resolved from the bearer token, available to handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(user.ok_or_else(|| ApiError::from(DomainError::Token(TokenError::InvalidToken)).into()))
    }
}

/// Composable access check run inside handlers.
///
/// # Arguments
///
/// * `required_role` - Role the caller must hold, if any
/// * `require_active` - Whether the caller's phone number must be verified
pub fn ensure_access(
    user: &User,
    required_role: Option<Role>,
    require_active: bool,
) -> Result<(), ApiError> {
    if require_active && !user.is_active {
        return Err(DomainError::forbidden("Your phone number has not been verified").into());
    }

    if let Some(role) = required_role {
        if !user.has_role(role) {
            return Err(
                DomainError::forbidden("You do not have permission to perform this action").into(),
            );
        }
    }

    Ok(())
}

/// JWT authentication middleware factory
pub struct JwtAuth;

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = bearer_token(&req)?;

            let auth_service = req
                .app_data::<web::Data<AppAuthService>>()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("auth service not configured")
                })?
                .clone();

            let user = auth_service
                .authenticated_user(&token)
                .await
                .map_err(ApiError::from)?;

            req.extensions_mut().insert(AuthenticatedUser(user));

            service.call(req).await
        })
    }
}

fn bearer_token(req: &ServiceRequest) -> Result<String, Error> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| Error::from(ApiError::from(DomainError::Token(TokenError::InvalidToken))))?;

    header
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| Error::from(ApiError::from(DomainError::Token(TokenError::InvalidToken))))
}
