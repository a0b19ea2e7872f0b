//! Authentication service implementation

use std::sync::Arc;

use kolo_shared::utils::mask_phone_number;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ConfirmationCodeRepository, ProfileRepository, UserRepository};
use crate::services::notify::EventPublisher;
use crate::services::token::TokenService;
use crate::services::users::{passwords_match, NewUser, UsersService};

use super::password::PasswordHasher;

/// Input for the registration entry point, password still in plaintext
#[derive(Debug, Clone)]
pub struct Registration {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub home_address: String,
    pub role: Role,
    pub password: String,
    pub confirmation: String,
    /// Shared secret required when registering with the Admin role
    pub admin_sign_up_token: Option<String>,
}

/// Service handling registration and login.
///
/// Wraps the users service for the registration write path and adds the
/// concerns that belong to authentication alone: password hashing, the
/// admin sign-up gate, and bearer-token issuance.
pub struct AuthService<U, Pr, C, P>
where
    U: UserRepository,
    Pr: ProfileRepository,
    C: ConfirmationCodeRepository,
    P: EventPublisher,
{
    /// Users service for the registration write path
    users_service: Arc<UsersService<U, Pr, C, P>>,
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Password hasher
    hasher: PasswordHasher,
    /// Shared secret gating Admin registration; None disables Admin sign-up
    admin_sign_up_token: Option<String>,
}

impl<U, Pr, C, P> AuthService<U, Pr, C, P>
where
    U: UserRepository,
    Pr: ProfileRepository,
    C: ConfirmationCodeRepository,
    P: EventPublisher,
{
    /// Create a new authentication service
    pub fn new(
        users_service: Arc<UsersService<U, Pr, C, P>>,
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        hasher: PasswordHasher,
        admin_sign_up_token: Option<String>,
    ) -> Self {
        Self {
            users_service,
            user_repository,
            token_service,
            hasher,
            admin_sign_up_token,
        }
    }

    /// Registers a new account and issues its first bearer token.
    ///
    /// The Admin role is gated behind a shared sign-up token; Merchant and
    /// Agent registration is open. The returned token lets the client poll
    /// its own state while the phone number is still unverified.
    ///
    /// # Returns
    ///
    /// * `Err(PasswordMismatch)` - Password and confirmation differ
    /// * `Err(Forbidden)` - Admin role requested without the sign-up token
    /// * `Err(DuplicateResource)` - Phone number already registered
    pub async fn register(&self, registration: Registration) -> DomainResult<AuthResponse> {
        if !passwords_match(&registration.password, &registration.confirmation) {
            return Err(DomainError::PasswordMismatch);
        }

        if registration.role == Role::Admin {
            self.ensure_admin_sign_up_allowed(registration.admin_sign_up_token.as_deref())?;
        }

        let hashed_password = self.hasher.hash_password(&registration.password)?;

        let user = self
            .users_service
            .create(NewUser {
                phone_number: registration.phone_number,
                first_name: registration.first_name,
                last_name: registration.last_name,
                email: registration.email,
                home_address: registration.home_address,
                role: registration.role,
                hashed_password,
            })
            .await?;

        let token = self.token_service.generate_bearer_token(user.id)?;
        Ok(AuthResponse::new(token, user))
    }

    /// Checks credentials and issues a bearer token.
    ///
    /// An unknown phone number and a wrong password both surface as
    /// `WrongCredentials`; a correct password on an unverified account is
    /// `Forbidden`.
    pub async fn authenticate(&self, phone_number: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = self
            .user_repository
            .find_by_phone(phone_number)
            .await?
            .ok_or(DomainError::WrongCredentials)?;

        if !self.hasher.verify_password(password, &user.hashed_password)? {
            tracing::debug!(
                phone = %mask_phone_number(phone_number),
                "login rejected, wrong password"
            );
            return Err(DomainError::WrongCredentials);
        }

        if !user.is_active {
            return Err(DomainError::forbidden(
                "Your phone number has not been verified",
            ));
        }

        let token = self.token_service.generate_bearer_token(user.id)?;

        tracing::info!(user_id = %user.id, "user logged in");

        Ok(AuthResponse::new(token, user))
    }

    /// Resolves a bearer token to the user it authenticates.
    ///
    /// A valid token for a user who no longer exists is reported as an
    /// invalid token, not as NotFound.
    pub async fn authenticated_user(&self, token: &str) -> DomainResult<User> {
        let claims = self.token_service.verify_bearer_token(token)?;
        let user_id = claims.user_id()?;

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| crate::errors::TokenError::InvalidToken.into())
    }

    fn ensure_admin_sign_up_allowed(&self, provided: Option<&str>) -> DomainResult<()> {
        let expected = self
            .admin_sign_up_token
            .as_deref()
            .ok_or_else(|| DomainError::forbidden("Admin sign-up is disabled"))?;

        match provided {
            Some(token) if token == expected => Ok(()),
            _ => Err(DomainError::forbidden(
                "A valid sign-up token is required to register an admin",
            )),
        }
    }
}
