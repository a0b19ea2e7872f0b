//! Orchestrator tying users, profiles and confirmation codes together.

use std::sync::Arc;

use kolo_shared::utils::mask_phone_number;
use uuid::Uuid;

use crate::domain::entities::confirmation_code::{ConfirmationCode, ConfirmationCodeType};
use crate::domain::entities::profile::Profile;
use crate::domain::entities::user::{Role, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ConfirmationCodeRepository, ProfileRepository, UserRepository};
use crate::services::auth::PasswordHasher;
use crate::services::confirmation::ConfirmationCodeService;
use crate::services::notify::EventPublisher;

/// Uniform message returned whenever a reset code was (or would have been)
/// dispatched. The HTTP layer returns the same text for unknown phone
/// numbers so responses cannot be used to enumerate accounts.
pub const CODE_SENT_MESSAGE: &str =
    "A confirmation code has been sent to your phone number";

/// Input for the registration write path
#[derive(Debug, Clone)]
pub struct NewUser {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub home_address: String,
    pub role: Role,
    /// Already hashed by the caller
    pub hashed_password: String,
}

/// Orchestrator over user, profile and confirmation-code persistence.
///
/// Holds the confirmation-code engine rather than reimplementing its rules:
/// every code the orchestrator touches goes through the engine, so the
/// lifecycle invariants live in exactly one place.
pub struct UsersService<U, Pr, C, P>
where
    U: UserRepository,
    Pr: ProfileRepository,
    C: ConfirmationCodeRepository,
    P: EventPublisher,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Profile repository for database operations
    profile_repository: Arc<Pr>,
    /// Outbound port to the sibling services
    publisher: Arc<P>,
    /// Confirmation-code engine
    confirmation_service: Arc<ConfirmationCodeService<C, P>>,
    /// Password hasher for the reset flows
    hasher: PasswordHasher,
}

/// Password confirmation compares case-insensitively; existing clients
/// depend on this exact behavior.
pub(crate) fn passwords_match(password: &str, confirmation: &str) -> bool {
    password.eq_ignore_ascii_case(confirmation)
}

impl<U, Pr, C, P> UsersService<U, Pr, C, P>
where
    U: UserRepository,
    Pr: ProfileRepository,
    C: ConfirmationCodeRepository,
    P: EventPublisher,
{
    /// Create a new users service
    pub fn new(
        user_repository: Arc<U>,
        profile_repository: Arc<Pr>,
        publisher: Arc<P>,
        confirmation_service: Arc<ConfirmationCodeService<C, P>>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_repository,
            profile_repository,
            publisher,
            confirmation_service,
            hasher,
        }
    }

    /// Registration write path.
    ///
    /// Persists the user and their profile, announces the new account to the
    /// onboarding and store services, and dispatches a phone-verification
    /// code. The user starts inactive; only phone verification (or an admin
    /// override) activates them.
    ///
    /// # Returns
    ///
    /// * `Err(DuplicateResource)` - The phone number is already registered
    pub async fn create(&self, new_user: NewUser) -> DomainResult<User> {
        if self
            .user_repository
            .find_by_phone(&new_user.phone_number)
            .await?
            .is_some()
        {
            return Err(DomainError::DuplicateResource {
                resource: "User".to_string(),
                identifier: mask_phone_number(&new_user.phone_number),
            });
        }

        let mut user = User::new(
            new_user.phone_number,
            new_user.first_name,
            new_user.last_name,
            new_user.role,
            new_user.hashed_password,
        );
        user.email = new_user.email;

        let user = self.user_repository.create(user).await?;
        self.profile_repository
            .insert(Profile::new(user.id, false, new_user.home_address))
            .await?;

        if let Err(e) = self.publisher.publish_user_created(&user).await {
            tracing::warn!(user_id = %user.id, error = %e, "failed to announce new user");
        }

        let code = self
            .confirmation_service
            .create_confirmation_code(&user, ConfirmationCodeType::PhoneNumber)
            .await?;
        self.confirmation_service.send_confirmation_code(&code).await?;

        tracing::info!(
            user_id = %user.id,
            phone = %mask_phone_number(&user.phone_number),
            role = ?user.role,
            "registered new user"
        );

        Ok(user)
    }

    /// Consumes a phone-verification code and activates the account.
    ///
    /// Any failure after the code has been consumed is reported as
    /// `InvalidConfirmationCode`, so the response never reveals whether the
    /// phone number maps to an account.
    pub async fn verify_phone_from_code(
        &self,
        phone_number: &str,
        code_value: &str,
    ) -> DomainResult<User> {
        self.confirmation_service.ensure_code_valid(code_value).await?;
        let code = self.confirmation_service.get_confirmation_code(code_value).await?;

        // The code is consumed past this point; every later failure is
        // reported uniformly.
        self.confirmation_service.mark_used(code.id).await?;

        match self.mark_phone_number_verified(phone_number).await {
            Ok(user) => Ok(user),
            Err(e) => {
                tracing::warn!(
                    phone = %mask_phone_number(phone_number),
                    error = %e,
                    "phone verification failed after code consumption"
                );
                Err(DomainError::InvalidConfirmationCode)
            }
        }
    }

    /// Activates a user and flags their profile as phone-verified.
    ///
    /// Emits `phone-verified` to the sibling services; the emit is
    /// best-effort and never fails the verification.
    pub async fn mark_phone_number_verified(&self, phone_number: &str) -> DomainResult<User> {
        let mut user = self
            .user_repository
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::not_found("User", mask_phone_number(phone_number)))?;

        user.activate();
        let affected = self.user_repository.update(user.clone()).await?;
        if affected == 0 {
            return Err(DomainError::UpdateFailed {
                message: "The server is unable to verify the user".to_string(),
            });
        }

        let mut profile = self
            .profile_repository
            .find_by_user(user.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile", user.id.to_string()))?;

        profile.mark_phone_verified();
        let affected = self.profile_repository.update(profile).await?;
        if affected == 0 {
            return Err(DomainError::UpdateFailed {
                message: "The server is unable to verify the user".to_string(),
            });
        }

        if let Err(e) = self.publisher.publish_phone_verified(&user).await {
            tracing::warn!(user_id = %user.id, error = %e, "failed to announce phone verification");
        }

        tracing::info!(
            user_id = %user.id,
            phone = %mask_phone_number(&user.phone_number),
            "phone number verified"
        );

        Ok(user)
    }

    /// Re-dispatches a confirmation code for a flow that already has one.
    ///
    /// The user may supply a corrected phone number; the stored number is
    /// updated before the replacement code is issued, so the new code binds
    /// to the corrected number. There is no first-time-send path here: the
    /// old code must exist, and it must be expired.
    ///
    /// # Arguments
    ///
    /// * `original_phone` - The number the account is currently registered with
    /// * `new_phone` - A corrected number, if the user mistyped at registration
    /// * `code_type` - The flow whose code is being re-requested
    pub async fn resend_confirmation_code(
        &self,
        original_phone: &str,
        new_phone: Option<&str>,
        code_type: ConfirmationCodeType,
    ) -> DomainResult<ConfirmationCode> {
        let mut user = self
            .user_repository
            .find_by_phone(original_phone)
            .await?
            .ok_or_else(|| DomainError::not_found("User", mask_phone_number(original_phone)))?;

        let old_code = self
            .confirmation_service
            .get_confirmation_code_by_phone_number(&user.phone_number, code_type)
            .await?;

        if let Some(new_phone) = new_phone {
            if new_phone != user.phone_number {
                user.set_phone_number(new_phone);
                let affected = self.user_repository.update(user.clone()).await?;
                if affected == 0 {
                    return Err(DomainError::UpdateFailed {
                        message: "The server is unable to update the phone number".to_string(),
                    });
                }
                tracing::info!(
                    user_id = %user.id,
                    phone = %mask_phone_number(new_phone),
                    "phone number corrected during resend"
                );
            }
        }

        let code = self
            .confirmation_service
            .regenerate_confirmation_code_if_expired(&user, &old_code.value)
            .await?;
        self.confirmation_service.send_confirmation_code(&code).await?;

        Ok(code)
    }

    /// Starts the password-reset flow for a phone number.
    ///
    /// Fails with NotFound for an unknown number; the HTTP layer folds that
    /// into the same `CODE_SENT_MESSAGE` response so the endpoint cannot be
    /// used to probe for accounts.
    pub async fn request_password_reset(&self, phone_number: &str) -> DomainResult<String> {
        let user = self
            .user_repository
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::not_found("User", mask_phone_number(phone_number)))?;

        let code = self
            .confirmation_service
            .create_confirmation_code(&user, ConfirmationCodeType::PasswordReset)
            .await?;
        self.confirmation_service.send_confirmation_code(&code).await?;

        Ok(CODE_SENT_MESSAGE.to_string())
    }

    /// Completes a password reset with a confirmation code.
    ///
    /// The confirmation mismatch check runs before anything else, so a
    /// mismatched request mutates no state and leaves the code alive. The
    /// subject is resolved from the code's stored phone number, never from
    /// client input.
    pub async fn update_password_with_code(
        &self,
        code_value: &str,
        password: &str,
        confirmation: &str,
    ) -> DomainResult<User> {
        if !passwords_match(password, confirmation) {
            return Err(DomainError::PasswordMismatch);
        }

        let code = self.confirmation_service.get_confirmation_code(code_value).await?;

        let user = self
            .user_repository
            .find_by_phone(&code.phone_number)
            .await?
            .ok_or(DomainError::InvalidConfirmationCode)?;

        self.confirmation_service.ensure_code_valid(code_value).await?;
        self.confirmation_service.mark_used(code.id).await?;

        let hash = self.hasher.hash_password(password)?;
        let affected = self
            .user_repository
            .update_password_hash(user.id, &hash)
            .await?;
        if affected == 0 {
            return Err(DomainError::not_found("User", user.id.to_string()));
        }

        tracing::info!(user_id = %user.id, "password reset via confirmation code");

        Ok(user)
    }

    /// Changes the password of an authenticated user.
    ///
    /// Requires the existing password; a wrong one is `WrongCredentials`,
    /// exactly like a failed login.
    pub async fn update_user_password_locked(
        &self,
        user_id: Uuid,
        existing_password: &str,
        password: &str,
        confirmation: &str,
    ) -> DomainResult<User> {
        if !passwords_match(password, confirmation) {
            return Err(DomainError::PasswordMismatch);
        }

        let user = self.get_by_id(user_id).await?;

        if !self
            .hasher
            .verify_password(existing_password, &user.hashed_password)?
        {
            return Err(DomainError::WrongCredentials);
        }

        let hash = self.hasher.hash_password(password)?;
        let affected = self
            .user_repository
            .update_password_hash(user.id, &hash)
            .await?;
        if affected == 0 {
            return Err(DomainError::UpdateFailed {
                message: "The server is unable to update the password".to_string(),
            });
        }

        tracing::info!(user_id = %user.id, "password changed");

        Ok(user)
    }

    /// Finds a user by id
    ///
    /// # Returns
    ///
    /// * `Err(NotFound)` - No user with the given id
    pub async fn get_by_id(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", id.to_string()))
    }

    /// Finds a user by their registered phone number
    pub async fn get_by_phone_number(&self, phone_number: &str) -> DomainResult<User> {
        self.user_repository
            .find_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::not_found("User", mask_phone_number(phone_number)))
    }

    /// Lists users with skip/limit pagination
    pub async fn get_all_users(&self, skip: u64, limit: u64) -> DomainResult<Vec<User>> {
        self.user_repository.list(skip, limit).await
    }

    /// Deletes a user account.
    ///
    /// Superusers can never be deleted. Announces the deletion to the
    /// sibling services, best-effort.
    pub async fn delete_user(&self, id: Uuid) -> DomainResult<()> {
        let user = self.get_by_id(id).await?;

        if user.is_super_user {
            return Err(DomainError::forbidden("A superuser cannot be deleted"));
        }

        let affected = self.user_repository.delete(id).await?;
        if affected == 0 {
            return Err(DomainError::not_found("User", id.to_string()));
        }

        if let Err(e) = self.publisher.publish_user_deleted(&user).await {
            tracing::warn!(user_id = %user.id, error = %e, "failed to announce user deletion");
        }

        tracing::info!(user_id = %user.id, "user deleted");

        Ok(())
    }

    /// Replaces a user's registered phone number
    pub async fn update_phone_number(
        &self,
        user_id: Uuid,
        phone_number: &str,
    ) -> DomainResult<User> {
        let mut user = self.get_by_id(user_id).await?;

        user.set_phone_number(phone_number);
        let affected = self.user_repository.update(user.clone()).await?;
        if affected == 0 {
            return Err(DomainError::UpdateFailed {
                message: "The server is unable to update the phone number".to_string(),
            });
        }

        Ok(user)
    }

    /// Flags a user's profile as onboarded. Driven by the onboarding
    /// service's queue, not by any HTTP route.
    pub async fn mark_user_onboarded(&self, user_id: Uuid) -> DomainResult<Profile> {
        let mut profile = self
            .profile_repository
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Profile", user_id.to_string()))?;

        profile.mark_onboarded();
        let affected = self.profile_repository.update(profile.clone()).await?;
        if affected == 0 {
            return Err(DomainError::UpdateFailed {
                message: "The server is unable to mark the user onboarded".to_string(),
            });
        }

        Ok(profile)
    }

    /// The stored password hash of a user, for credential checks
    pub async fn get_password_hash(&self, user_id: Uuid) -> DomainResult<String> {
        Ok(self.get_by_id(user_id).await?.hashed_password)
    }
}
