//! Unit tests for registration and login

use std::sync::Arc;

use uuid::Uuid;

use kolo_shared::config::JwtConfig;

use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};
use crate::repositories::{
    MockConfirmationCodeRepository, MockProfileRepository, MockUserRepository, UserRepository,
};
use crate::services::auth::{AuthService, PasswordHasher, Registration};
use crate::services::confirmation::{ConfirmationCodeConfig, ConfirmationCodeService};
use crate::services::notify::RecordingEventPublisher;
use crate::services::token::TokenService;
use crate::services::users::UsersService;

const PASSWORD: &str = "Secret1!";
const ADMIN_TOKEN: &str = "admin-sign-up-secret";

type TestAuthService = AuthService<
    MockUserRepository,
    MockProfileRepository,
    MockConfirmationCodeRepository,
    RecordingEventPublisher,
>;

struct Harness {
    service: TestAuthService,
    users: Arc<MockUserRepository>,
    token_service: Arc<TokenService>,
}

fn harness() -> Harness {
    let users = Arc::new(MockUserRepository::new());
    let profiles = Arc::new(MockProfileRepository::new());
    let codes = Arc::new(MockConfirmationCodeRepository::new());
    let publisher = Arc::new(RecordingEventPublisher::new());
    let engine = Arc::new(ConfirmationCodeService::new(
        Arc::clone(&codes),
        Arc::clone(&publisher),
        ConfirmationCodeConfig::default(),
    ));
    // cost 4 is the bcrypt minimum, keeps the tests fast
    let hasher = PasswordHasher::new(4);
    let users_service = Arc::new(UsersService::new(
        Arc::clone(&users),
        profiles,
        publisher,
        engine,
        hasher.clone(),
    ));
    let token_service = Arc::new(TokenService::new(JwtConfig::new("test-secret")));
    let service = AuthService::new(
        users_service,
        Arc::clone(&users),
        Arc::clone(&token_service),
        hasher,
        Some(ADMIN_TOKEN.to_string()),
    );

    Harness {
        service,
        users,
        token_service,
    }
}

fn registration(role: Role) -> Registration {
    Registration {
        phone_number: "08099100752".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Obi".to_string(),
        email: None,
        home_address: "12 Marina Rd, Lagos".to_string(),
        role,
        password: PASSWORD.to_string(),
        confirmation: PASSWORD.to_string(),
        admin_sign_up_token: None,
    }
}

impl Harness {
    /// Register and activate an account, as phone verification would
    async fn registered_active_user(&self) -> Uuid {
        let response = self.service.register(registration(Role::Agent)).await.unwrap();
        let mut user = self
            .users
            .find_by_id(response.user.id)
            .await
            .unwrap()
            .unwrap();
        user.activate();
        self.users.seed(user.clone()).await;
        user.id
    }
}

#[tokio::test]
async fn test_register_returns_verifiable_token() {
    let h = harness();

    let response = h.service.register(registration(Role::Agent)).await.unwrap();

    let claims = h
        .token_service
        .verify_bearer_token(&response.access_token)
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), response.user.id);
    assert!(!response.user.is_active);
}

#[tokio::test]
async fn test_register_hashes_the_password() {
    let h = harness();

    let response = h.service.register(registration(Role::Agent)).await.unwrap();

    let stored = h.users.find_by_id(response.user.id).await.unwrap().unwrap();
    assert_ne!(stored.hashed_password, PASSWORD);
    assert!(PasswordHasher::new(4)
        .verify_password(PASSWORD, &stored.hashed_password)
        .unwrap());
}

#[tokio::test]
async fn test_register_rejects_password_mismatch() {
    let h = harness();
    let mut request = registration(Role::Agent);
    request.confirmation = "Different9!".to_string();

    let result = h.service.register(request).await;

    assert!(matches!(result, Err(DomainError::PasswordMismatch)));
}

#[tokio::test]
async fn test_register_confirmation_compares_case_insensitively() {
    let h = harness();
    let mut request = registration(Role::Agent);
    request.confirmation = PASSWORD.to_uppercase();

    assert!(h.service.register(request).await.is_ok());
}

#[tokio::test]
async fn test_admin_registration_requires_sign_up_token() {
    let h = harness();

    let result = h.service.register(registration(Role::Admin)).await;

    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn test_admin_registration_rejects_wrong_token() {
    let h = harness();
    let mut request = registration(Role::Admin);
    request.admin_sign_up_token = Some("guess".to_string());

    let result = h.service.register(request).await;

    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn test_admin_registration_with_token_succeeds() {
    let h = harness();
    let mut request = registration(Role::Admin);
    request.admin_sign_up_token = Some(ADMIN_TOKEN.to_string());

    let response = h.service.register(request).await.unwrap();

    assert_eq!(response.user.role, Role::Admin);
}

#[tokio::test]
async fn test_authenticate_unknown_phone() {
    let h = harness();

    let result = h.service.authenticate("08011111111", PASSWORD).await;

    assert!(matches!(result, Err(DomainError::WrongCredentials)));
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    let h = harness();
    h.registered_active_user().await;

    let result = h.service.authenticate("08099100752", "wrong-password").await;

    assert!(matches!(result, Err(DomainError::WrongCredentials)));
}

#[tokio::test]
async fn test_authenticate_inactive_user_is_forbidden() {
    let h = harness();
    h.service.register(registration(Role::Agent)).await.unwrap();

    let result = h.service.authenticate("08099100752", PASSWORD).await;

    assert!(matches!(result, Err(DomainError::Forbidden { .. })));
}

#[tokio::test]
async fn test_authenticate_active_user() {
    let h = harness();
    let user_id = h.registered_active_user().await;

    let response = h.service.authenticate("08099100752", PASSWORD).await.unwrap();

    assert_eq!(response.user.id, user_id);
    let claims = h
        .token_service
        .verify_bearer_token(&response.access_token)
        .unwrap();
    assert_eq!(claims.user_id().unwrap(), user_id);
}

#[tokio::test]
async fn test_authenticated_user_round_trip() {
    let h = harness();
    let user_id = h.registered_active_user().await;
    let token = h.token_service.generate_bearer_token(user_id).unwrap();

    let user = h.service.authenticated_user(&token).await.unwrap();

    assert_eq!(user.id, user_id);
}

#[tokio::test]
async fn test_authenticated_user_for_deleted_account() {
    let h = harness();
    let user_id = h.registered_active_user().await;
    let token = h.token_service.generate_bearer_token(user_id).unwrap();
    h.users.delete(user_id).await.unwrap();

    let result = h.service.authenticated_user(&token).await;

    assert!(matches!(
        result,
        Err(DomainError::Token(TokenError::InvalidToken))
    ));
}
