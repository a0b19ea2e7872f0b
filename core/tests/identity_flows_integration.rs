//! End-to-end tests over the full service stack with in-memory repositories:
//! registration, phone verification, login and the password-reset flows.

use std::sync::Arc;

use kolo_core::domain::entities::confirmation_code::ConfirmationCodeType;
use kolo_core::domain::entities::user::Role;
use kolo_core::errors::DomainError;
use kolo_core::repositories::{
    ConfirmationCodeRepository, MockConfirmationCodeRepository, MockProfileRepository,
    MockUserRepository,
};
use kolo_core::services::auth::{AuthService, PasswordHasher, Registration};
use kolo_core::services::confirmation::{ConfirmationCodeConfig, ConfirmationCodeService};
use kolo_core::services::notify::RecordingEventPublisher;
use kolo_core::services::token::TokenService;
use kolo_core::services::users::UsersService;
use kolo_shared::config::JwtConfig;

const PHONE: &str = "08099100752";
const PASSWORD: &str = "Secret1!";

struct Stack {
    auth: AuthService<
        MockUserRepository,
        MockProfileRepository,
        MockConfirmationCodeRepository,
        RecordingEventPublisher,
    >,
    users: Arc<
        UsersService<
            MockUserRepository,
            MockProfileRepository,
            MockConfirmationCodeRepository,
            RecordingEventPublisher,
        >,
    >,
    codes: Arc<MockConfirmationCodeRepository>,
}

fn stack(seconds_to_expire: i64) -> Stack {
    let user_repo = Arc::new(MockUserRepository::new());
    let profile_repo = Arc::new(MockProfileRepository::new());
    let codes = Arc::new(MockConfirmationCodeRepository::new());
    let publisher = Arc::new(RecordingEventPublisher::new());
    let engine = Arc::new(ConfirmationCodeService::new(
        Arc::clone(&codes),
        Arc::clone(&publisher),
        ConfirmationCodeConfig { seconds_to_expire },
    ));
    let hasher = PasswordHasher::new(4);
    let users = Arc::new(UsersService::new(
        Arc::clone(&user_repo),
        profile_repo,
        publisher,
        engine,
        hasher.clone(),
    ));
    let auth = AuthService::new(
        Arc::clone(&users),
        user_repo,
        Arc::new(TokenService::new(JwtConfig::new("integration-secret"))),
        hasher,
        None,
    );

    Stack { auth, users, codes }
}

fn registration() -> Registration {
    Registration {
        phone_number: PHONE.to_string(),
        first_name: "Ada".to_string(),
        last_name: "Obi".to_string(),
        email: None,
        home_address: "12 Marina Rd, Lagos".to_string(),
        role: Role::Agent,
        password: PASSWORD.to_string(),
        confirmation: PASSWORD.to_string(),
        admin_sign_up_token: None,
    }
}

async fn dispatched_code(stack: &Stack, code_type: ConfirmationCodeType) -> String {
    stack
        .codes
        .find_by_phone_and_type(PHONE, code_type)
        .await
        .unwrap()
        .unwrap()
        .value
}

#[tokio::test]
async fn test_register_verify_then_log_in() {
    let stack = stack(300);

    stack.auth.register(registration()).await.unwrap();

    // login is blocked until the phone number is verified
    let premature = stack.auth.authenticate(PHONE, PASSWORD).await;
    assert!(matches!(premature, Err(DomainError::Forbidden { .. })));

    let code = dispatched_code(&stack, ConfirmationCodeType::PhoneNumber).await;
    let verified = stack.users.verify_phone_from_code(PHONE, &code).await.unwrap();
    assert!(verified.is_active);

    let response = stack.auth.authenticate(PHONE, PASSWORD).await.unwrap();
    assert_eq!(response.user.id, verified.id);

    let me = stack
        .auth
        .authenticated_user(&response.access_token)
        .await
        .unwrap();
    assert_eq!(me.id, verified.id);
}

#[tokio::test]
async fn test_verification_code_is_single_use() {
    let stack = stack(300);
    stack.auth.register(registration()).await.unwrap();
    let code = dispatched_code(&stack, ConfirmationCodeType::PhoneNumber).await;

    stack.users.verify_phone_from_code(PHONE, &code).await.unwrap();

    let replay = stack.users.verify_phone_from_code(PHONE, &code).await;
    assert!(matches!(replay, Err(DomainError::InvalidConfirmationCode)));
}

#[tokio::test]
async fn test_password_reset_flow_changes_the_accepted_credential() {
    let stack = stack(300);
    stack.auth.register(registration()).await.unwrap();
    let code = dispatched_code(&stack, ConfirmationCodeType::PhoneNumber).await;
    stack.users.verify_phone_from_code(PHONE, &code).await.unwrap();

    stack.users.request_password_reset(PHONE).await.unwrap();
    let reset_code = dispatched_code(&stack, ConfirmationCodeType::PasswordReset).await;

    stack
        .users
        .update_password_with_code(&reset_code, "NewSecret9!", "NewSecret9!")
        .await
        .unwrap();

    let old = stack.auth.authenticate(PHONE, PASSWORD).await;
    assert!(matches!(old, Err(DomainError::WrongCredentials)));
    assert!(stack.auth.authenticate(PHONE, "NewSecret9!").await.is_ok());
}

#[tokio::test]
async fn test_expired_verification_code_is_replaced_on_resend() {
    let stack = stack(0);
    stack.auth.register(registration()).await.unwrap();
    let stale = stack
        .codes
        .find_by_phone_and_type(PHONE, ConfirmationCodeType::PhoneNumber)
        .await
        .unwrap()
        .unwrap();

    let stale_attempt = stack.users.verify_phone_from_code(PHONE, &stale.value).await;
    assert!(matches!(
        stale_attempt,
        Err(DomainError::InvalidConfirmationCode)
    ));

    let fresh = stack
        .users
        .resend_confirmation_code(PHONE, None, ConfirmationCodeType::PhoneNumber)
        .await
        .unwrap();
    assert_ne!(fresh.id, stale.id);
    assert!(stack.codes.find_by_id(stale.id).await.unwrap().is_none());
}
