//! Repository interfaces for persistence, with in-memory mocks for tests.

pub mod confirmation_code;
pub mod profile;
pub mod user;

pub use confirmation_code::{ConfirmationCodeRepository, DeliveryPatch};
pub use profile::ProfileRepository;
pub use user::UserRepository;

pub use confirmation_code::MockConfirmationCodeRepository;
pub use profile::MockProfileRepository;
pub use user::MockUserRepository;
