//! User repository interface and mock.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

mod mock;

pub use mock::MockUserRepository;
pub use r#trait::UserRepository;
