//! User routes: phone verification, the locked password change and
//! account administration.

mod manage;
mod password;
mod verify_phone;

pub use manage::{delete_user, get_user, list_users, verify_user};
pub use password::reset_password;
pub use verify_phone::{resend_verify_phone_confirmation_code, verify_phone};
