//! Authentication routes: registration, login, the current user and the
//! anonymous password-reset flow.

mod log_in;
mod me;
mod password_reset;
mod register;

pub use log_in::log_in;
pub use me::me;
pub use password_reset::{
    request_password_change, resend_reset_password_confirmation_code, reset_password_with_code,
};
pub use register::register;
