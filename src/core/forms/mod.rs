//! Authentication form models
//!
//! Pure, framework-free state for the login and registration forms. Each
//! model owns its field values and a single optional error; the UI wraps a
//! model in a signal and forwards input and submit events to it.

mod error;
mod login;
mod register;
mod role;

pub use error::AuthFormError;
pub use login::{LoginField, LoginFormModel, LoginFormState};
pub use register::{RegisterField, RegisterFormModel, RegisterFormState};
pub use role::Role;
