//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Login page
//! - Register page
//! - Combined sliding auth page
//! - Not found page

mod auth;
mod layout;
mod login;
mod not_found;
mod register;

pub use auth::AuthPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
