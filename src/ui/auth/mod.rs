//! Authentication UI module
//!
//! Login and registration forms plus the sliding card that hosts both.

mod login_form;
mod register_form;
mod slider;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use slider::AuthSlider;
