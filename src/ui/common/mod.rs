//! Common reusable UI components
//!
//! Building blocks shared by the login and registration forms.

pub mod form;
pub mod message;

pub use form::{IconInput, SelectField};
pub use message::ErrorMessage;
