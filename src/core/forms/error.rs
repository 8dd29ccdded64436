/// Validation failures detected by the auth forms before submission.
///
/// The `Display` text is what the form shows above its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthFormError {
    #[error("Email and password are required")]
    LoginIncomplete,

    #[error("All fields are required")]
    RegisterIncomplete,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
