//! Login form model: email and password, both required.

use serde::Serialize;

use super::AuthFormError;

/// Inputs of the login form, named after their DOM `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    Email,
    Password,
}

impl LoginField {
    pub const ALL: [LoginField; 2] = [LoginField::Email, LoginField::Password];

    pub fn name(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            LoginField::Email => "Email Address",
            LoginField::Password => "Password",
        }
    }

    /// Label used as placeholder by the compact (label-less) layout
    pub fn short_label(self) -> &'static str {
        match self {
            LoginField::Email => "Email",
            LoginField::Password => "Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LoginField::Email => "Enter email",
            LoginField::Password => "Enter password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            LoginField::Email => "email",
            LoginField::Password => "password",
        }
    }
}

/// Current values of the login inputs.
///
/// Serializes to the diagnostic payload; the password is never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginFormState {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl LoginFormState {
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: LoginField, value: impl Into<String>) {
        let value = value.into();
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }

    /// Both fields must be non-empty. No format checks are applied.
    pub fn validate(&self) -> Result<(), AuthFormError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthFormError::LoginIncomplete);
        }
        Ok(())
    }

    /// JSON summary for the submission log line
    pub fn diagnostic(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Login form state plus the single error message it displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFormModel {
    state: LoginFormState,
    error: Option<AuthFormError>,
}

impl LoginFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoginFormState {
        &self.state
    }

    pub fn error(&self) -> Option<AuthFormError> {
        self.error
    }

    /// Update one input. Any edit clears the current error.
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        self.state.set(field, value);
        self.error = None;
    }

    /// Validate the current values, keeping the error for display on failure
    pub fn submit(&mut self) -> Result<&LoginFormState, AuthFormError> {
        match self.state.validate() {
            Ok(()) => {
                self.error = None;
                Ok(&self.state)
            }
            Err(error) => {
                self.error = Some(error);
                Err(error)
            }
        }
    }
}
