//! Registration form model.
//!
//! Six required inputs; the password must be typed twice. Checks run in a
//! fixed order and stop at the first failure:
//! 1. every field filled
//! 2. password and confirmation equal

use serde::Serialize;

use super::{AuthFormError, Role};

/// Inputs of the registration form, named after their DOM `name` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegisterField {
    Name,
    Email,
    Mobile,
    Role,
    Password,
    ConfirmPassword,
}

impl RegisterField {
    pub const ALL: [RegisterField; 6] = [
        RegisterField::Name,
        RegisterField::Email,
        RegisterField::Mobile,
        RegisterField::Role,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RegisterField::Name => "name",
            RegisterField::Email => "email",
            RegisterField::Mobile => "mobile",
            RegisterField::Role => "role",
            RegisterField::Password => "password",
            RegisterField::ConfirmPassword => "confirm_password",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            RegisterField::Name => "Full Name",
            RegisterField::Email => "Email Address",
            RegisterField::Mobile => "Mobile Number",
            RegisterField::Role => "Register As",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Confirm Password",
        }
    }

    /// Label used as placeholder by the compact (label-less) layout
    pub fn short_label(self) -> &'static str {
        match self {
            RegisterField::Name => "Full Name",
            RegisterField::Email => "Email",
            RegisterField::Mobile => "Mobile",
            RegisterField::Role => "Role",
            RegisterField::Password => "Password",
            RegisterField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            RegisterField::Name => "Enter full name",
            RegisterField::Email => "Enter email",
            RegisterField::Mobile => "Enter mobile number",
            RegisterField::Role => "Select Role",
            RegisterField::Password => "Enter password",
            RegisterField::ConfirmPassword => "Confirm password",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            RegisterField::Name | RegisterField::Role => "text",
            RegisterField::Email => "email",
            RegisterField::Mobile => "tel",
            RegisterField::Password | RegisterField::ConfirmPassword => "password",
        }
    }
}

/// Current values of the registration inputs.
///
/// `role` holds the raw select value, so the empty "Select Role" option is
/// representable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFormState {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

/// Submission log payload. Passwords are left out.
#[derive(Serialize)]
struct RegisterDiagnostic<'a> {
    name: &'a str,
    email: &'a str,
    mobile: &'a str,
    role: Option<Role>,
}

impl RegisterFormState {
    pub fn get(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::Name => &self.name,
            RegisterField::Email => &self.email,
            RegisterField::Mobile => &self.mobile,
            RegisterField::Role => &self.role,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: RegisterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegisterField::Name => self.name = value,
            RegisterField::Email => self.email = value,
            RegisterField::Mobile => self.mobile = value,
            RegisterField::Role => self.role = value,
            RegisterField::Password => self.password = value,
            RegisterField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Selected role, if the select holds one of the known values
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn validate(&self) -> Result<(), AuthFormError> {
        if RegisterField::ALL
            .into_iter()
            .any(|field| self.get(field).is_empty())
        {
            return Err(AuthFormError::RegisterIncomplete);
        }

        if self.password != self.confirm_password {
            return Err(AuthFormError::PasswordMismatch);
        }

        Ok(())
    }

    /// JSON summary for the submission log line; an unknown role is `null`
    pub fn diagnostic(&self) -> String {
        let payload = RegisterDiagnostic {
            name: &self.name,
            email: &self.email,
            mobile: &self.mobile,
            role: self.role(),
        };
        serde_json::to_string(&payload).unwrap_or_default()
    }
}

/// Registration form state plus the single error message it displays
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFormModel {
    state: RegisterFormState,
    error: Option<AuthFormError>,
}

impl RegisterFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RegisterFormState {
        &self.state
    }

    pub fn error(&self) -> Option<AuthFormError> {
        self.error
    }

    /// Update one input. Any edit clears the current error.
    pub fn set_field(&mut self, field: RegisterField, value: impl Into<String>) {
        self.state.set(field, value);
        self.error = None;
    }

    pub fn submit(&mut self) -> Result<&RegisterFormState, AuthFormError> {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> RegisterFormModel {
        let mut form = RegisterFormModel::new();
        form.set_field(RegisterField::Name, "Asha Rao");
        form.set_field(RegisterField::Email, "asha@example.com");
        form.set_field(RegisterField::Mobile, "9876543210");
        form.set_field(RegisterField::Role, "advocate");
        form.set_field(RegisterField::Password, "a1");
        form.set_field(RegisterField::ConfirmPassword, "a1");
        form
    }

    #[test]
    fn test_complete_form_is_accepted() {
        let mut form = complete_form();

        let state = form.submit().expect("complete form should be accepted");
        assert_eq!(state.role(), Some(Role::Advocate));
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_each_missing_field_is_rejected() {
        for field in RegisterField::ALL {
            let mut form = complete_form();
            form.set_field(field, "");

            assert_eq!(
                form.submit(),
                Err(AuthFormError::RegisterIncomplete),
                "missing {} should be rejected",
                field.name()
            );
            assert_eq!(
                form.error().map(|e| e.to_string()).as_deref(),
                Some("All fields are required")
            );
        }
    }

    #[test]
    fn test_password_mismatch() {
        let mut form = complete_form();
        form.set_field(RegisterField::ConfirmPassword, "a2");

        assert_eq!(form.submit(), Err(AuthFormError::PasswordMismatch));
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_missing_field_reported_before_mismatch() {
        let mut form = complete_form();
        form.set_field(RegisterField::Password, "a1");
        form.set_field(RegisterField::ConfirmPassword, "a2");
        form.set_field(RegisterField::Mobile, "");

        assert_eq!(form.submit(), Err(AuthFormError::RegisterIncomplete));
    }

    #[test]
    fn test_password_comparison_is_exact() {
        let mut form = complete_form();
        form.set_field(RegisterField::Password, "Secret");
        form.set_field(RegisterField::ConfirmPassword, "secret");

        assert_eq!(form.submit(), Err(AuthFormError::PasswordMismatch));
    }

    #[test]
    fn test_edit_clears_error() {
        let mut form = complete_form();
        form.set_field(RegisterField::ConfirmPassword, "a2");
        let _ = form.submit();
        assert_eq!(form.error(), Some(AuthFormError::PasswordMismatch));

        form.set_field(RegisterField::Name, "Asha R.");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_correcting_mismatch_then_submitting_succeeds() {
        let mut form = complete_form();
        form.set_field(RegisterField::ConfirmPassword, "a2");
        assert!(form.submit().is_err());

        form.set_field(RegisterField::ConfirmPassword, "a1");
        assert!(form.submit().is_ok());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_role_is_not_checked_against_known_values() {
        let mut form = complete_form();
        form.set_field(RegisterField::Role, "judge");

        let state = form.submit().expect("presence is the only role check");
        assert_eq!(state.role(), None);
    }

    #[test]
    fn test_field_names() {
        let names: Vec<_> = RegisterField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(
            names,
            ["name", "email", "mobile", "role", "password", "confirm_password"]
        );

        assert_eq!(
            RegisterField::from_name("confirm_password"),
            Some(RegisterField::ConfirmPassword)
        );
        assert_eq!(RegisterField::from_name("confirmPassword"), None);
        assert_eq!(RegisterField::from_name(""), None);
    }

    #[test]
    fn test_diagnostic_omits_passwords() {
        let form = complete_form();
        let value: serde_json::Value =
            serde_json::from_str(&form.state().diagnostic()).unwrap();

        assert_eq!(value["name"], "Asha Rao");
        assert_eq!(value["role"], "advocate");
        assert!(value.get("password").is_none());
        assert!(value.get("confirm_password").is_none());
    }

    #[test]
    fn test_diagnostic_carries_parsed_role() {
        let mut form = complete_form();
        form.set_field(RegisterField::Role, "client");
        let value: serde_json::Value =
            serde_json::from_str(&form.state().diagnostic()).unwrap();
        assert_eq!(value["role"], "client");

        form.set_field(RegisterField::Role, "judge");
        let value: serde_json::Value =
            serde_json::from_str(&form.state().diagnostic()).unwrap();
        assert!(value["role"].is_null());
    }
}
