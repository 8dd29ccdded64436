/// Which half of the sliding auth card is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthPanel {
    #[default]
    Login,
    Register,
}

impl AuthPanel {
    pub fn is_register_active(self) -> bool {
        self == AuthPanel::Register
    }

    pub fn toggle(self) -> Self {
        match self {
            AuthPanel::Login => AuthPanel::Register,
            AuthPanel::Register => AuthPanel::Login,
        }
    }

    /// Standalone page showing this form on its own
    pub fn route(self) -> &'static str {
        match self {
            AuthPanel::Login => "/login",
            AuthPanel::Register => "/register",
        }
    }

    /// Class list of the slider card; `active` slides the register half in
    pub fn card_class(self) -> &'static str {
        match self {
            AuthPanel::Login => "auth-slider-card",
            AuthPanel::Register => "auth-slider-card active",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_login() {
        let panel = AuthPanel::default();

        assert_eq!(panel, AuthPanel::Login);
        assert!(!panel.is_register_active());
    }

    #[test]
    fn test_toggle_alternates() {
        let panel = AuthPanel::Login.toggle();
        assert!(panel.is_register_active());

        assert_eq!(panel.toggle(), AuthPanel::Login);
    }

    #[test]
    fn test_active_class_only_for_register() {
        assert!(!AuthPanel::Login.card_class().contains("active"));
        assert!(
            AuthPanel::Register
                .card_class()
                .split_whitespace()
                .any(|class| class == "active")
        );
    }

    #[test]
    fn test_routes_point_at_standalone_pages() {
        assert_eq!(AuthPanel::Login.route(), "/login");
        assert_eq!(AuthPanel::Register.route(), "/register");
    }
}
