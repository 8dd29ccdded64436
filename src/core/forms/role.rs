use serde::Serialize;

/// Account type chosen at registration.
///
/// `Display` gives the value submitted by the role select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[display("client")]
    Client,
    #[display("advocate")]
    Advocate,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Client, Role::Advocate];

    pub fn label(self) -> &'static str {
        match self {
            Role::Client => "Client",
            Role::Advocate => "Advocate",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.to_string() == value)
    }

    /// `(value, label)` pairs for the role select, headed by the empty
    /// "Select Role" placeholder option
    pub fn select_options() -> Vec<(String, String)> {
        std::iter::once((String::new(), "Select Role".to_string()))
            .chain(
                Self::ALL
                    .into_iter()
                    .map(|role| (role.to_string(), role.label().to_string())),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Role::parse("client"), Some(Role::Client));
        assert_eq!(Role::parse("advocate"), Some(Role::Advocate));
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Client"), None);
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_select_values_parse_back() {
        for (value, label) in Role::select_options().into_iter().skip(1) {
            let role = Role::parse(&value).expect("every select value is a role");
            assert_eq!(role.label(), label);
        }
    }

    #[test]
    fn test_serializes_like_select_value() {
        for role in Role::ALL {
            assert_eq!(
                serde_json::to_string(&role).unwrap(),
                format!("\"{role}\"")
            );
        }
    }

    #[test]
    fn test_select_options() {
        let options = Role::select_options();

        assert_eq!(options.len(), 3);
        assert_eq!(options[0], (String::new(), "Select Role".to_string()));
        assert_eq!(options[1], ("client".to_string(), "Client".to_string()));
        assert_eq!(options[2], ("advocate".to_string(), "Advocate".to_string()));
    }
}
