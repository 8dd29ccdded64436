//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, asset directories and reload port are Leptos settings and
//! come from `[package.metadata.leptos]` instead.

/// Tracing filter used when neither `RUST_LOG` nor `LOG_FILTER` is set
pub const DEFAULT_LOG_FILTER: &str = "info,book_my_advocate=debug";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default tracing filter directive (`LOG_FILTER`); `RUST_LOG` wins when set
    pub log_filter: String,

    /// Whether responses are brotli/gzip compressed (`COMPRESSION`)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("LOG_FILTER").ok().as_deref(),
            std::env::var("COMPRESSION").ok().as_deref(),
        )
    }

    fn from_vars(log_filter: Option<&str>, compression: Option<&str>) -> Self {
        let defaults = Self::fallback();
        Self {
            log_filter: log_filter
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.log_filter),
            compression: compression
                .and_then(parse_flag)
                .unwrap_or(defaults.compression),
        }
    }

    fn fallback() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Parsing tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_vars(None, None);

        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.compression);
    }

    #[test]
    fn test_custom_log_filter() {
        let config = Config::from_vars(Some("warn,tower_http=debug"), None);

        assert_eq!(config.log_filter, "warn,tower_http=debug");
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = Config::from_vars(Some("   "), None);

        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_compression_flags() {
        for value in ["0", "false", "OFF", "no"] {
            assert!(!Config::from_vars(None, Some(value)).compression, "{value}");
        }
        for value in ["1", "true", "On", " yes "] {
            assert!(Config::from_vars(None, Some(value)).compression, "{value}");
        }
    }

    #[test]
    fn test_unparseable_compression_uses_default() {
        let config = Config::from_vars(None, Some("maybe"));

        assert!(config.compression);
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; only check that loading works
        let config = Config::from_env();

        assert!(!config.log_filter.is_empty());
    }
}
