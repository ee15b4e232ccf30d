//! Frontend configuration module
//!
//! Settings are baked in at compile time from environment variables so the
//! bundle needs no runtime configuration endpoint.

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_SUPPORT_EMAIL: &str = "support@edura.example";

/// Frontend configuration for the backend location and page metadata
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// REST API base, absolute or relative to the page origin
    pub api_base_url: String,
    /// Maximum log level routed to the browser console
    pub log_level: log::Level,
    /// Contact address shown on the contact page
    pub support_email: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("EDURA_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            log_level: parse_log_level(option_env!("EDURA_LOG_LEVEL")),
            support_email: option_env!("EDURA_SUPPORT_EMAIL")
                .unwrap_or(DEFAULT_SUPPORT_EMAIL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute API base URL.
    ///
    /// HTTP requests need an absolute URL, so a relative base such as `/api`
    /// is resolved against the origin of the current page.
    pub fn api_base_url(&self) -> String {
        if !self.api_base_url.starts_with('/') {
            return self.api_base_url.clone();
        }
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default();
        format!("{origin}{}", self.api_base_url)
    }
}

fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), log::Level::Info);
        assert_eq!(parse_log_level(Some("debug")), log::Level::Debug);
        assert_eq!(parse_log_level(Some("WARN")), log::Level::Warn);
        assert_eq!(parse_log_level(Some("verbose")), log::Level::Info);
    }

    #[test]
    fn test_absolute_base_url_is_used_verbatim() {
        let config = FrontendConfig {
            api_base_url: "https://api.edura.example/v1".to_string(),
            ..FrontendConfig::default()
        };
        assert_eq!(config.api_base_url(), "https://api.edura.example/v1");
    }

    #[test]
    fn test_frontend_config_debug() {
        let config = FrontendConfig::new();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("api_base_url"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_relative_base_url_resolves_against_origin() {
        let config = FrontendConfig {
            api_base_url: "/api".to_string(),
            ..FrontendConfig::default()
        };
        let resolved = config.api_base_url();
        assert!(resolved.starts_with("http"));
        assert!(resolved.ends_with("/api"));
    }
}
