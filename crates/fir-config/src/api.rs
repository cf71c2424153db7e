//! REST API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Backend used by the console when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default connect timeout in seconds.
const fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("fir-desk/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Server origin without the `/api` suffix (e.g., `https://fir.example.org`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// TCP connect timeout. Ordinary requests carry no overall deadline.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Check if a base URL is present.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Base URL with surrounding whitespace and trailing slashes removed.
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim().trim_end_matches('/').to_string()
    }

    /// Reject base URLs that cannot address an HTTP server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the URL is empty and
    /// [`ConfigError::InvalidValue`] when the scheme is not `http` or `https`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".to_string(),
            });
        }
        let url = self.normalized_base_url();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("expected an http(s) URL, got '{url}'"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.connect_timeout_secs, 10);
        assert!(config.user_agent.starts_with("fir-desk/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig {
            base_url: " https://fir.example.org// ".into(),
            ..Default::default()
        };
        assert_eq!(config.normalized_base_url(), "https://fir.example.org");
    }

    #[test]
    fn rejects_empty_and_non_http_urls() {
        let empty = ApiConfig {
            base_url: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(
            empty.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));

        let ftp = ApiConfig {
            base_url: "ftp://fir.example.org".into(),
            ..Default::default()
        };
        assert!(matches!(
            ftp.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
