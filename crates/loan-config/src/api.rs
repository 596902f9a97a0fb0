//! Loan timeline service connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Local development address of the timeline service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

fn default_base_url() -> String {
    String::from(DEFAULT_BASE_URL)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL the `/timeline` and `/insights` routes hang off.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. `0` disables the timeout.
    #[serde(default)]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
        }
    }
}

impl ApiConfig {
    /// Base URL without trailing slashes, ready for path joining.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Whether the base URL is still the built-in default.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.endpoint() == DEFAULT_BASE_URL
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the base URL is not an
    /// absolute `http(s)` URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.endpoint();
        let rest = endpoint
            .strip_prefix("http://")
            .or_else(|| endpoint.strip_prefix("https://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidValue {
                field: String::from("api.base_url"),
                reason: format!("expected an http:// or https:// URL, got '{}'", self.base_url),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8001");
        assert!(config.is_default());
        assert!(config.timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn endpoint_strips_trailing_slashes() {
        let config = ApiConfig {
            base_url: "https://loans.internal/api//".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), "https://loans.internal/api");
        assert!(!config.is_default());
    }

    #[test]
    fn timeout_when_set() {
        let config = ApiConfig {
            timeout_secs: 15,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn rejects_non_http_urls() {
        for bad in ["localhost:8001", "ftp://loans", "http://", ""] {
            let config = ApiConfig {
                base_url: bad.into(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{bad} should be rejected");
        }
    }
}
