//! Transiter client configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors raised while validating configuration or building the client
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Configuration for the Transiter client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransiterConfig {
    /// Base URL of the Transiter instance; a path prefix is kept
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Overall request deadline in seconds (none by default)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Connection deadline in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: Option<u64>,

    /// Redirects to follow; 0 surfaces every 3xx as an error
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Log request and response headers at debug level
    #[serde(default)]
    pub log_headers: bool,
}

fn default_base_url() -> String {
    "https://demo.transiter.dev".to_string()
}

#[allow(clippy::unnecessary_wraps)]
const fn default_connect_timeout_secs() -> Option<u64> {
    Some(10)
}

const fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    concat!("trainsnow/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TransiterConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            connect_timeout_secs: default_connect_timeout_secs(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
            log_headers: false,
        }
    }
}

impl TransiterConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: Some(5),
            connect_timeout_secs: Some(2),
            max_redirects: 0,
            ..Default::default()
        }
    }

    /// Parse the base URL
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if it is not an absolute http(s) URL.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("base_url `{}`: {e}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid(format!(
                "base_url `{}` must use http or https",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_base_url()?;

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::Invalid("timeout_secs must be greater than 0".to_string()));
        }

        if self.connect_timeout_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "connect_timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::Invalid("user_agent must not be empty".to_string()));
        }

        Ok(())
    }
}
