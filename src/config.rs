//! Breach lookup configuration.

use std::time::Duration;
use thiserror::Error;

/// Range endpoint of the Pwned Passwords API. The hash prefix is appended.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com/range/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const API_URL_ENV: &str = "PWD_HIBP_API_URL";
pub const TIMEOUT_ENV: &str = "PWD_HIBP_TIMEOUT_SECS";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PWD_HIBP_TIMEOUT_SECS value: {0}")]
    InvalidTimeout(String),
}

/// Settings for [`crate::BreachClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Base URL the 5-character prefix is appended to.
    pub api_url: String,
    /// Bound on the whole request, connect to last body byte.
    pub timeout: Duration,
    /// Ask the service to pad responses with zero-count records.
    pub add_padding: bool,
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            add_padding: true,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl LookupConfig {
    /// Returns the default configuration with environment overrides applied.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_HIBP_API_URL`: range endpoint base URL
    /// - `PWD_HIBP_TIMEOUT_SECS`: request timeout in whole seconds
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_url = url;
        }

        if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    /// Full request URL for a hash prefix.
    pub(crate) fn range_url(&self, prefix: &str) -> String {
        if self.api_url.ends_with('/') {
            format!("{}{}", self.api_url, prefix)
        } else {
            format!("{}/{}", self.api_url, prefix)
        }
    }
}
