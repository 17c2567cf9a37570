//! Breach lookup client
//!
//! Queries the Pwned Passwords range API with the k-anonymity model: the
//! password is hashed with SHA-1, only the first 5 hex characters of the
//! digest leave the process, and the remaining suffix is matched locally
//! against the returned `SUFFIX:COUNT` records.

use std::fmt;
use std::future::Future;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::LookupConfig;
use crate::types::BreachResult;

/// Number of hex characters sent to the service.
pub const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Breach lookup request failed for prefix {prefix}: {source}")]
    Request {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Breach lookup timed out for prefix {prefix}")]
    Timeout { prefix: String },
    #[error("Breach service responded with HTTP {status} for prefix {prefix}")]
    Status { prefix: String, status: u16 },
    #[error("Breach lookup cancelled")]
    Cancelled,
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl LookupError {
    fn from_reqwest(prefix: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            LookupError::Timeout {
                prefix: prefix.to_string(),
            }
        } else {
            LookupError::Request {
                prefix: prefix.to_string(),
                source,
            }
        }
    }
}

/// Uppercase hex SHA-1 digest split at [`PREFIX_LEN`].
#[derive(Clone, PartialEq, Eq)]
pub struct HashParts {
    pub prefix: String,
    pub suffix: String,
}

impl HashParts {
    pub fn full(&self) -> String {
        format!("{}{}", self.prefix, self.suffix)
    }
}

// The suffix stays out of debug output; it narrows the prefix bucket to one hash.
impl fmt::Debug for HashParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashParts")
            .field("prefix", &self.prefix)
            .field("suffix", &"[REDACTED]")
            .finish()
    }
}

/// Hashes the password and splits the digest into prefix and suffix.
pub fn hash_password(password: &SecretString) -> HashParts {
    let digest = Sha1::digest(password.expose_secret().as_bytes());
    let mut prefix = format!("{:X}", digest);
    let suffix = prefix.split_off(PREFIX_LEN);
    HashParts { prefix, suffix }
}

/// Scans a range response body for `suffix`.
///
/// Malformed lines are skipped. A matching record with a count of zero is a
/// padding record and does not count as a breach.
pub fn parse_range_response(body: &str, suffix: &str) -> BreachResult {
    for line in body.lines() {
        let Some((candidate, count)) = line.trim().split_once(':') else {
            continue;
        };
        if !candidate.trim().eq_ignore_ascii_case(suffix) {
            continue;
        }
        match count.trim().parse::<u64>() {
            Ok(0) | Err(_) => continue,
            Ok(count) => return BreachResult::compromised(count),
        }
    }
    BreachResult::clean()
}

/// Source of breach information for a password.
pub trait BreachLookup {
    fn lookup(
        &self,
        password: &SecretString,
    ) -> impl Future<Output = Result<BreachResult, LookupError>> + Send;
}

/// HTTP client for the Pwned Passwords range API.
///
/// Every lookup issues exactly one request and never retries. Dropping the
/// returned future aborts the request.
#[derive(Debug, Clone)]
pub struct BreachClient {
    http: reqwest::Client,
    config: LookupConfig,
}

impl BreachClient {
    pub fn new() -> Result<Self, LookupError> {
        Self::with_config(LookupConfig::default())
    }

    pub fn with_config(config: LookupConfig) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(LookupError::Client)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Fetches the range body for `prefix`, requiring HTTP 200.
    async fn fetch_range(&self, prefix: &str) -> Result<String, LookupError> {
        let url = self.config.range_url(prefix);

        #[cfg(feature = "tracing")]
        tracing::debug!(prefix, "querying breach range endpoint");

        let mut request = self.http.get(&url);
        if self.config.add_padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(prefix, e))?;

        if response.status() != StatusCode::OK {
            #[cfg(feature = "tracing")]
            tracing::warn!(prefix, status = %response.status(), "breach range request rejected");
            return Err(LookupError::Status {
                prefix: prefix.to_string(),
                status: response.status().as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| LookupError::from_reqwest(prefix, e))
    }

    /// Same as [`BreachLookup::lookup`], but gives up as soon as `token` is cancelled.
    #[cfg(feature = "async")]
    pub async fn lookup_cancellable(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> Result<BreachResult, LookupError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(LookupError::Cancelled),
            result = BreachLookup::lookup(self, password) => result,
        }
    }
}

impl BreachLookup for BreachClient {
    async fn lookup(&self, password: &SecretString) -> Result<BreachResult, LookupError> {
        let parts = hash_password(password);
        let body = self.fetch_range(&parts.prefix).await?;
        let result = parse_range_response(&body, &parts.suffix);

        #[cfg(feature = "tracing")]
        {
            if result.compromised {
                tracing::info!(
                    prefix = %parts.prefix,
                    occurrences = result.occurrence_count,
                    "password has appeared in a known breach"
                );
            } else {
                tracing::info!(prefix = %parts.prefix, "password has not appeared in a known breach");
            }
        }

        Ok(result)
    }
}
