//! Password strength rating library
//!
//! This library rates passwords with a small additive heuristic and checks
//! them against the Have I Been Pwned "Pwned Passwords" corpus using the
//! k-anonymity range API: only the first 5 hex characters of the SHA-1
//! digest are sent over the network.
//!
//! # Features
//!
//! - `async` (default): Enables cancellation token support and channel delivery
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-rate` command line front end
//!
//! # Environment Variables
//!
//! Read only by [`LookupConfig::from_env`]:
//!
//! - `PWD_HIBP_API_URL`: Custom range endpoint
//!   (default: `https://api.pwnedpasswords.com/range/`)
//! - `PWD_HIBP_TIMEOUT_SECS`: Request timeout in seconds (default: 10)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_rating::{check_password, BreachClient};
//! use secrecy::SecretString;
//!
//! # async fn run() -> Result<(), pwd_rating::LookupError> {
//! let client = BreachClient::new()?;
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let report = check_password(&client, &password).await?;
//!
//! println!("Score: {}", report.score.value());
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

// Internal modules
mod breach;
mod config;
mod evaluator;
mod sections;
mod types;

// Public API
pub use breach::{
    hash_password, parse_range_response, BreachClient, BreachLookup, HashParts, LookupError,
    PREFIX_LEN,
};
pub use config::{ConfigError, LookupConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use evaluator::{
    check_password, check_password_or_unknown, evaluate_password_strength,
    evaluate_without_breach_data,
};
pub use sections::{BREACH_UNKNOWN_REASON, SPECIAL_CHARACTERS};
pub use types::{
    BreachResult, BreachStatus, PasswordScore, PasswordStrength, StrengthReport, MAX_SCORE,
};

#[cfg(feature = "async")]
pub use evaluator::check_password_tx;
