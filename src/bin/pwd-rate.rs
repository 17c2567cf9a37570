//! pwd-rate - rate a password and check it against Have I Been Pwned.
//!
//! The password is read from a masked prompt, or from the first line of
//! standard input with `--stdin`. Exit status is 0 when the password raised
//! no issues, 1 when it did, and 2 when the breach lookup failed.

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use pwd_rating::{
    check_password, check_password_or_unknown, BreachClient, LookupConfig, LookupError,
    StrengthReport,
};
use secrecy::SecretString;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const EXIT_ACCEPTABLE: u8 = 0;
const EXIT_ISSUES: u8 = 1;
const EXIT_LOOKUP_FAILED: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "pwd-rate", version, about = "Rate password strength and check for breaches")]
struct Args {
    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    stdin: bool,

    /// Range endpoint the hash prefix is appended to
    #[arg(long)]
    api_url: Option<String>,

    /// Lookup timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Do not ask the service to pad responses
    #[arg(long)]
    no_padding: bool,

    /// Rate the password anyway when the breach lookup fails
    #[arg(long)]
    allow_unknown: bool,
}

fn setup_logger() -> Result<()> {
    // WARN unless RUST_LOG says otherwise
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;
    Ok(())
}

/// Reads one line and strips the trailing line ending only.
fn read_password_line<R: BufRead>(mut reader: R) -> Result<SecretString> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    Ok(SecretString::from(password))
}

fn read_password(from_stdin: bool) -> Result<SecretString> {
    if from_stdin {
        read_password_line(io::stdin().lock())
    } else {
        let password =
            rpassword::prompt_password("Enter your password: ").context("Failed to read password")?;
        Ok(SecretString::from(password))
    }
}

/// Environment configuration with command line flags applied on top.
fn build_config(args: &Args) -> Result<LookupConfig> {
    let mut config = LookupConfig::from_env()?;
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url.clone());
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    if args.no_padding {
        config = config.with_padding(false);
    }
    Ok(config)
}

fn exit_status(outcome: &Result<StrengthReport, LookupError>) -> u8 {
    match outcome {
        Ok(report) if report.is_acceptable() => EXIT_ACCEPTABLE,
        Ok(_) => EXIT_ISSUES,
        Err(_) => EXIT_LOOKUP_FAILED,
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    setup_logger()?;

    let client = BreachClient::with_config(build_config(&args)?)?;
    let password = read_password(args.stdin)?;

    let outcome = if args.allow_unknown {
        check_password_or_unknown(&client, &password).await
    } else {
        check_password(&client, &password).await
    };

    match &outcome {
        Ok(report) => println!("{}", report),
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(ExitCode::from(exit_status(&outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pwd_rating::{evaluate_password_strength, evaluate_without_breach_data, BreachResult};
    use secrecy::ExposeSecret;
    use serial_test::serial;
    use std::io::Cursor;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("pwd-rate").chain(args.iter().copied()))
    }

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_timeout_zero_rejected() {
        assert!(parse(&["--timeout", "0"]).is_err());
        assert!(parse(&["--timeout", "-1"]).is_err());
        assert_eq!(parse(&["--timeout", "1"]).unwrap().timeout, Some(1));
    }

    #[test]
    #[serial]
    fn test_build_config_flags_override_env() {
        set_env("PWD_HIBP_API_URL", "http://env.invalid/range/");
        set_env("PWD_HIBP_TIMEOUT_SECS", "30");

        let args = parse(&["--api-url", "http://flag.invalid/range/", "--timeout", "4", "--no-padding"]).unwrap();
        let config = build_config(&args).unwrap();
        assert_eq!(config.api_url, "http://flag.invalid/range/");
        assert_eq!(config.timeout, Duration::from_secs(4));
        assert!(!config.add_padding);

        remove_env("PWD_HIBP_API_URL");
        remove_env("PWD_HIBP_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_build_config_falls_back_to_env() {
        set_env("PWD_HIBP_API_URL", "http://env.invalid/range/");
        set_env("PWD_HIBP_TIMEOUT_SECS", "30");

        let config = build_config(&parse(&[]).unwrap()).unwrap();
        assert_eq!(config.api_url, "http://env.invalid/range/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.add_padding);

        remove_env("PWD_HIBP_API_URL");
        remove_env("PWD_HIBP_TIMEOUT_SECS");
    }

    #[test]
    #[serial]
    fn test_build_config_invalid_env_timeout() {
        remove_env("PWD_HIBP_API_URL");
        set_env("PWD_HIBP_TIMEOUT_SECS", "0");

        assert!(build_config(&parse(&[]).unwrap()).is_err());

        remove_env("PWD_HIBP_TIMEOUT_SECS");
    }

    #[test]
    fn test_read_password_line_strips_line_ending() {
        let pwd = read_password_line(Cursor::new("  Pass word1!\r\nsecond line\n")).unwrap();
        assert_eq!(pwd.expose_secret(), "  Pass word1!");

        let pwd = read_password_line(Cursor::new("no-newline")).unwrap();
        assert_eq!(pwd.expose_secret(), "no-newline");

        let pwd = read_password_line(Cursor::new("")).unwrap();
        assert_eq!(pwd.expose_secret(), "");
    }

    #[test]
    fn test_exit_status_acceptable() {
        let report = evaluate_password_strength(&secret("Password1!"), &BreachResult::clean());
        assert_eq!(exit_status(&Ok(report)), EXIT_ACCEPTABLE);
    }

    #[test]
    fn test_exit_status_issues() {
        let report = evaluate_password_strength(&secret("password"), &BreachResult::clean());
        assert_eq!(exit_status(&Ok(report)), EXIT_ISSUES);

        let report = evaluate_password_strength(&secret("Password1!"), &BreachResult::compromised(3));
        assert_eq!(exit_status(&Ok(report)), EXIT_ISSUES);

        // lookup failed but the caller chose to continue
        let report = evaluate_without_breach_data(&secret("Password1!"));
        assert_eq!(exit_status(&Ok(report)), EXIT_ISSUES);
    }

    #[test]
    fn test_exit_status_lookup_failed() {
        let outcome = Err(LookupError::Status {
            prefix: "5BAA6".to_string(),
            status: 503,
        });
        assert_eq!(exit_status(&outcome), EXIT_LOOKUP_FAILED);
        assert_eq!(exit_status(&Err(LookupError::Cancelled)), EXIT_LOOKUP_FAILED);
    }
}
