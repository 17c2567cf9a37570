//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::breach::{BreachLookup, LookupError};
use crate::sections::{
    breach_section, character_variety_section, length_section, pattern_analysis_section,
    SectionOutcome,
};
use crate::types::{BreachResult, BreachStatus, PasswordScore, StrengthReport};

/// Evaluates password strength against an already known breach result.
///
/// Pure and deterministic. A compromised password always scores 0.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `breach` - Outcome of the breach lookup for the same password
pub fn evaluate_password_strength(password: &SecretString, breach: &BreachResult) -> StrengthReport {
    evaluate(password, BreachStatus::Checked(*breach))
}

/// Evaluates password strength when the breach lookup failed.
///
/// The report carries [`BreachStatus::Unavailable`] and an extra reason saying
/// so, which keeps it apart from a report for a clean password.
pub fn evaluate_without_breach_data(password: &SecretString) -> StrengthReport {
    evaluate(password, BreachStatus::Unavailable)
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn evaluate(password: &SecretString, breach: BreachStatus) -> StrengthReport {
    let mut reasons = Vec::new();
    let mut raw_score: i64 = 0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionOutcome); 3] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("pattern", pattern_analysis_section),
    ];

    for (section_name, section_fn) in sections {
        let outcome = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = section_name, points = outcome.points, "section evaluated");

        raw_score += outcome.points;
        reasons.extend(outcome.reasons);
    }

    reasons.extend(breach_section(&breach).reasons);

    // Breach exposure overrides every positive signal
    if breach.is_compromised() {
        raw_score = 0;
    }

    StrengthReport {
        score: PasswordScore::new(raw_score),
        reasons,
        breach,
    }
}

/// Looks the password up and evaluates it.
///
/// # Errors
/// Propagates the [`LookupError`]; a failed lookup never reads as "not compromised".
pub async fn check_password<L: BreachLookup>(
    lookup: &L,
    password: &SecretString,
) -> Result<StrengthReport, LookupError> {
    let breach = lookup.lookup(password).await?;
    Ok(evaluate_password_strength(password, &breach))
}

/// Like [`check_password`], but falls back to [`evaluate_without_breach_data`]
/// when the lookup fails.
///
/// # Errors
/// Only [`LookupError::Cancelled`] is returned; cancellation never becomes a report.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn check_password_or_unknown<L: BreachLookup>(
    lookup: &L,
    password: &SecretString,
) -> Result<StrengthReport, LookupError> {
    match check_password(lookup, password).await {
        Ok(report) => Ok(report),
        Err(LookupError::Cancelled) => Err(LookupError::Cancelled),
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Breach lookup failed, evaluating without breach data: {}", e);
            Ok(evaluate_without_breach_data(password))
        }
    }
}

/// Async version that sends the result via channel.
///
/// Cancelling `token` aborts the lookup and sends [`LookupError::Cancelled`].
#[cfg(feature = "async")]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn check_password_tx<L: BreachLookup>(
    lookup: &L,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<StrengthReport, LookupError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password check is about to start...");

    let result = tokio::select! {
        biased;
        _ = token.cancelled() => Err(LookupError::Cancelled),
        result = check_password(lookup, password) => result,
    };

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", e);
    }
}
