//! Breach section - reports known breach exposure.

use crate::types::BreachStatus;
use super::SectionOutcome;

pub const BREACH_UNKNOWN_REASON: &str =
    "Breach status unknown: the breach database could not be reached.";

/// Explains the breach status of the password.
///
/// Awards no points. The score override for breached passwords is applied
/// by the evaluator after all sections ran.
pub fn breach_section(breach: &BreachStatus) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();
    match breach {
        BreachStatus::Checked(result) if result.compromised => {
            outcome.reason(format!(
                "This password has been compromised and seen {} times in data breaches.",
                result.occurrence_count
            ));
        }
        BreachStatus::Checked(_) => {}
        BreachStatus::Unavailable => outcome.reason(BREACH_UNKNOWN_REASON),
    }
    outcome
}
