//! Length section - rewards longer passwords.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const MIN_LENGTH: usize = 8;

/// Each threshold reached is worth one point; they stack.
const LENGTH_THRESHOLDS: [usize; 3] = [MIN_LENGTH, 12, 16];

/// Scores the password length, counted in characters.
///
/// # Returns
/// Up to 3 points, plus a reason when shorter than the minimum.
pub fn length_section(password: &SecretString) -> SectionOutcome {
    let len = password.expose_secret().chars().count();
    let mut outcome = SectionOutcome::default();

    let reached = LENGTH_THRESHOLDS.iter().filter(|&&t| len >= t).count();
    outcome.award(reached as i64);

    if len < MIN_LENGTH {
        outcome.reason(format!(
            "Password is too short (less than {} characters).",
            MIN_LENGTH
        ));
    }
    outcome
}
