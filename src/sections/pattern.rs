//! Pattern analysis section - penalizes repetitive and sequential patterns.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

const DIGIT_RUNS: [&str; 8] = [
    "0123", "1234", "2345", "3456", "4567", "5678", "6789", "7890",
];

/// Length of the alphabetic runs that are penalized.
///
/// Only 3-letter runs are matched; a longer run costs the same single point.
const LETTER_RUN_LEN: usize = 3;

/// Deducts one point for each kind of weak pattern found.
///
/// Patterns never produce reasons; they only affect the score.
pub fn pattern_analysis_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let chars: Vec<char> = pwd.chars().collect();
    let mut outcome = SectionOutcome::default();

    if has_repeated_run(&chars) {
        outcome.award(-1);
    }
    if DIGIT_RUNS.iter().any(|run| pwd.contains(run)) {
        outcome.award(-1);
    }
    if has_letter_run(&pwd.to_lowercase()) {
        outcome.award(-1);
    }
    outcome
}

/// Same character three or more times in a row (e.g., "aaa").
fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// Ascending alphabetic run from "abc" through "xyz".
fn has_letter_run(lower: &str) -> bool {
    let chars: Vec<char> = lower.chars().collect();
    chars.windows(LETTER_RUN_LEN).any(|w| {
        w.iter().all(|c| c.is_ascii_lowercase())
            && w.windows(2).all(|p| p[1] as u32 == p[0] as u32 + 1)
    })
}
