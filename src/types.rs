//! Score, rating, breach and report types.

use std::fmt;

/// Highest score a password can reach.
pub const MAX_SCORE: u8 = 5;

/// Password score, always within `0..=MAX_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Builds a score from the raw heuristic total, clamping it into range.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, MAX_SCORE as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Human readable rating derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0 | 1 => PasswordStrength::VeryWeak,
            2 => PasswordStrength::Weak,
            3 => PasswordStrength::Medium,
            4 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single breach lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreachResult {
    pub compromised: bool,
    pub occurrence_count: u64,
}

impl BreachResult {
    /// The password was not found in the breach corpus.
    pub fn clean() -> Self {
        Self {
            compromised: false,
            occurrence_count: 0,
        }
    }

    /// The password was seen `count` times.
    pub fn compromised(count: u64) -> Self {
        Self {
            compromised: true,
            occurrence_count: count,
        }
    }
}

/// Breach information a report was built from.
///
/// `Unavailable` keeps a failed lookup apart from a clean one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    Checked(BreachResult),
    Unavailable,
}

impl BreachStatus {
    pub fn is_compromised(&self) -> bool {
        matches!(self, BreachStatus::Checked(r) if r.compromised)
    }
}

/// Result of a full password evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: PasswordScore,
    pub reasons: Vec<String>,
    pub breach: BreachStatus,
}

impl StrengthReport {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }

    /// `true` when no deficiency was found.
    pub fn is_acceptable(&self) -> bool {
        self.reasons.is_empty()
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Your password is: {}.", self.strength())?;
        if !self.reasons.is_empty() {
            write!(f, "\n\nIssues:\n{}", self.reasons.join("\n"))?;
        }
        Ok(())
    }
}
