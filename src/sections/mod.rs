//! Password evaluation sections
//!
//! Each section scores one aspect of the password and explains what is missing.

mod breach;
mod length;
mod pattern;
mod variety;

pub use breach::{breach_section, BREACH_UNKNOWN_REASON};
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::{character_variety_section, SPECIAL_CHARACTERS};

/// Result of a single section.
///
/// `points` is added to the raw score; `reasons` are user facing and kept in
/// the order the section produced them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionOutcome {
    pub points: i64,
    pub reasons: Vec<String>,
}

impl SectionOutcome {
    pub(crate) fn award(&mut self, points: i64) {
        self.points += points;
    }

    pub(crate) fn reason(&mut self, reason: impl Into<String>) {
        self.reasons.push(reason.into());
    }
}
