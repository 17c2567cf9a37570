//! Character variety section - checks for numbers, uppercase, lowercase, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionOutcome;

/// Characters counted as special.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-_=+[]{}|;:',.<>?/~`";

/// Awards one point per character class present.
///
/// Classes are ASCII only. Reasons are emitted in the order
/// numbers, uppercase, lowercase, special.
pub fn character_variety_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_special = pwd.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

    let mut outcome = SectionOutcome::default();
    let classes = [
        (has_digit, "numbers"),
        (has_upper, "uppercase letters"),
        (has_lower, "lowercase letters"),
        (has_special, "special characters"),
    ];

    for (present, name) in classes {
        if present {
            outcome.award(1);
        } else {
            outcome.reason(format!("Password does not contain any {}.", name));
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(pwd: &str) -> SectionOutcome {
        character_variety_section(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_variety_section_missing_uppercase() {
        let outcome = score("lowercase123!");
        assert_eq!(outcome.points, 3);
        assert_eq!(
            outcome.reasons,
            vec!["Password does not contain any uppercase letters.".to_string()]
        );
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let outcome = score("UPPERCASE123!");
        assert_eq!(outcome.points, 3);
        assert_eq!(
            outcome.reasons,
            vec!["Password does not contain any lowercase letters.".to_string()]
        );
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let outcome = score("NoNumbers!");
        assert_eq!(outcome.points, 3);
        assert_eq!(
            outcome.reasons,
            vec!["Password does not contain any numbers.".to_string()]
        );
    }

    #[test]
    fn test_variety_section_missing_special() {
        let outcome = score("NoSpecial123");
        assert_eq!(outcome.points, 3);
        assert_eq!(
            outcome.reasons,
            vec!["Password does not contain any special characters.".to_string()]
        );
    }

    #[test]
    fn test_variety_section_all_categories() {
        let outcome = score("HasAll123!@#");
        assert_eq!(outcome.points, 4);
        assert!(outcome.reasons.is_empty());
    }

    #[test]
    fn test_variety_section_reason_order() {
        let outcome = score("");
        assert_eq!(outcome.points, 0);
        assert_eq!(
            outcome.reasons,
            vec![
                "Password does not contain any numbers.".to_string(),
                "Password does not contain any uppercase letters.".to_string(),
                "Password does not contain any lowercase letters.".to_string(),
                "Password does not contain any special characters.".to_string(),
            ]
        );
    }

    #[test]
    fn test_variety_section_every_special_character() {
        for c in SPECIAL_CHARACTERS.chars() {
            let outcome = score(&c.to_string());
            assert_eq!(outcome.points, 1, "{:?} should count as special", c);
        }
    }

    #[test]
    fn test_variety_section_space_and_unicode_are_not_special() {
        let outcome = score("a b\"é");
        assert_eq!(outcome.points, 1);
        assert!(outcome.reasons.iter().any(|r| r.contains("special")));
    }
}
