//! Length section - checks password minimum length.

use super::SectionResult;
use crate::policy::MIN_LENGTH;
use crate::types::Criterion;

/// Checks if the password meets minimum length requirements.
///
/// Length is the number of Unicode scalar values, not bytes.
pub fn length_section(password: &str) -> SectionResult {
    if password.chars().count() < MIN_LENGTH {
        return Some(Criterion::Length);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(length_section("Short1!"), Some(Criterion::Length));
    }

    #[test]
    fn test_length_section_empty() {
        assert_eq!(length_section(""), Some(Criterion::Length));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(length_section("12345678"), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 chars, 10 bytes
        assert_eq!(length_section("ab1!ééé"), Some(Criterion::Length));
        assert_eq!(length_section("ab1!éééé"), None);
    }
}
