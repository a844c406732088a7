//! Character variety section - checks for an ASCII letter and an ASCII digit.

use super::SectionResult;
use crate::types::Criterion;

/// Checks that the password contains at least one letter of either case and
/// at least one digit.
pub fn character_variety_section(password: &str) -> SectionResult {
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if has_letter && has_digit {
        None
    } else {
        Some(Criterion::LetterAndDigit)
    }
}
