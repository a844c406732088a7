//! Special character section.

use super::SectionResult;
use crate::policy::is_special_character;
use crate::types::Criterion;

pub fn special_character_section(password: &str) -> SectionResult {
    if password.chars().any(is_special_character) {
        return None;
    }
    Some(Criterion::SpecialCharacter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_section_missing() {
        assert_eq!(
            special_character_section("abcd1234"),
            Some(Criterion::SpecialCharacter)
        );
    }

    #[test]
    fn test_special_section_other_punctuation_does_not_count() {
        assert_eq!(
            special_character_section("abcd_1234+=."),
            Some(Criterion::SpecialCharacter)
        );
    }

    #[test]
    fn test_special_section_present() {
        assert_eq!(special_character_section("abcd123-"), None);
        assert_eq!(special_character_section("^"), None);
    }
}
