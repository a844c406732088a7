//! Fixed password policy constants.

/// Minimum number of characters, counted as Unicode scalar values.
pub const MIN_LENGTH: usize = 8;

/// Characters accepted by the special-character check.
pub const SPECIAL_CHARACTERS: [char; 10] = ['#', '?', '!', '@', '$', '%', '^', '&', '*', '-'];

/// Returns `true` if `c` belongs to [`SPECIAL_CHARACTERS`].
pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_set_members() {
        for c in "#?!@$%^&*-".chars() {
            assert!(is_special_character(c), "{c:?} should be special");
        }
    }

    #[test]
    fn test_special_set_excludes_other_punctuation() {
        for c in ['_', '+', '=', '.', ',', '~', '(', ')', ' ', '§', '€'] {
            assert!(!is_special_character(c), "{c:?} should not be special");
        }
    }
}
