//! Evaluation result types.

use std::fmt;
use std::str::FromStr;

use crate::error::PasswordError;
use crate::policy::MIN_LENGTH;

/// The two possible classifications of a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLevel {
    Weak,
    Strong,
}

impl StrengthLevel {
    /// Lowercase label for the level.
    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLevel {
    type Err = PasswordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("weak") {
            Ok(StrengthLevel::Weak)
        } else if s.eq_ignore_ascii_case("strong") {
            Ok(StrengthLevel::Strong)
        } else {
            Err(PasswordError::UnknownStrengthLevel(s.to_string()))
        }
    }
}

/// A policy check a password can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// Fewer than [`MIN_LENGTH`] characters.
    Length,
    /// Missing an ASCII letter or an ASCII digit.
    LetterAndDigit,
    /// None of the characters in [`crate::SPECIAL_CHARACTERS`].
    SpecialCharacter,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Length => {
                write!(f, "Password must be at least {} characters", MIN_LENGTH)
            }
            Criterion::LetterAndDigit => {
                f.write_str("Password must contain at least one letter and one digit")
            }
            Criterion::SpecialCharacter => {
                f.write_str("Password must contain one of: # ? ! @ $ % ^ & * -")
            }
        }
    }
}

/// Outcome of a detailed evaluation.
///
/// Sections short-circuit, so at most the first failing criterion is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub failed: Option<Criterion>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> StrengthLevel {
        match self.failed {
            None => StrengthLevel::Strong,
            Some(_) => StrengthLevel::Weak,
        }
    }

    /// Human-readable reason for a weak result.
    pub fn reason(&self) -> Option<String> {
        self.failed.map(|c| c.to_string())
    }
}
