//! Error types for the boundary helpers.
//!
//! The evaluator itself never fails; these only cover input that cannot be
//! turned into a password string or a strength label.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is not a valid UTF-8 string: {0}")]
    InvalidArgument(#[from] std::str::Utf8Error),
    #[error("Unknown strength level: {0:?}")]
    UnknownStrengthLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let bytes = vec![0x61, 0xff];
        let err = std::str::from_utf8(&bytes).unwrap_err();
        let msg = PasswordError::from(err).to_string();
        assert!(msg.starts_with("Password is not a valid UTF-8 string"));
    }

    #[test]
    fn test_unknown_level_message() {
        let err = PasswordError::UnknownStrengthLevel("medium".to_string());
        assert_eq!(err.to_string(), "Unknown strength level: \"medium\"");
    }
}
