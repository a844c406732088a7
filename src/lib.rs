//! Password strength policy check
//!
//! Classifies a password as weak or strong against a fixed policy: at least
//! 8 characters, an ASCII letter, an ASCII digit and one of `#?!@$%^&*-`.
//! Length is counted in Unicode scalar values.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pw_strength::{evaluate, evaluate_password_strength, Criterion, StrengthLevel};
//! use secrecy::SecretString;
//!
//! assert_eq!(evaluate("abcd123!"), StrengthLevel::Strong);
//! assert_eq!(evaluate("abcd1234"), StrengthLevel::Weak);
//!
//! let password = SecretString::new("abcd1234".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! assert_eq!(evaluation.failed, Some(Criterion::SpecialCharacter));
//! println!("Your password is {}", evaluation.strength());
//! ```

mod error;
mod evaluator;
mod policy;
mod sections;
mod types;

// Public API
pub use error::PasswordError;
pub use evaluator::{evaluate, evaluate_bytes, evaluate_password_strength};
pub use policy::{MIN_LENGTH, SPECIAL_CHARACTERS, is_special_character};
pub use types::{Criterion, PasswordEvaluation, StrengthLevel};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
