//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::PasswordError;
use crate::sections::{
    SectionResult, character_variety_section, length_section, special_character_section,
};
use crate::types::{PasswordEvaluation, StrengthLevel};

/// Sections in evaluation order. The first failing one decides the result.
const SECTIONS: [fn(&str) -> SectionResult; 3] = [
    length_section,
    character_variety_section,
    special_character_section,
];

/// Delay before an async evaluation runs, so rapid keystrokes can cancel it.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

fn run_sections(password: &str) -> PasswordEvaluation {
    let failed = SECTIONS.iter().find_map(|section| section(password));

    #[cfg(feature = "tracing")]
    {
        match failed {
            Some(criterion) => tracing::debug!(?criterion, "password classified as weak"),
            None => tracing::debug!("password classified as strong"),
        }
    }

    PasswordEvaluation { failed }
}

/// Classifies a password as weak or strong.
///
/// Strong requires at least 8 characters, an ASCII letter, an ASCII digit and
/// one of `#?!@$%^&*-`. Every string, including the empty one, maps to a level.
pub fn evaluate(password: &str) -> StrengthLevel {
    run_sections(password).strength()
}

/// Evaluates password strength and reports the first failed criterion.
///
/// # Returns
/// A `PasswordEvaluation` whose `failed` field is `None` for a strong password.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    run_sections(password.expose_secret())
}

/// Classifies raw bytes, rejecting anything that is not a UTF-8 string.
///
/// # Errors
/// `PasswordError::InvalidArgument` if `bytes` is not valid UTF-8.
pub fn evaluate_bytes(bytes: &[u8]) -> Result<StrengthLevel, PasswordError> {
    let password = std::str::from_utf8(bytes)?;
    Ok(evaluate(password))
}

/// Async version that sends evaluation result via channel.
///
/// Waits for a short debounce first; if `token` is cancelled during the wait
/// nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::info!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
