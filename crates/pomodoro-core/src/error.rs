//! Core error types for pomodoro-core.
//!
//! Only terminal I/O can actually fail a run. Rejected user input is
//! described by [`InputError`] so the resolver can explain the fallback, but
//! it never escapes as a failure.

use thiserror::Error;

/// Core error type for pomodoro-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Writing to the terminal failed (closed stdout, broken pipe).
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a typed answer was rejected in favour of the default.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no value entered")]
    Blank,

    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("negative value {0} is not allowed")]
    Negative(i128),

    #[error("value {0} is too large")]
    TooLarge(i128),
}

impl InputError {
    /// Feedback line shown to the user when `default` is substituted.
    pub fn fallback_message(&self, default: u64) -> String {
        match self {
            InputError::Blank => format!("Using default: {default}"),
            InputError::NotANumber(_) | InputError::TooLarge(_) => {
                format!("That's not a whole number. Using default {default}.")
            }
            InputError::Negative(_) => {
                format!("Negative values aren't allowed. Using default {default}.")
            }
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
