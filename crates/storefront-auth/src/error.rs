//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required form field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Email address is malformed.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// Social provider name not recognised.
    #[error("unknown sign-in provider: {0}")]
    UnknownProvider(String),

    /// Mode name not recognised.
    #[error("unknown auth mode: {0} (expected login or signup)")]
    UnknownMode(String),
}

