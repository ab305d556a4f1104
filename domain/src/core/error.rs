//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("A request is already in flight")]
    Busy,
}

impl DomainError {
    /// Check if this error is a caller-side rejection rather than a fault.
    ///
    /// Rejections are swallowed silently by the use cases.
    pub fn is_rejection(&self) -> bool {
        matches!(self, DomainError::EmptyPrompt | DomainError::Busy)
    }
}
