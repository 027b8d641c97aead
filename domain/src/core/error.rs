//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Number of questions should be within {min} to {max}.")]
    QuestionCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("Number of questions requested exceeds the available number {available}.")]
    InsufficientMedia { requested: usize, available: usize },

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("No valid score and total provided.")]
    InvalidScore { score: usize, total: usize },
}

impl DomainError {
    /// Check if this error is caused by the caller's input rather than a system fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::QuestionCountOutOfRange { .. }
                | DomainError::InsufficientMedia { .. }
                | DomainError::InvalidScore { .. }
        )
    }
}
