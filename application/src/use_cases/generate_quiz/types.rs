//! Input, error and outcome types for quiz generation.

use crate::ports::catalog_store::CatalogError;
use quiz_domain::{Category, DomainError, Quiz, QuizRequest};
use thiserror::Error;

/// Generic user-facing message attached to every system fault
pub const GENERIC_ERROR_MESSAGE: &str = "Unknown error when generating anime quiz.";

/// Input for the GenerateQuiz use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateQuizInput {
    /// Requested number of questions (validated by the use case)
    pub question_count: usize,
}

impl GenerateQuizInput {
    pub fn new(question_count: usize) -> Self {
        Self { question_count }
    }
}

impl Default for GenerateQuizInput {
    fn default() -> Self {
        Self::new(QuizRequest::DEFAULT_QUESTIONS)
    }
}

/// Errors that can occur during quiz generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateQuizError {
    /// The request itself cannot be satisfied; correctable by the caller
    #[error("{0}")]
    Rejected(DomainError),

    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("Inconsistent {category} sample: {detail}")]
    InconsistentSample { category: Category, detail: String },

    #[error("{category} entity {id} has no {relation}")]
    MissingRelation {
        category: Category,
        id: String,
        relation: &'static str,
    },

    #[error("Only {found} of {needed} distinct distractors available for '{answer}'")]
    InsufficientDistractors {
        answer: String,
        found: usize,
        needed: usize,
    },

    #[error("{0}")]
    Domain(DomainError),
}

impl From<DomainError> for GenerateQuizError {
    fn from(error: DomainError) -> Self {
        if error.is_client_error() {
            GenerateQuizError::Rejected(error)
        } else {
            GenerateQuizError::Domain(error)
        }
    }
}

impl GenerateQuizError {
    /// Check if this error is a rejection (as opposed to a system fault)
    pub fn is_rejected(&self) -> bool {
        matches!(self, GenerateQuizError::Rejected(_))
    }

    /// Messages reported to the caller
    ///
    /// Rejections carry only their reason; faults carry the generic message
    /// followed by the fault detail.
    pub fn messages(&self) -> Vec<String> {
        if self.is_rejected() {
            vec![self.to_string()]
        } else {
            vec![GENERIC_ERROR_MESSAGE.to_string(), self.to_string()]
        }
    }
}

/// Terminal state of a generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Success(Quiz),
    Rejected { messages: Vec<String> },
    Error { messages: Vec<String> },
}

impl QuizOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, QuizOutcome::Success(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, QuizOutcome::Rejected { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, QuizOutcome::Error { .. })
    }

    /// Messages for a failed outcome, empty on success
    pub fn messages(&self) -> &[String] {
        match self {
            QuizOutcome::Success(_) => &[],
            QuizOutcome::Rejected { messages } | QuizOutcome::Error { messages } => messages,
        }
    }

    /// HTTP status an embedding web layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            QuizOutcome::Success(_) => 200,
            QuizOutcome::Rejected { .. } => 400,
            QuizOutcome::Error { .. } => 500,
        }
    }

    /// Process exit code for command-line callers
    pub fn exit_code(&self) -> i32 {
        match self {
            QuizOutcome::Success(_) => 0,
            QuizOutcome::Error { .. } => 1,
            QuizOutcome::Rejected { .. } => 2,
        }
    }

    pub fn into_quiz(self) -> Option<Quiz> {
        match self {
            QuizOutcome::Success(quiz) => Some(quiz),
            _ => None,
        }
    }
}

impl From<Result<Quiz, GenerateQuizError>> for QuizOutcome {
    fn from(result: Result<Quiz, GenerateQuizError>) -> Self {
        match result {
            Ok(quiz) => QuizOutcome::Success(quiz),
            Err(e) if e.is_rejected() => QuizOutcome::Rejected {
                messages: e.messages(),
            },
            Err(e) => QuizOutcome::Error {
                messages: e.messages(),
            },
        }
    }
}
