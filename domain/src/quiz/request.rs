//! Quiz request value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A validated request for a quiz of `question_count` questions (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    question_count: usize,
}

impl QuizRequest {
    pub const MIN_QUESTIONS: usize = 2;
    pub const MAX_QUESTIONS: usize = 512;
    pub const DEFAULT_QUESTIONS: usize = 8;

    /// Create a request, rejecting counts outside `2..=512`
    pub fn new(question_count: usize) -> Result<Self, DomainError> {
        if !Self::is_valid_count(question_count) {
            return Err(DomainError::QuestionCountOutOfRange {
                requested: question_count,
                min: Self::MIN_QUESTIONS,
                max: Self::MAX_QUESTIONS,
            });
        }
        Ok(Self { question_count })
    }

    pub fn is_valid_count(question_count: usize) -> bool {
        (Self::MIN_QUESTIONS..=Self::MAX_QUESTIONS).contains(&question_count)
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }
}

impl Default for QuizRequest {
    fn default() -> Self {
        Self {
            question_count: Self::DEFAULT_QUESTIONS,
        }
    }
}
