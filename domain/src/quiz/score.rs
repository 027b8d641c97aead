//! Quiz score value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Result of playing a quiz (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    score: usize,
    total: usize,
}

impl QuizScore {
    /// Create a score, rejecting `score > total`
    pub fn new(score: usize, total: usize) -> Result<Self, DomainError> {
        if score > total {
            return Err(DomainError::InvalidScore { score, total });
        }
        Ok(Self { score, total })
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage of correct answers, 0 for an empty quiz
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 * 100.0 / self.total as f64
        }
    }

    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }
}

impl std::fmt::Display for QuizScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}
