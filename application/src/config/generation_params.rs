//! Generation parameters for quiz generation.
//!
//! [`GenerationParams`] groups the static parameters that control how
//! [`GenerateQuizUseCase`](crate::use_cases::generate_quiz::GenerateQuizUseCase)
//! draws random samples. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Quiz generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Seed for the per-request random generator.
    ///
    /// `None` seeds every request from OS entropy. With a seed, the engine's
    /// own choices (shapes, answers, shuffles) repeat for identical samples.
    pub seed: Option<u64>,
    /// Largest batch requested from the catalog while topping up distractors.
    pub distractor_fetch_limit: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: None,
            distractor_fetch_limit: 64,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_distractor_fetch_limit(mut self, limit: usize) -> Self {
        self.distractor_fetch_limit = limit;
        self
    }
}
