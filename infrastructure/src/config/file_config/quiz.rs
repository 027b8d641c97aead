//! Quiz generation configuration from TOML (`[quiz]` section)

use quiz_application::GenerationParams;
use quiz_domain::{ConfigIssue, ConfigIssueCode, QuizRequest, Severity};
use serde::{Deserialize, Serialize};

/// Raw quiz configuration from TOML
///
/// # Example
///
/// ```toml
/// [quiz]
/// default_question_count = 10
/// seed = 42
/// distractor_fetch_limit = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuizConfig {
    /// Question count used when `--count` is not given
    pub default_question_count: usize,
    /// Fixed seed for reproducible quizzes
    pub seed: Option<u64>,
    /// Largest batch requested while topping up distractors
    pub distractor_fetch_limit: usize,
}

impl Default for FileQuizConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            default_question_count: QuizRequest::DEFAULT_QUESTIONS,
            seed: params.seed,
            distractor_fetch_limit: params.distractor_fetch_limit,
        }
    }
}

impl FileQuizConfig {
    pub fn to_generation_params(&self) -> GenerationParams {
        GenerationParams {
            seed: self.seed,
            distractor_fetch_limit: self.distractor_fetch_limit,
        }
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !QuizRequest::is_valid_count(self.default_question_count) {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                code: ConfigIssueCode::OutOfRange {
                    field: "quiz.default_question_count".to_string(),
                    value: self.default_question_count.to_string(),
                    min: QuizRequest::MIN_QUESTIONS,
                    max: QuizRequest::MAX_QUESTIONS,
                },
                message: format!(
                    "quiz.default_question_count: {} is outside {}..={}",
                    self.default_question_count,
                    QuizRequest::MIN_QUESTIONS,
                    QuizRequest::MAX_QUESTIONS
                ),
            });
        }

        if self.distractor_fetch_limit == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::OutOfRange {
                    field: "quiz.distractor_fetch_limit".to_string(),
                    value: "0".to_string(),
                    min: 1,
                    max: usize::MAX,
                },
                message: "quiz.distractor_fetch_limit: 0 only allows a single batch of candidates"
                    .to_string(),
            });
        }

        issues
    }
}
