//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for generated quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Questions with the correct answer marked
    Full,
    /// Questions and choices only (default)
    Quiz,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Quiz
    }
}
