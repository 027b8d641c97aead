//! Output formatter trait

use quiz_domain::Quiz;

/// Trait for formatting generated quizzes
pub trait OutputFormatter {
    /// Format the quiz with the correct answers marked
    fn format(&self, quiz: &Quiz) -> String;

    /// Format as JSON
    fn format_json(&self, quiz: &Quiz) -> String;

    /// Format questions and choices only
    fn format_quiz_only(&self, quiz: &Quiz) -> String;
}
