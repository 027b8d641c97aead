//! Console output formatter for generated quizzes

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use quiz_application::QuizOutcome;
use quiz_domain::{Category, CategoryAvailability, Question, Quiz, QuizScore};

/// Formats quizzes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the quiz with the correct answers marked
    pub fn format(quiz: &Quiz) -> String {
        Self::render(quiz, true)
    }

    /// Format as JSON
    pub fn format_json(quiz: &Quiz) -> String {
        serde_json::to_string_pretty(quiz).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format questions and choices only
    pub fn format_quiz_only(quiz: &Quiz) -> String {
        Self::render(quiz, false)
    }

    /// Format a single question, optionally marking the answer
    pub fn format_question(index: usize, total: usize, question: &Question, reveal: bool) -> String {
        let mut output = format!(
            "{} {}\n",
            format!("Question {}/{}", index + 1, total).cyan().bold(),
            format!("[{}]", question.kind().category()).dimmed()
        );
        output.push_str(&format!("{}\n", question.title().bold()));

        if let Some(path) = question.image_path() {
            output.push_str(&format!("  {} {}\n", "Image:".dimmed(), path));
        }
        if let Some(path) = question.music_path() {
            output.push_str(&format!("  {} {}\n", "Music:".dimmed(), path));
        }

        for (i, choice) in question.choices().iter().enumerate() {
            let line = format!("  {}) {}", Self::choice_letter(i), choice);
            if reveal && question.is_correct(choice) {
                output.push_str(&format!("{} {}\n", line.green().bold(), "<- answer".green()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }

        output
    }

    /// Letter shown in front of the choice at `index` (A, B, C, ...)
    pub fn choice_letter(index: usize) -> char {
        (b'A' + (index % 26) as u8) as char
    }

    /// Per-category media counts
    pub fn format_availability(availability: &CategoryAvailability) -> String {
        let mut output = Self::section_header("Available Media");
        for category in Category::ALL {
            output.push_str(&format!(
                "  {:<18}{:>6}\n",
                format!("{}:", category),
                availability.get(category)
            ));
        }
        output.push_str(&format!(
            "  {:<18}{:>6}\n",
            "total:".bold(),
            availability.total()
        ));
        output
    }

    /// Messages of a rejected or failed outcome, for stderr
    pub fn format_failure(outcome: &QuizOutcome) -> String {
        let label = if outcome.is_rejected() {
            "Rejected:".yellow().bold()
        } else {
            "Error:".red().bold()
        };
        outcome
            .messages()
            .iter()
            .map(|message| format!("{} {}", label, message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn format_score(score: &QuizScore) -> String {
        let summary = format!("Score: {} ({:.0}%)", score, score.percentage());
        if score.is_perfect() {
            format!("{}\n", summary.green().bold())
        } else {
            format!("{}\n", summary.bold())
        }
    }

    fn render(quiz: &Quiz, reveal: bool) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Anime Quiz"));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Questions:".cyan().bold(),
            quiz.len()
        ));

        for (i, question) in quiz.questions().iter().enumerate() {
            output.push('\n');
            output.push_str(&Self::format_question(i, quiz.len(), question, reveal));
        }

        output.push_str(&Self::footer());
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, quiz: &Quiz) -> String {
        Self::format(quiz)
    }

    fn format_json(&self, quiz: &Quiz) -> String {
        Self::format_json(quiz)
    }

    fn format_quiz_only(&self, quiz: &Quiz) -> String {
        Self::format_quiz_only(quiz)
    }
}
