//! Presentation layer for anime-quiz
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive quiz player.

pub mod cli;
pub mod output;
pub mod play;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use play::{PlayError, QuizPlayer};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
