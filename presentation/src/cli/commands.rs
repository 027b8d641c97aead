//! CLI command definitions

use clap::{Parser, ValueEnum};
use quiz_domain::QuizRequest;
use std::path::PathBuf;

/// Output format for generated quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Questions with the correct answers marked
    Full,
    /// Questions and choices only
    Quiz,
    /// JSON output
    Json,
}

impl From<OutputFormat> for quiz_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => quiz_domain::OutputFormat::Full,
            OutputFormat::Quiz => quiz_domain::OutputFormat::Quiz,
            OutputFormat::Json => quiz_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for anime-quiz
#[derive(Parser, Debug)]
#[command(name = "anime-quiz")]
#[command(author, version, about = "Generate multiple-choice anime quizzes from a media catalog")]
#[command(long_about = r#"
Anime Quiz builds a multiple-choice quiz from a catalog of anime images,
character images and anime music.

Questions are split across the three categories in proportion to how much
media each one holds. Every question has four distinct choices.

Configuration files are loaded from (in priority order):
1. ANIME_QUIZ_* environment variables
2. --config <path>       Explicit config file
3. ./anime-quiz.toml     Project-level config
4. ~/.config/anime-quiz/config.toml   Global config

Example:
  anime-quiz --catalog catalog.toml
  anime-quiz --catalog catalog.toml --count 20 --output full
  anime-quiz --catalog catalog.toml --play
"#)]
pub struct Cli {
    /// Number of questions (2-512, defaults to the configured count)
    #[arg(short = 'n', long, value_name = "N", value_parser = parse_question_count)]
    pub count: Option<usize>,

    /// Catalog file (overrides [catalog].path)
    #[arg(short, long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Play the generated quiz interactively
    #[arg(short, long, conflicts_with = "output")]
    pub play: bool,

    /// Print how much media each category holds and exit
    #[arg(long)]
    pub available: bool,

    /// Seed for reproducible quizzes (overrides [quiz].seed)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

fn parse_question_count(value: &str) -> Result<usize, String> {
    let count: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !QuizRequest::is_valid_count(count) {
        return Err(format!(
            "must be within {} to {}",
            QuizRequest::MIN_QUESTIONS,
            QuizRequest::MAX_QUESTIONS
        ));
    }
    Ok(count)
}
