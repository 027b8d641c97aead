//! Configuration file loading for anime-quiz
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ANIME_QUIZ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./anime-quiz.toml` or `./.anime-quiz.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/anime-quiz/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileCatalogConfig, FileConfig, FileOutputConfig, FileQuizConfig};
pub use loader::ConfigLoader;
