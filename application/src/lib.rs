//! Application layer for anime-quiz
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    catalog_store::{CatalogError, CatalogStore, StaffRole},
    progress::{GenerationProgress, NoProgress},
};
pub use use_cases::generate_quiz::{
    GENERIC_ERROR_MESSAGE, GenerateQuizError, GenerateQuizInput, GenerateQuizUseCase, QuizOutcome,
};
