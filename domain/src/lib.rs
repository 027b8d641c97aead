//! Domain layer for anime-quiz
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Categories
//!
//! Quiz questions come from three pools of media:
//!
//! - **Anime-Image**: which anime does this image come from?
//! - **Character-Image**: who is this character, or who voices them?
//! - **Anime-Music**: what is this track, or who sings it?
//!
//! ## Allocation
//!
//! A requested question count is split across the pools in proportion to
//! how much media each pool holds (see [`Allocation::plan`]).

pub mod catalog;
pub mod config;
pub mod core;
pub mod quiz;

// Re-export commonly used types
pub use catalog::{
    category::{Category, CategoryAvailability},
    entities::{
        Anime, AnimeId, AnimeImage, CharacterId, CharacterImage, CharacterVersion,
        CharacterVersionId, ImageId, MusicId, MusicTrack, Staff, StaffId,
    },
};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use crate::core::error::DomainError;
pub use quiz::{
    allocation::Allocation,
    label::{character_label, music_label},
    question::{CHOICE_COUNT, DISTRACTOR_COUNT, Question, Quiz},
    request::QuizRequest,
    score::QuizScore,
    shape::{CharacterShape, MusicShape, QuestionShape},
    stage::GenerationStage,
};
