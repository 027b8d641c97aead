//! Interactive play module
//!
//! Asks the questions of a generated quiz one by one and scores the answers.

mod player;

pub use player::{PlayError, QuizPlayer};
