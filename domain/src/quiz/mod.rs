//! Quiz model and planning.
//!
//! - [`request::QuizRequest`]: validated question count
//! - [`allocation::Allocation`]: per-category question plan
//! - [`shape::QuestionShape`]: category × question template
//! - [`question::Question`], [`question::Quiz`]: generated output
//! - [`score::QuizScore`]: result of playing a quiz

pub mod allocation;
pub mod label;
pub mod question;
pub mod request;
pub mod score;
pub mod shape;
pub mod stage;
