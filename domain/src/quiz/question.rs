//! Question and Quiz entities

use super::shape::QuestionShape;
use crate::core::error::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::HashSet;

/// Number of choices presented per question (answer + distractors)
pub const CHOICE_COUNT: usize = 4;

/// Number of distractors per question
pub const DISTRACTOR_COUNT: usize = CHOICE_COUNT - 1;

/// A multiple-choice question
///
/// Invariants, checked by [`Question::new`]:
/// - exactly [`CHOICE_COUNT`] pairwise distinct choices
/// - the answer appears among the choices exactly once
/// - exactly one of `image_path` / `music_path`, matching the shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    kind: QuestionShape,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    music_path: Option<String>,
    answer: String,
    choices: Vec<String>,
}

impl Question {
    pub fn new(
        kind: QuestionShape,
        media_path: impl Into<String>,
        answer: impl Into<String>,
        choices: Vec<String>,
    ) -> Result<Self, DomainError> {
        let media_path = media_path.into();
        let answer = answer.into();

        if media_path.trim().is_empty() {
            return Err(DomainError::InvalidQuestion(format!(
                "{} question has no media path",
                kind.category()
            )));
        }
        if choices.len() != CHOICE_COUNT {
            return Err(DomainError::InvalidQuestion(format!(
                "expected {} choices, got {}",
                CHOICE_COUNT,
                choices.len()
            )));
        }
        let distinct: HashSet<&str> = choices.iter().map(String::as_str).collect();
        if distinct.len() != choices.len() {
            return Err(DomainError::InvalidQuestion(format!(
                "duplicate choices for answer '{}'",
                answer
            )));
        }
        if !distinct.contains(answer.as_str()) {
            return Err(DomainError::InvalidQuestion(format!(
                "answer '{}' is not among the choices",
                answer
            )));
        }

        let (image_path, music_path) = if kind.uses_image() {
            (Some(media_path), None)
        } else {
            (None, Some(media_path))
        };

        Ok(Self {
            kind,
            title: kind.title().to_string(),
            image_path,
            music_path,
            answer,
            choices,
        })
    }

    pub fn kind(&self) -> QuestionShape {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    pub fn music_path(&self) -> Option<&str> {
        self.music_path.as_deref()
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Index of the answer within the (possibly shuffled) choices
    pub fn answer_index(&self) -> usize {
        self.choices
            .iter()
            .position(|choice| *choice == self.answer)
            .unwrap_or_default()
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }
}

/// A finalized quiz
///
/// Built once per request by [`Quiz::finalize`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    questions: Vec<Question>,
}

impl Quiz {
    /// Shuffle every question's choices, then the question order.
    pub fn finalize<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Self {
        for question in &mut questions {
            question.choices.shuffle(rng);
        }
        questions.shuffle(rng);
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
