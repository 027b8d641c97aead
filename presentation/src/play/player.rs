//! Line-based quiz player

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use quiz_domain::{DomainError, Question, Quiz, QuizScore};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors that can occur while playing a quiz
#[derive(Debug, Error)]
pub enum PlayError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Score(#[from] DomainError),
}

/// Plays a quiz over any line-based input and output
///
/// Answers are a choice letter (`a`-`d`, case-insensitive) or a choice
/// number (`1`-`4`). Invalid input is asked again. When the input ends
/// early, the remaining questions count as unanswered.
pub struct QuizPlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> QuizPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the quiz and return the final score
    pub fn play(&mut self, quiz: &Quiz) -> Result<QuizScore, PlayError> {
        let total = quiz.len();
        let mut correct = 0;

        for (i, question) in quiz.questions().iter().enumerate() {
            write!(
                self.output,
                "\n{}",
                ConsoleFormatter::format_question(i, total, question, false)
            )?;

            let Some(choice) = self.read_choice(question)? else {
                writeln!(self.output, "\n{}", "Input closed, stopping.".yellow())?;
                break;
            };

            if question.is_correct(&question.choices()[choice]) {
                correct += 1;
                writeln!(self.output, "{}", "Correct!".green().bold())?;
            } else {
                writeln!(
                    self.output,
                    "{} {}) {}",
                    "Wrong, the answer was".red(),
                    ConsoleFormatter::choice_letter(question.answer_index()),
                    question.answer()
                )?;
            }
        }

        let score = QuizScore::new(correct, total)?;
        write!(self.output, "\n{}", ConsoleFormatter::format_score(&score))?;
        self.output.flush()?;
        Ok(score)
    }

    /// Prompt until a valid choice is entered; `None` at end of input
    fn read_choice(&mut self, question: &Question) -> Result<Option<usize>, PlayError> {
        let count = question.choices().len();
        let last = ConsoleFormatter::choice_letter(count.saturating_sub(1));

        loop {
            write!(self.output, "Your answer [A-{}]: ", last)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_choice(&line, count) {
                Some(index) => return Ok(Some(index)),
                None => writeln!(
                    self.output,
                    "Please answer with a letter A-{} or a number 1-{}.",
                    last, count
                )?,
            }
        }
    }
}

/// Parse `b`, `B` or `2` into a zero-based choice index
fn parse_choice(input: &str, count: usize) -> Option<usize> {
    let input = input.trim();
    let mut chars = input.chars();
    let index = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            (c.to_ascii_uppercase() as u8 - b'A') as usize
        }
        _ => input.parse::<usize>().ok()?.checked_sub(1)?,
    };
    (index < count).then_some(index)
}
