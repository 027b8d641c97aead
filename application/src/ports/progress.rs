//! Progress notification port
//!
//! Defines the interface for reporting progress during quiz generation.

use quiz_domain::{Category, GenerationStage, QuestionShape};

/// Callback for progress updates during quiz generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, ...).
pub trait GenerationProgress: Send + Sync {
    /// Called when a stage starts; `total_tasks` is the number of units of
    /// work the stage will report (questions for the building stage, 1 otherwise)
    fn on_stage_start(&self, stage: GenerationStage, total_tasks: usize);

    /// Called after each question is built
    fn on_question_built(&self, _category: Category, _shape: QuestionShape) {}

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: GenerationStage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {
    fn on_stage_start(&self, _stage: GenerationStage, _total_tasks: usize) {}
    fn on_stage_complete(&self, _stage: GenerationStage) {}
}
