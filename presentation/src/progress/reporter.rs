//! Progress reporting for quiz generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quiz_application::GenerationProgress;
use quiz_domain::{Category, GenerationStage, QuestionShape};
use std::sync::Mutex;

/// Reports progress during quiz generation with a progress bar
pub struct ProgressReporter {
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map(|style| style.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }

    fn with_bar(&self, f: impl FnOnce(&mut Option<ProgressBar>)) {
        if let Ok(mut bar) = self.stage_bar.lock() {
            f(&mut bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_stage_start(&self, stage: GenerationStage, total_tasks: usize) {
        let pb = ProgressBar::new(total_tasks as u64);
        pb.set_style(Self::stage_style());
        pb.set_prefix(stage.display_name());
        pb.set_message("Starting...");
        self.with_bar(|bar| *bar = Some(pb));
    }

    fn on_question_built(&self, category: Category, _shape: QuestionShape) {
        self.with_bar(|bar| {
            if let Some(pb) = bar.as_ref() {
                pb.set_message(format!("{} {}", "v".green(), category));
                pb.inc(1);
            }
        });
    }

    fn on_stage_complete(&self, stage: GenerationStage) {
        self.with_bar(|bar| {
            if let Some(pb) = bar.take() {
                if stage != GenerationStage::SamplingAndBuilding {
                    pb.inc(1);
                }
                pb.finish_with_message(format!("{}", "done".green()));
            }
        });
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl GenerationProgress for SimpleProgress {
    fn on_stage_start(&self, stage: GenerationStage, total_tasks: usize) {
        if stage == GenerationStage::SamplingAndBuilding {
            eprintln!(
                "{} {} ({} questions)",
                "->".cyan(),
                stage.display_name().bold(),
                total_tasks
            );
        } else {
            eprintln!("{} {}", "->".cyan(), stage.display_name().bold());
        }
    }

    fn on_question_built(&self, category: Category, shape: QuestionShape) {
        eprintln!("  {} {} {}", "v".green(), category, shape.title().dimmed());
    }

    fn on_stage_complete(&self, _stage: GenerationStage) {}
}
