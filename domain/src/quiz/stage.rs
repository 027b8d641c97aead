//! Quiz generation stages

use serde::{Deserialize, Serialize};

/// Stages a quiz generation request moves through
///
/// ```text
/// Validating -> Counting -> Planning -> SamplingAndBuilding -> Finalizing
/// ```
///
/// Any stage may end the request early: Validating and Counting with a
/// rejection, every stage after Validating with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStage {
    Validating,
    Counting,
    Planning,
    SamplingAndBuilding,
    Finalizing,
}

impl GenerationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStage::Validating => "validating",
            GenerationStage::Counting => "counting",
            GenerationStage::Planning => "planning",
            GenerationStage::SamplingAndBuilding => "sampling_and_building",
            GenerationStage::Finalizing => "finalizing",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            GenerationStage::Validating => "Validating request",
            GenerationStage::Counting => "Counting media",
            GenerationStage::Planning => "Planning allocation",
            GenerationStage::SamplingAndBuilding => "Building questions",
            GenerationStage::Finalizing => "Shuffling",
        }
    }
}

impl std::fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
