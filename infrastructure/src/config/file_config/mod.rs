//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod output;
mod quiz;

pub use catalog::FileCatalogConfig;
pub use output::FileOutputConfig;
pub use quiz::FileQuizConfig;

use quiz_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Quiz generation settings
    pub quiz: FileQuizConfig,
    /// Catalog source settings
    pub catalog: FileCatalogConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.quiz.validate();
        issues.extend(self.catalog.validate());
        issues
    }
}
