//! Catalog configuration from TOML (`[catalog]` section)

use quiz_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Catalog file to load when `--catalog` is not given
    pub path: Option<PathBuf>,
    /// Prefix for image filenames
    pub image_base: String,
    /// Prefix for music filenames
    pub music_base: String,
}

impl Default for FileCatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            image_base: "/assets/images".to_string(),
            music_base: "/assets/musics".to_string(),
        }
    }
}

impl FileCatalogConfig {
    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        [
            ("catalog.image_base", &self.image_base),
            ("catalog.music_base", &self.music_base),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::EmptyValue {
                field: field.to_string(),
            },
            message: format!("{}: empty, media paths will be relative", field),
        })
        .collect()
    }
}
