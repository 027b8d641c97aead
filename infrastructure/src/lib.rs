//! Infrastructure layer for anime-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use catalog::{CatalogDocument, CatalogLoadError, InMemoryCatalog};
pub use config::{ConfigLoader, FileCatalogConfig, FileConfig, FileOutputConfig, FileQuizConfig};
