//! Application-level configuration.
//!
//! - [`GenerationParams`]: random seed and distractor fetch limits

pub mod generation_params;

pub use generation_params::GenerationParams;
