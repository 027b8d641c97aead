//! Generation progress display

pub mod reporter;
