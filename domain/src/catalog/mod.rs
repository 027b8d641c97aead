//! Catalog snapshots consumed by quiz generation.
//!
//! - [`category::Category`]: the three question source pools
//! - [`entities`]: read-only entity snapshots with eager-loaded relations

pub mod category;
pub mod entities;
