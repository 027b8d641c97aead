//! Catalog adapter
//!
//! Loads a media catalog from a TOML file and serves it through the
//! [`CatalogStore`](quiz_application::CatalogStore) port.
//!
//! ```toml
//! [[anime]]
//! id = 1
//! name = "Cowboy Bebop"
//!
//! [[staff]]
//! id = 1
//! name = "Kouichi Yamadera"
//!
//! [[character]]
//! id = 1
//! name = "Spike Spiegel"
//!
//! [[character_version]]
//! id = 1
//! character = 1
//! anime = [1]
//! voice_actors = [1]
//!
//! [[image]]
//! id = 1
//! filename = "bebop.png"
//! anime = 1
//!
//! [[music]]
//! id = 1
//! name = "Tank!"
//! filename = "tank.mp3"
//! anime = 1
//! ```

mod document;
mod in_memory;

pub use document::{
    AnimeEntry, CatalogDocument, CatalogLoadError, CharacterEntry, CharacterVersionEntry,
    ImageEntry, MusicEntry, StaffEntry,
};
pub use in_memory::InMemoryCatalog;
