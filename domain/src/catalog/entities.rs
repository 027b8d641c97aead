//! Catalog snapshot entities
//!
//! Read-only copies of catalog rows with their eager-loaded relations.
//! A snapshot is owned by the request that sampled it and is never written
//! back to the store.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identity of an anime
    AnimeId
);
entity_id!(
    /// Identity of a staff member (voice actor, singer)
    StaffId
);
entity_id!(
    /// Identity of a character
    CharacterId
);
entity_id!(
    /// Identity of one version of a character
    CharacterVersionId
);
entity_id!(
    /// Identity of an image
    ImageId
);
entity_id!(
    /// Identity of a music track
    MusicId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anime {
    pub id: AnimeId,
    pub name: String,
}

impl Anime {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: AnimeId(id),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
}

impl Staff {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: StaffId(id),
            name: name.into(),
        }
    }
}

/// A character as it appears in one or more anime
///
/// `version_name` distinguishes e.g. a child and an adult version of the
/// same character. `animes` and `voice_actors` may legitimately be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterVersion {
    pub id: CharacterVersionId,
    pub character_id: CharacterId,
    pub character_name: String,
    pub version_name: Option<String>,
    pub animes: Vec<Anime>,
    pub voice_actors: Vec<Staff>,
}

impl CharacterVersion {
    pub fn has_voice_actors(&self) -> bool {
        !self.voice_actors.is_empty()
    }
}

/// An image belonging to an anime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeImage {
    pub id: ImageId,
    pub image_path: String,
    /// Required relation; `None` only when the store is inconsistent.
    pub anime: Option<Anime>,
}

/// An image belonging to a character version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterImage {
    pub id: ImageId,
    pub image_path: String,
    /// Required relation; `None` only when the store is inconsistent.
    pub version: Option<CharacterVersion>,
}

/// A music track from an anime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicTrack {
    pub id: MusicId,
    pub name: String,
    pub music_path: String,
    /// Required relation; `None` only when the store is inconsistent.
    pub anime: Option<Anime>,
    pub singers: Vec<Staff>,
}

impl MusicTrack {
    pub fn has_singers(&self) -> bool {
        !self.singers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&AnimeId(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn test_relation_helpers() {
        let version = CharacterVersion {
            id: CharacterVersionId(1),
            character_id: CharacterId(1),
            character_name: "Spike Spiegel".to_string(),
            version_name: None,
            animes: vec![],
            voice_actors: vec![],
        };
        assert!(!version.has_voice_actors());

        let track = MusicTrack {
            id: MusicId(1),
            name: "Tank!".to_string(),
            music_path: "/assets/musics/tank.mp3".to_string(),
            anime: Some(Anime::new(1, "Cowboy Bebop")),
            singers: vec![Staff::new(3, "Mai Yamane")],
        };
        assert!(track.has_singers());
    }
}
