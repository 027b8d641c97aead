//! Raw TOML catalog data types
//!
//! These structs mirror the catalog file one-to-one. Relations are plain ids;
//! [`CatalogDocument::validate`] checks that they resolve before the
//! document is turned into an [`InMemoryCatalog`](super::InMemoryCatalog).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("{kind} {id} references unknown {target} {target_id}")]
    DanglingReference {
        kind: &'static str,
        id: u32,
        target: &'static str,
        target_id: u32,
    },

    #[error("image {id} must belong to exactly one anime or character version")]
    AmbiguousImageOwner { id: u32 },

    #[error("{kind} {id} has a blank {field}")]
    BlankField {
        kind: &'static str,
        id: u32,
        field: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeEntry {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffEntry {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterEntry {
    pub id: u32,
    pub name: String,
}

/// One version of a character (e.g. child / adult)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterVersionEntry {
    pub id: u32,
    pub character: u32,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub anime: Vec<u32>,
    #[serde(default)]
    pub voice_actors: Vec<u32>,
}

/// An image owned by either an anime or a character version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub id: u32,
    pub filename: String,
    #[serde(default)]
    pub anime: Option<u32>,
    #[serde(default)]
    pub character_version: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicEntry {
    pub id: u32,
    pub name: String,
    pub filename: String,
    pub anime: u32,
    #[serde(default)]
    pub singers: Vec<u32>,
}

/// Complete catalog file (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    pub anime: Vec<AnimeEntry>,
    pub staff: Vec<StaffEntry>,
    pub character: Vec<CharacterEntry>,
    pub character_version: Vec<CharacterVersionEntry>,
    pub image: Vec<ImageEntry>,
    pub music: Vec<MusicEntry>,
}

impl CatalogDocument {
    /// Read, parse and validate a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogLoadError> {
        let document: CatalogDocument = toml::from_str(content)?;
        document.validate()?;
        Ok(document)
    }

    /// Check ids are unique, names non-blank and every reference resolves.
    ///
    /// Stops at the first problem found.
    pub fn validate(&self) -> Result<(), CatalogLoadError> {
        let anime = unique_ids("anime", self.anime.iter().map(|a| a.id))?;
        let staff = unique_ids("staff", self.staff.iter().map(|s| s.id))?;
        let characters = unique_ids("character", self.character.iter().map(|c| c.id))?;
        let versions = unique_ids(
            "character_version",
            self.character_version.iter().map(|v| v.id),
        )?;
        unique_ids("image", self.image.iter().map(|i| i.id))?;
        unique_ids("music", self.music.iter().map(|m| m.id))?;

        for entry in &self.anime {
            not_blank("anime", entry.id, "name", &entry.name)?;
        }
        for entry in &self.staff {
            not_blank("staff", entry.id, "name", &entry.name)?;
        }
        for entry in &self.character {
            not_blank("character", entry.id, "name", &entry.name)?;
        }

        for version in &self.character_version {
            let kind = "character_version";
            resolves(kind, version.id, "character", version.character, &characters)?;
            for &id in &version.anime {
                resolves(kind, version.id, "anime", id, &anime)?;
            }
            for &id in &version.voice_actors {
                resolves(kind, version.id, "staff", id, &staff)?;
            }
        }

        for image in &self.image {
            not_blank("image", image.id, "filename", &image.filename)?;
            match (image.anime, image.character_version) {
                (Some(id), None) => resolves("image", image.id, "anime", id, &anime)?,
                (None, Some(id)) => {
                    resolves("image", image.id, "character_version", id, &versions)?
                }
                _ => return Err(CatalogLoadError::AmbiguousImageOwner { id: image.id }),
            }
        }

        for music in &self.music {
            not_blank("music", music.id, "name", &music.name)?;
            not_blank("music", music.id, "filename", &music.filename)?;
            resolves("music", music.id, "anime", music.anime, &anime)?;
            for &id in &music.singers {
                resolves("music", music.id, "staff", id, &staff)?;
            }
        }

        Ok(())
    }
}

fn unique_ids(
    kind: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<HashSet<u32>, CatalogLoadError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogLoadError::DuplicateId { kind, id });
        }
    }
    Ok(seen)
}

fn not_blank(
    kind: &'static str,
    id: u32,
    field: &'static str,
    value: &str,
) -> Result<(), CatalogLoadError> {
    if value.trim().is_empty() {
        return Err(CatalogLoadError::BlankField { kind, id, field });
    }
    Ok(())
}

fn resolves(
    kind: &'static str,
    id: u32,
    target: &'static str,
    target_id: u32,
    known: &HashSet<u32>,
) -> Result<(), CatalogLoadError> {
    if !known.contains(&target_id) {
        return Err(CatalogLoadError::DanglingReference {
            kind,
            id,
            target,
            target_id,
        });
    }
    Ok(())
}
