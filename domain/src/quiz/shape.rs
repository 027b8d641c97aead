//! Question shapes (category × template)
//!
//! Every question is built from exactly one [`QuestionShape`]. The optional
//! shapes are only offered when the sampled entity has the relation they ask
//! about.

use crate::catalog::category::Category;
use crate::catalog::entities::{CharacterVersion, MusicTrack};
use serde::{Deserialize, Serialize};

/// Shape of a Character-Image question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharacterShape {
    CharacterName,
    VoiceActorName,
}

impl CharacterShape {
    /// Shapes available for a sampled character version
    pub fn available_for(version: &CharacterVersion) -> Vec<CharacterShape> {
        let mut shapes = vec![CharacterShape::CharacterName];
        if version.has_voice_actors() {
            shapes.push(CharacterShape::VoiceActorName);
        }
        shapes
    }
}

/// Shape of an Anime-Music question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MusicShape {
    MusicName,
    SingerName,
}

impl MusicShape {
    /// Shapes available for a sampled music track
    pub fn available_for(track: &MusicTrack) -> Vec<MusicShape> {
        let mut shapes = vec![MusicShape::MusicName];
        if track.has_singers() {
            shapes.push(MusicShape::SingerName);
        }
        shapes
    }
}

/// Category × shape of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "category", content = "shape", rename_all = "kebab-case")]
pub enum QuestionShape {
    AnimeImage,
    CharacterImage(CharacterShape),
    AnimeMusic(MusicShape),
}

impl QuestionShape {
    pub fn category(&self) -> Category {
        match self {
            QuestionShape::AnimeImage => Category::AnimeImage,
            QuestionShape::CharacterImage(_) => Category::CharacterImage,
            QuestionShape::AnimeMusic(_) => Category::AnimeMusic,
        }
    }

    /// Title shown to the player
    pub fn title(&self) -> &'static str {
        match self {
            QuestionShape::AnimeImage => "Which anime this image comes from?",
            QuestionShape::CharacterImage(CharacterShape::CharacterName) => {
                "What is the name of this character?"
            }
            QuestionShape::CharacterImage(CharacterShape::VoiceActorName) => {
                "Who is the voice actor/actress of this character?"
            }
            QuestionShape::AnimeMusic(MusicShape::MusicName) => "What is the name of this music?",
            QuestionShape::AnimeMusic(MusicShape::SingerName) => "Who is the singer of this music?",
        }
    }

    /// Whether the question carries an image (otherwise it carries music)
    pub fn uses_image(&self) -> bool {
        !matches!(self, QuestionShape::AnimeMusic(_))
    }
}
