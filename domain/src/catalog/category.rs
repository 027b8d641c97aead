//! Question categories and their availability

use serde::{Deserialize, Serialize};

/// A source pool of quiz-worthy media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Images linked to an anime
    AnimeImage,
    /// Images linked to a character version
    CharacterImage,
    /// Music tracks
    AnimeMusic,
}

impl Category {
    /// All categories, in remainder-distribution order
    pub const ALL: [Category; 3] = [
        Category::AnimeImage,
        Category::CharacterImage,
        Category::AnimeMusic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AnimeImage => "anime-image",
            Category::CharacterImage => "character-image",
            Category::AnimeMusic => "anime-music",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of eligible entities per category at request time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAvailability {
    pub anime_image: usize,
    pub character_image: usize,
    pub anime_music: usize,
}

impl CategoryAvailability {
    pub fn new(anime_image: usize, character_image: usize, anime_music: usize) -> Self {
        Self {
            anime_image,
            character_image,
            anime_music,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::AnimeImage => self.anime_image,
            Category::CharacterImage => self.character_image,
            Category::AnimeMusic => self.anime_music,
        }
    }

    pub fn set(&mut self, category: Category, count: usize) {
        match category {
            Category::AnimeImage => self.anime_image = count,
            Category::CharacterImage => self.character_image = count,
            Category::AnimeMusic => self.anime_music = count,
        }
    }

    pub fn total(&self) -> usize {
        self.anime_image + self.character_image + self.anime_music
    }
}
