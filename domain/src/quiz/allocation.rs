//! Allocation planner
//!
//! Splits a requested question count across the three categories in
//! proportion to how much media each category has.
//!
//! ```text
//! base[c]   = floor(count * available[c] / total)
//! remainder = count - Σ base
//! ```
//!
//! The remainder is handed out one question at a time, cycling through
//! [`Category::ALL`] and skipping categories that already use all of their
//! media. The shares are computed in integer arithmetic so the floor is exact.

use crate::catalog::category::{Category, CategoryAvailability};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Per-category question counts for one quiz
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub anime_image: usize,
    pub character_image: usize,
    pub anime_music: usize,
}

impl Allocation {
    /// Plan the allocation for `question_count` questions.
    ///
    /// Fails with [`DomainError::InsufficientMedia`] when the categories
    /// together cannot supply `question_count` distinct entities.
    pub fn plan(
        question_count: usize,
        availability: &CategoryAvailability,
    ) -> Result<Self, DomainError> {
        let total = availability.total();
        if total == 0 || question_count > total {
            return Err(DomainError::InsufficientMedia {
                requested: question_count,
                available: total,
            });
        }

        let mut allocation = Allocation::default();
        for category in Category::ALL {
            let share = (question_count as u128 * availability.get(category) as u128)
                / total as u128;
            allocation.set(category, share as usize);
        }

        let mut remainder = question_count - allocation.total();
        while remainder > 0 {
            for category in Category::ALL {
                if remainder == 0 {
                    break;
                }
                if allocation.get(category) < availability.get(category) {
                    allocation.set(category, allocation.get(category) + 1);
                    remainder -= 1;
                }
            }
        }

        Ok(allocation)
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::AnimeImage => self.anime_image,
            Category::CharacterImage => self.character_image,
            Category::AnimeMusic => self.anime_music,
        }
    }

    fn set(&mut self, category: Category, count: usize) {
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

impl std::fmt::Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "anime-image={}, character-image={}, anime-music={}",
            self.anime_image, self.character_image, self.anime_music
        )
    }
}
