//! Catalog Store port
//!
//! Defines the read-only interface quiz generation uses to query the media
//! catalog. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use quiz_domain::{
    Anime, AnimeId, AnimeImage, Category, CharacterImage, CharacterVersion, CharacterVersionId,
    MusicId, MusicTrack, Staff, StaffId,
};
use thiserror::Error;

/// Errors that can occur while reading the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Requested {requested} {category} entities but only {available} exist")]
    InsufficientEntities {
        category: Category,
        requested: usize,
        available: usize,
    },

    #[error("Inconsistent catalog data: {0}")]
    Inconsistent(String),
}

/// Which relation a staff member must have to be drawn as a distractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaffRole {
    /// Voiced at least one character version
    VoiceActor,
    /// Sang at least one music track
    Singer,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::VoiceActor => "voice actor",
            StaffRole::Singer => "singer",
        }
    }
}

/// Read-only access to the media catalog
///
/// Every `sample_*` method draws uniformly at random without replacement and
/// returns owned snapshots with the relations the question builders need
/// already loaded. `sample_other_*` methods return *up to* `n` entities: the
/// pool may be smaller than requested.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Number of entities eligible for the category
    async fn count_eligible(&self, category: Category) -> Result<usize, CatalogError>;

    /// Exactly `n` distinct anime images with their anime
    async fn sample_anime_images(&self, n: usize) -> Result<Vec<AnimeImage>, CatalogError>;

    /// Exactly `n` distinct character images with version, anime and voice actors
    async fn sample_character_images(&self, n: usize)
    -> Result<Vec<CharacterImage>, CatalogError>;

    /// Exactly `n` distinct music tracks with anime and singers
    async fn sample_musics(&self, n: usize) -> Result<Vec<MusicTrack>, CatalogError>;

    /// Up to `n` distinct anime other than `exclude`
    async fn sample_other_anime(
        &self,
        exclude: AnimeId,
        n: usize,
    ) -> Result<Vec<Anime>, CatalogError>;

    /// Up to `n` distinct character versions other than `exclude`, with their anime
    async fn sample_other_character_versions(
        &self,
        exclude: CharacterVersionId,
        n: usize,
    ) -> Result<Vec<CharacterVersion>, CatalogError>;

    /// Up to `n` distinct music tracks other than `exclude`, with their anime
    async fn sample_other_musics(
        &self,
        exclude: MusicId,
        n: usize,
    ) -> Result<Vec<MusicTrack>, CatalogError>;

    /// Up to `n` distinct staff holding `role`, none of them in `exclude`
    async fn sample_staff(
        &self,
        role: StaffRole,
        exclude: &[StaffId],
        n: usize,
    ) -> Result<Vec<Staff>, CatalogError>;
}
