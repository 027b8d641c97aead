//! Question builders
//!
//! One builder per category. Each picks a [`QuestionShape`] for the sampled
//! entity, extracts the answer, and draws distractors from the catalog.

use super::distractors;
use super::types::GenerateQuizError;
use crate::ports::catalog_store::{CatalogError, CatalogStore, StaffRole};
use quiz_domain::{
    Anime, AnimeImage, Category, CharacterImage, CharacterShape, CharacterVersion, MusicShape,
    MusicTrack, Question, QuestionShape, Staff, StaffId, character_label, music_label,
};
use rand::Rng;
use rand::seq::SliceRandom;

/// Builds questions from sampled entities against one catalog
pub(super) struct QuestionBuilder<'a, S: CatalogStore + ?Sized> {
    store: &'a S,
    fetch_limit: usize,
}

impl<'a, S: CatalogStore + ?Sized> QuestionBuilder<'a, S> {
    pub(super) fn new(store: &'a S, fetch_limit: usize) -> Self {
        Self { store, fetch_limit }
    }

    /// "Which anime this image comes from?"
    pub(super) async fn anime_image(
        &self,
        image: &AnimeImage,
    ) -> Result<Question, GenerateQuizError> {
        let anime = image.anime.as_ref().ok_or_else(|| GenerateQuizError::MissingRelation {
            category: Category::AnimeImage,
            id: image.id.to_string(),
            relation: "anime",
        })?;

        let store = self.store;
        let exclude = anime.id;
        let distractors = distractors::draw(
            &anime.name,
            self.fetch_limit,
            move |n| store.sample_other_anime(exclude, n),
            |other: &Anime| other.name.clone(),
        )
        .await?;

        assemble(
            QuestionShape::AnimeImage,
            &image.image_path,
            anime.name.clone(),
            distractors,
        )
    }

    /// Character name or voice actor, depending on what the version offers
    pub(super) async fn character_image<R: Rng + ?Sized>(
        &self,
        image: &CharacterImage,
        rng: &mut R,
    ) -> Result<Question, GenerateQuizError> {
        let version = image
            .version
            .as_ref()
            .ok_or_else(|| GenerateQuizError::MissingRelation {
                category: Category::CharacterImage,
                id: image.id.to_string(),
                relation: "character version",
            })?;

        let shapes = CharacterShape::available_for(version);
        let shape = shapes
            .choose(rng)
            .copied()
            .unwrap_or(CharacterShape::CharacterName);

        let (answer, distractors) = match shape {
            CharacterShape::CharacterName => self.character_name(version, rng).await?,
            CharacterShape::VoiceActorName => {
                let owner = (Category::CharacterImage, version.id.to_string());
                self.staff_name(&version.voice_actors, StaffRole::VoiceActor, owner, rng)
                    .await?
            }
        };

        assemble(
            QuestionShape::CharacterImage(shape),
            &image.image_path,
            answer,
            distractors,
        )
    }

    /// Music name or singer, depending on what the track offers
    pub(super) async fn anime_music<R: Rng + ?Sized>(
        &self,
        track: &MusicTrack,
        rng: &mut R,
    ) -> Result<Question, GenerateQuizError> {
        let shapes = MusicShape::available_for(track);
        let shape = shapes.choose(rng).copied().unwrap_or(MusicShape::MusicName);

        let (answer, distractors) = match shape {
            MusicShape::MusicName => self.music_name(track).await?,
            MusicShape::SingerName => {
                let owner = (Category::AnimeMusic, track.id.to_string());
                self.staff_name(&track.singers, StaffRole::Singer, owner, rng)
                    .await?
            }
        };

        assemble(
            QuestionShape::AnimeMusic(shape),
            &track.music_path,
            answer,
            distractors,
        )
    }

    async fn character_name<R: Rng + ?Sized>(
        &self,
        version: &CharacterVersion,
        rng: &mut R,
    ) -> Result<(String, Vec<String>), GenerateQuizError> {
        let answer = random_character_label(version, rng);

        let store = self.store;
        let exclude = version.id;
        let distractors = distractors::draw(
            &answer,
            self.fetch_limit,
            move |n| store.sample_other_character_versions(exclude, n),
            |other: &CharacterVersion| random_character_label(other, rng),
        )
        .await?;

        Ok((answer, distractors))
    }

    async fn music_name(
        &self,
        track: &MusicTrack,
    ) -> Result<(String, Vec<String>), GenerateQuizError> {
        let anime = track.anime.as_ref().ok_or_else(|| GenerateQuizError::MissingRelation {
            category: Category::AnimeMusic,
            id: track.id.to_string(),
            relation: "anime",
        })?;
        let answer = music_label(&track.name, &anime.name);

        let store = self.store;
        let exclude = track.id;
        let distractors = distractors::draw(
            &answer,
            self.fetch_limit,
            move |n| async move {
                store
                    .sample_other_musics(exclude, n)
                    .await?
                    .into_iter()
                    .map(|other| match &other.anime {
                        Some(anime) => Ok(music_label(&other.name, &anime.name)),
                        None => Err(CatalogError::Inconsistent(format!(
                            "music {} has no anime",
                            other.id
                        ))),
                    })
                    .collect::<Result<Vec<String>, CatalogError>>()
            },
            |label: &String| label.clone(),
        )
        .await?;

        Ok((answer, distractors))
    }

    /// Pick one of `credited` as the answer; distractors are other staff
    /// holding the same role, excluding everyone credited on this entity
    async fn staff_name<R: Rng + ?Sized>(
        &self,
        credited: &[Staff],
        role: StaffRole,
        (category, owner_id): (Category, String),
        rng: &mut R,
    ) -> Result<(String, Vec<String>), GenerateQuizError> {
        let answer = credited
            .choose(rng)
            .map(|staff| staff.name.clone())
            .ok_or(GenerateQuizError::MissingRelation {
                category,
                id: owner_id,
                relation: role.as_str(),
            })?;

        let exclude: Vec<StaffId> = credited.iter().map(|staff| staff.id).collect();
        let exclude = exclude.as_slice();
        let store = self.store;
        let distractors = distractors::draw(
            &answer,
            self.fetch_limit,
            move |n| store.sample_staff(role, exclude, n),
            |other: &Staff| other.name.clone(),
        )
        .await?;

        Ok((answer, distractors))
    }
}

/// `character[: version][, anime]` with the anime drawn from the version's list
fn random_character_label<R: Rng + ?Sized>(version: &CharacterVersion, rng: &mut R) -> String {
    let anime = version.animes.choose(rng).map(|anime| anime.name.as_str());
    character_label(
        &version.character_name,
        version.version_name.as_deref(),
        anime,
    )
}

fn assemble(
    shape: QuestionShape,
    media_path: &str,
    answer: String,
    distractors: Vec<String>,
) -> Result<Question, GenerateQuizError> {
    let mut choices = distractors;
    choices.push(answer.clone());
    Ok(Question::new(shape, media_path, answer, choices)?)
}
