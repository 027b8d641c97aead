//! Category sampling
//!
//! Draws the source entities for each category and checks the store kept
//! its side of the contract: exactly `n` entities, no identity twice.

use super::types::GenerateQuizError;
use crate::ports::catalog_store::CatalogStore;
use quiz_domain::{AnimeImage, Category, CharacterImage, MusicTrack};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::debug;

pub(super) async fn anime_images<S: CatalogStore + ?Sized>(
    store: &S,
    n: usize,
) -> Result<Vec<AnimeImage>, GenerateQuizError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let images = store.sample_anime_images(n).await?;
    verify(Category::AnimeImage, n, &images, |image| image.id)?;
    Ok(images)
}

pub(super) async fn character_images<S: CatalogStore + ?Sized>(
    store: &S,
    n: usize,
) -> Result<Vec<CharacterImage>, GenerateQuizError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let images = store.sample_character_images(n).await?;
    verify(Category::CharacterImage, n, &images, |image| image.id)?;
    Ok(images)
}

pub(super) async fn musics<S: CatalogStore + ?Sized>(
    store: &S,
    n: usize,
) -> Result<Vec<MusicTrack>, GenerateQuizError> {
    if n == 0 {
        return Ok(Vec::new());
    }
    let tracks = store.sample_musics(n).await?;
    verify(Category::AnimeMusic, n, &tracks, |track| track.id)?;
    Ok(tracks)
}

fn verify<T, K, F>(
    category: Category,
    requested: usize,
    sample: &[T],
    identity: F,
) -> Result<(), GenerateQuizError>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    if sample.len() != requested {
        return Err(GenerateQuizError::InconsistentSample {
            category,
            detail: format!("requested {} entities, got {}", requested, sample.len()),
        });
    }

    let distinct: HashSet<K> = sample.iter().map(identity).collect();
    if distinct.len() != sample.len() {
        return Err(GenerateQuizError::InconsistentSample {
            category,
            detail: format!(
                "{} duplicate entities in a sample of {}",
                sample.len() - distinct.len(),
                sample.len()
            ),
        });
    }

    debug!("Sampled {} {} entities", requested, category);
    Ok(())
}
