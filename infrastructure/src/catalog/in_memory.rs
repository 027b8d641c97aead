//! In-memory catalog store

use super::document::{CatalogDocument, CatalogLoadError};
use async_trait::async_trait;
use quiz_application::{CatalogError, CatalogStore, StaffRole};
use quiz_domain::{
    Anime, AnimeId, AnimeImage, Category, CharacterId, CharacterImage, CharacterVersion,
    CharacterVersionId, ImageId, MusicId, MusicTrack, Staff, StaffId,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Catalog held entirely in memory
///
/// Relations are resolved once at load time, so every sample is a cheap
/// clone of a complete snapshot. The random source is shared between
/// concurrent requests behind a mutex that is never held across an await.
pub struct InMemoryCatalog {
    anime: Vec<Anime>,
    anime_images: Vec<AnimeImage>,
    character_images: Vec<CharacterImage>,
    versions: Vec<CharacterVersion>,
    musics: Vec<MusicTrack>,
    voice_actors: Vec<Staff>,
    singers: Vec<Staff>,
    rng: Mutex<StdRng>,
}

impl InMemoryCatalog {
    /// Load a catalog file, prefixing media filenames with the given bases
    pub fn load(path: &Path, image_base: &str, music_base: &str) -> Result<Self, CatalogLoadError> {
        let document = CatalogDocument::load(path)?;
        let catalog = Self::from_document(&document, image_base, music_base)?;
        debug!(
            "Loaded catalog {}: {} anime, {} anime images, {} character images, {} musics",
            path.display(),
            catalog.anime.len(),
            catalog.anime_images.len(),
            catalog.character_images.len(),
            catalog.musics.len()
        );
        Ok(catalog)
    }

    pub fn from_document(
        document: &CatalogDocument,
        image_base: &str,
        music_base: &str,
    ) -> Result<Self, CatalogLoadError> {
        document.validate()?;

        let anime: Vec<Anime> = document
            .anime
            .iter()
            .map(|entry| Anime::new(entry.id, entry.name.clone()))
            .collect();
        let anime_by_id: HashMap<u32, &Anime> = anime.iter().map(|a| (a.id.0, a)).collect();
        let staff_by_id: HashMap<u32, Staff> = document
            .staff
            .iter()
            .map(|entry| (entry.id, Staff::new(entry.id, entry.name.clone())))
            .collect();
        let character_names: HashMap<u32, &str> = document
            .character
            .iter()
            .map(|entry| (entry.id, entry.name.as_str()))
            .collect();

        // validate() guarantees every lookup below resolves
        let versions: Vec<CharacterVersion> = document
            .character_version
            .iter()
            .map(|entry| CharacterVersion {
                id: CharacterVersionId(entry.id),
                character_id: CharacterId(entry.character),
                character_name: character_names
                    .get(&entry.character)
                    .map(|name| name.to_string())
                    .unwrap_or_default(),
                version_name: entry
                    .version
                    .clone()
                    .filter(|name| !name.trim().is_empty()),
                animes: entry
                    .anime
                    .iter()
                    .filter_map(|id| anime_by_id.get(id).map(|a| (*a).clone()))
                    .collect(),
                voice_actors: entry
                    .voice_actors
                    .iter()
                    .filter_map(|id| staff_by_id.get(id).cloned())
                    .collect(),
            })
            .collect();
        let version_by_id: HashMap<u32, &CharacterVersion> =
            versions.iter().map(|v| (v.id.0, v)).collect();

        let mut anime_images = Vec::new();
        let mut character_images = Vec::new();
        for entry in &document.image {
            let image_path = media_path(image_base, &entry.filename);
            if let Some(id) = entry.anime {
                anime_images.push(AnimeImage {
                    id: ImageId(entry.id),
                    image_path,
                    anime: anime_by_id.get(&id).map(|a| (*a).clone()),
                });
            } else if let Some(id) = entry.character_version {
                character_images.push(CharacterImage {
                    id: ImageId(entry.id),
                    image_path,
                    version: version_by_id.get(&id).map(|v| (*v).clone()),
                });
            }
        }

        let musics: Vec<MusicTrack> = document
            .music
            .iter()
            .map(|entry| MusicTrack {
                id: MusicId(entry.id),
                name: entry.name.clone(),
                music_path: media_path(music_base, &entry.filename),
                anime: anime_by_id.get(&entry.anime).map(|a| (*a).clone()),
                singers: entry
                    .singers
                    .iter()
                    .filter_map(|id| staff_by_id.get(id).cloned())
                    .collect(),
            })
            .collect();

        let voice_actors = credited(versions.iter().flat_map(|v| &v.voice_actors));
        let singers = credited(musics.iter().flat_map(|m| &m.singers));

        Ok(Self {
            anime,
            anime_images,
            character_images,
            versions,
            musics,
            voice_actors,
            singers,
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Replace the random source with a seeded one
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Exactly `n` distinct entities, or an error if the pool is smaller
    fn sample_exact<T: Clone>(
        &self,
        category: Category,
        pool: &[T],
        n: usize,
    ) -> Result<Vec<T>, CatalogError> {
        if n > pool.len() {
            return Err(CatalogError::InsufficientEntities {
                category,
                requested: n,
                available: pool.len(),
            });
        }
        Ok(self.sample_up_to(pool.iter(), n))
    }

    /// Up to `n` distinct entities in random order
    fn sample_up_to<'p, T: Clone + 'p>(
        &self,
        pool: impl Iterator<Item = &'p T>,
        n: usize,
    ) -> Vec<T> {
        let candidates: Vec<&T> = pool.collect();
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let mut sample: Vec<T> = candidates
            .choose_multiple(&mut *rng, n)
            .map(|item| (*item).clone())
            .collect();
        sample.shuffle(&mut *rng);
        sample
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn count_eligible(&self, category: Category) -> Result<usize, CatalogError> {
        Ok(match category {
            Category::AnimeImage => self.anime_images.len(),
            Category::CharacterImage => self.character_images.len(),
            Category::AnimeMusic => self.musics.len(),
        })
    }

    async fn sample_anime_images(&self, n: usize) -> Result<Vec<AnimeImage>, CatalogError> {
        self.sample_exact(Category::AnimeImage, &self.anime_images, n)
    }

    async fn sample_character_images(
        &self,
        n: usize,
    ) -> Result<Vec<CharacterImage>, CatalogError> {
        self.sample_exact(Category::CharacterImage, &self.character_images, n)
    }

    async fn sample_musics(&self, n: usize) -> Result<Vec<MusicTrack>, CatalogError> {
        self.sample_exact(Category::AnimeMusic, &self.musics, n)
    }

    async fn sample_other_anime(
        &self,
        exclude: AnimeId,
        n: usize,
    ) -> Result<Vec<Anime>, CatalogError> {
        Ok(self.sample_up_to(self.anime.iter().filter(|a| a.id != exclude), n))
    }

    async fn sample_other_character_versions(
        &self,
        exclude: CharacterVersionId,
        n: usize,
    ) -> Result<Vec<CharacterVersion>, CatalogError> {
        Ok(self.sample_up_to(self.versions.iter().filter(|v| v.id != exclude), n))
    }

    async fn sample_other_musics(
        &self,
        exclude: MusicId,
        n: usize,
    ) -> Result<Vec<MusicTrack>, CatalogError> {
        Ok(self.sample_up_to(self.musics.iter().filter(|m| m.id != exclude), n))
    }

    async fn sample_staff(
        &self,
        role: StaffRole,
        exclude: &[StaffId],
        n: usize,
    ) -> Result<Vec<Staff>, CatalogError> {
        let pool = match role {
            StaffRole::VoiceActor => &self.voice_actors,
            StaffRole::Singer => &self.singers,
        };
        Ok(self.sample_up_to(pool.iter().filter(|s| !exclude.contains(&s.id)), n))
    }
}

fn media_path(base: &str, filename: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), filename)
}

/// Distinct staff in id order
fn credited<'a>(staff: impl Iterator<Item = &'a Staff>) -> Vec<Staff> {
    let mut seen = BTreeSet::new();
    let mut unique: Vec<Staff> = staff
        .filter(|member| seen.insert(member.id))
        .cloned()
        .collect();
    unique.sort_by_key(|member| member.id);
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_application::{GenerateQuizInput, GenerateQuizUseCase, GenerationParams};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn document() -> CatalogDocument {
        let mut content = String::new();
        for (id, name) in [
            (1, "Cowboy Bebop"),
            (2, "Trigun"),
            (3, "Mushishi"),
            (4, "Monster"),
            (5, "Paprika"),
        ] {
            content.push_str(&format!("[[anime]]\nid = {}\nname = \"{}\"\n\n", id, name));
        }
        for id in 1..=8 {
            content.push_str(&format!("[[staff]]\nid = {}\nname = \"Staff {}\"\n\n", id, id));
        }
        for id in 1..=5 {
            content.push_str(&format!(
                "[[character]]\nid = {id}\nname = \"Character {id}\"\n\n\
                 [[character_version]]\nid = {id}\ncharacter = {id}\nanime = [{id}]\nvoice_actors = [{id}]\n\n\
                 [[image]]\nid = {id}\nfilename = \"anime{id}.png\"\nanime = {id}\n\n\
                 [[image]]\nid = {}\nfilename = \"character{id}.png\"\ncharacter_version = {id}\n\n\
                 [[music]]\nid = {id}\nname = \"Song {id}\"\nfilename = \"song{id}.mp3\"\nanime = {id}\nsingers = [{}]\n\n",
                100 + id,
                3 + id,
            ));
        }
        CatalogDocument::from_toml_str(&content).unwrap()
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_document(&document(), "/assets/images", "/assets/musics/")
            .unwrap()
            .with_seed(1)
    }

    #[tokio::test]
    async fn test_counts_split_images_by_owner() {
        let catalog = catalog();
        assert_eq!(catalog.count_eligible(Category::AnimeImage).await.unwrap(), 5);
        assert_eq!(catalog.count_eligible(Category::CharacterImage).await.unwrap(), 5);
        assert_eq!(catalog.count_eligible(Category::AnimeMusic).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_relations_are_resolved() {
        let catalog = catalog();
        let images = catalog.sample_character_images(5).await.unwrap();
        for image in images {
            let version = image.version.unwrap();
            assert_eq!(version.animes.len(), 1);
            assert_eq!(version.voice_actors.len(), 1);
            assert!(image.image_path.starts_with("/assets/images/character"));
        }

        let tracks = catalog.sample_musics(1).await.unwrap();
        assert!(tracks[0].music_path.starts_with("/assets/musics/song"));
        assert!(tracks[0].anime.is_some());
    }

    #[tokio::test]
    async fn test_exact_sample_is_distinct() {
        let catalog = catalog();
        let images = catalog.sample_anime_images(5).await.unwrap();
        let ids: HashSet<ImageId> = images.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[tokio::test]
    async fn test_exact_sample_above_pool_fails() {
        let err = catalog().sample_musics(6).await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::InsufficientEntities {
                category: Category::AnimeMusic,
                requested: 6,
                available: 5
            }
        );
    }

    #[tokio::test]
    async fn test_other_samples_exclude_by_identity() {
        let catalog = catalog();
        let anime = catalog.sample_other_anime(AnimeId(1), 10).await.unwrap();
        assert_eq!(anime.len(), 4);
        assert!(anime.iter().all(|a| a.id != AnimeId(1)));

        let versions = catalog
            .sample_other_character_versions(CharacterVersionId(2), 2)
            .await
            .unwrap();
        assert_eq!(versions.len(), 2);
        assert!(versions.iter().all(|v| v.id != CharacterVersionId(2)));
    }

    #[tokio::test]
    async fn test_staff_pools_follow_roles() {
        let catalog = catalog();
        let voice_actors = catalog
            .sample_staff(StaffRole::VoiceActor, &[StaffId(1)], 10)
            .await
            .unwrap();
        let ids: HashSet<u32> = voice_actors.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, HashSet::from([2, 3, 4, 5]));

        let singers = catalog.sample_staff(StaffRole::Singer, &[], 10).await.unwrap();
        let ids: HashSet<u32> = singers.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, HashSet::from([4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_blank_version_name_is_dropped() {
        let mut document = document();
        document.character_version[0].version = Some(" ".to_string());
        let catalog = InMemoryCatalog::from_document(&document, "/i", "/m").unwrap();
        assert!(catalog.versions[0].version_name.is_none());
    }

    #[tokio::test]
    async fn test_generates_quiz_end_to_end() {
        let use_case = GenerateQuizUseCase::new(Arc::new(catalog()))
            .with_params(GenerationParams::default().with_seed(3));

        let quiz = use_case
            .try_execute(GenerateQuizInput::new(15))
            .await
            .unwrap();

        assert_eq!(quiz.len(), 15);
        for question in quiz.questions() {
            let choices: HashSet<&String> = question.choices().iter().collect();
            assert_eq!(choices.len(), 4);
            assert!(choices.contains(&question.answer().to_string()));
        }
    }

    #[tokio::test]
    async fn test_too_many_questions_rejected_end_to_end() {
        let use_case = GenerateQuizUseCase::new(Arc::new(catalog()));
        let outcome = use_case.execute(GenerateQuizInput::new(16)).await;

        assert!(outcome.is_rejected());
        assert_eq!(
            outcome.messages(),
            ["Number of questions requested exceeds the available number 15.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_demo_catalog_generates_quizzes() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/catalog.toml");
        let catalog = Arc::new(
            InMemoryCatalog::load(&path, "/assets/images", "/assets/musics")
                .unwrap()
                .with_seed(5),
        );

        for seed in 0..10 {
            let quiz = GenerateQuizUseCase::new(catalog.clone())
                .with_params(GenerationParams::default().with_seed(seed))
                .try_execute(GenerateQuizInput::default())
                .await
                .unwrap();
            assert_eq!(quiz.len(), 8);
        }
    }

    async fn demo_quiz(seed: u64) -> quiz_domain::Quiz {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/catalog.toml");
        let catalog = InMemoryCatalog::load(&path, "/assets/images", "/assets/musics")
            .unwrap()
            .with_seed(seed);

        GenerateQuizUseCase::new(Arc::new(catalog))
            .with_params(GenerationParams::default().with_seed(seed))
            .try_execute(GenerateQuizInput::new(12))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_same_seed_reproduces_demo_quiz() {
        let first = demo_quiz(42).await;
        let second = demo_quiz(42).await;

        assert_eq!(first, second);
    }
}
