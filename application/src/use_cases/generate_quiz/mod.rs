//! Generate Quiz use case
//!
//! Orchestrates one quiz generation request:
//!
//! ```text
//! Validating -> Counting -> Planning -> SamplingAndBuilding -> Finalizing
//! ```
//!
//! Validation and counting can reject the request; any fault after
//! validation ends it with an error. Nothing is retried and nothing is
//! written back to the catalog.

mod builders;
mod distractors;
mod sampling;
pub mod types;

pub use types::{GENERIC_ERROR_MESSAGE, GenerateQuizError, GenerateQuizInput, QuizOutcome};

use crate::config::GenerationParams;
use crate::ports::catalog_store::CatalogStore;
use crate::ports::progress::{GenerationProgress, NoProgress};
use builders::QuestionBuilder;
use quiz_domain::{
    Allocation, Category, CategoryAvailability, DomainError, GenerationStage, Question, Quiz,
    QuizRequest,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for generating a quiz from the catalog
pub struct GenerateQuizUseCase<S: CatalogStore + ?Sized + 'static> {
    store: Arc<S>,
    params: GenerationParams,
}

impl<S: CatalogStore + ?Sized + 'static> GenerateQuizUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            params: GenerationParams::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Number of eligible entities per category right now
    pub async fn availability(&self) -> Result<CategoryAvailability, GenerateQuizError> {
        let mut availability = CategoryAvailability::default();
        for category in Category::ALL {
            let count = self.store.count_eligible(category).await?;
            availability.set(category, count);
        }
        Ok(availability)
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: GenerateQuizInput) -> QuizOutcome {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Never fails: faults are folded into [`QuizOutcome::Error`].
    pub async fn execute_with_progress(
        &self,
        input: GenerateQuizInput,
        progress: &dyn GenerationProgress,
    ) -> QuizOutcome {
        let result = self.try_execute_with_progress(input, progress).await;
        match &result {
            Ok(quiz) => info!("Generated quiz with {} questions", quiz.len()),
            Err(e) if e.is_rejected() => info!("Quiz request rejected: {}", e),
            Err(e) => warn!("Quiz generation failed: {}", e),
        }
        QuizOutcome::from(result)
    }

    /// Execute the use case, returning the fault itself on failure
    pub async fn try_execute(&self, input: GenerateQuizInput) -> Result<Quiz, GenerateQuizError> {
        self.try_execute_with_progress(input, &NoProgress).await
    }

    pub async fn try_execute_with_progress(
        &self,
        input: GenerateQuizInput,
        progress: &dyn GenerationProgress,
    ) -> Result<Quiz, GenerateQuizError> {
        // Validating
        progress.on_stage_start(GenerationStage::Validating, 1);
        let request = QuizRequest::new(input.question_count).map_err(GenerateQuizError::Rejected)?;
        progress.on_stage_complete(GenerationStage::Validating);
        info!("Generating quiz with {} questions", request.question_count());

        // Counting
        progress.on_stage_start(GenerationStage::Counting, 1);
        let availability = self.availability().await?;
        debug!(
            "Availability: anime-image={}, character-image={}, anime-music={}",
            availability.anime_image, availability.character_image, availability.anime_music
        );
        if request.question_count() > availability.total() {
            return Err(GenerateQuizError::Rejected(DomainError::InsufficientMedia {
                requested: request.question_count(),
                available: availability.total(),
            }));
        }
        progress.on_stage_complete(GenerationStage::Counting);

        // Planning
        progress.on_stage_start(GenerationStage::Planning, 1);
        let allocation = Allocation::plan(request.question_count(), &availability)
            .map_err(GenerateQuizError::Domain)?;
        info!("Allocation: {}", allocation);
        progress.on_stage_complete(GenerationStage::Planning);

        // Sampling & Building
        progress.on_stage_start(GenerationStage::SamplingAndBuilding, allocation.total());
        let mut rng = self.request_rng();
        let questions = self
            .sample_and_build(&allocation, &mut rng, progress)
            .await?;
        progress.on_stage_complete(GenerationStage::SamplingAndBuilding);

        // Finalizing
        progress.on_stage_start(GenerationStage::Finalizing, 1);
        let quiz = Quiz::finalize(questions, &mut rng);
        progress.on_stage_complete(GenerationStage::Finalizing);

        Ok(quiz)
    }

    async fn sample_and_build(
        &self,
        allocation: &Allocation,
        rng: &mut StdRng,
        progress: &dyn GenerationProgress,
    ) -> Result<Vec<Question>, GenerateQuizError> {
        let store = &*self.store;
        let builder = QuestionBuilder::new(store, self.params.distractor_fetch_limit);
        let mut questions = Vec::with_capacity(allocation.total());

        for image in sampling::anime_images(store, allocation.anime_image).await? {
            let question = builder.anime_image(&image).await?;
            Self::record(&mut questions, question, progress);
        }

        for image in sampling::character_images(store, allocation.character_image).await? {
            let question = builder.character_image(&image, rng).await?;
            Self::record(&mut questions, question, progress);
        }

        for track in sampling::musics(store, allocation.anime_music).await? {
            let question = builder.anime_music(&track, rng).await?;
            Self::record(&mut questions, question, progress);
        }

        Ok(questions)
    }

    fn record(questions: &mut Vec<Question>, question: Question, progress: &dyn GenerationProgress) {
        let shape = question.kind();
        debug!("Built {:?} question: {}", shape, question.answer());
        progress.on_question_built(shape.category(), shape);
        questions.push(question);
    }

    /// Fresh generator for one request; never shared between requests
    fn request_rng(&self) -> StdRng {
        match self.params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::catalog_store::{CatalogError, StaffRole};
    use async_trait::async_trait;
    use quiz_domain::{
        Anime, AnimeId, AnimeImage, CharacterId, CharacterImage, CharacterShape, CharacterVersion,
        CharacterVersionId, ImageId, MusicId, MusicShape, MusicTrack, QuestionShape, Staff,
        StaffId,
    };
    use std::collections::HashSet;
    use std::sync::Mutex;

    // ==================== Fake Catalog ====================

    /// How the fake catalog misbehaves
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Fault {
        CountFails,
        ShortSample,
        DuplicateSample,
        AnimeImageWithoutAnime,
    }

    /// In-memory catalog that always samples the first `n` eligible entities
    struct FakeCatalog {
        anime: Vec<Anime>,
        anime_images: Vec<AnimeImage>,
        versions: Vec<CharacterVersion>,
        character_images: Vec<CharacterImage>,
        tracks: Vec<MusicTrack>,
        eligible_tracks: usize,
        fault: Option<Fault>,
        calls: Mutex<Vec<&'static str>>,
    }

    const POOL: u32 = 6;

    impl FakeCatalog {
        fn new(anime_images: usize, character_images: usize, musics: usize) -> Self {
            let anime: Vec<Anime> = (1..=POOL)
                .map(|i| Anime::new(i, format!("Anime {}", i)))
                .collect();

            let versions: Vec<CharacterVersion> = (1..=POOL)
                .map(|i| CharacterVersion {
                    id: CharacterVersionId(i),
                    character_id: CharacterId(i),
                    character_name: format!("Character {}", i),
                    version_name: (i % 2 == 0).then(|| "Adult".to_string()),
                    animes: vec![anime[(i as usize - 1) % anime.len()].clone()],
                    voice_actors: vec![Staff::new(100 + i, format!("Voice {}", i))],
                })
                .collect();

            let track_count = musics.max(POOL as usize) as u32;
            let tracks: Vec<MusicTrack> = (1..=track_count)
                .map(|i| MusicTrack {
                    id: MusicId(i),
                    name: format!("Song {}", i),
                    music_path: format!("/assets/musics/song{}.mp3", i),
                    anime: Some(anime[(i as usize - 1) % anime.len()].clone()),
                    singers: vec![Staff::new(300 + i, format!("Singer {}", i))],
                })
                .collect();

            Self {
                anime_images: (0..anime_images as u32)
                    .map(|i| AnimeImage {
                        id: ImageId(i),
                        image_path: format!("/assets/images/anime{}.png", i),
                        anime: Some(anime[i as usize % anime.len()].clone()),
                    })
                    .collect(),
                character_images: (0..character_images as u32)
                    .map(|i| CharacterImage {
                        id: ImageId(10_000 + i),
                        image_path: format!("/assets/images/character{}.png", i),
                        version: Some(versions[i as usize % versions.len()].clone()),
                    })
                    .collect(),
                anime,
                versions,
                tracks,
                eligible_tracks: musics,
                fault: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn with_fault(mut self, fault: Fault) -> Self {
            if fault == Fault::AnimeImageWithoutAnime {
                for image in &mut self.anime_images {
                    image.anime = None;
                }
            }
            self.fault = Some(fault);
            self
        }

        fn without_voice_actors(mut self) -> Self {
            for image in &mut self.character_images {
                if let Some(version) = image.version.as_mut() {
                    version.voice_actors.clear();
                }
            }
            self
        }

        /// Character 1 is voiced by both "Voice 1" and "Voice 2"
        fn with_shared_voice_actor(mut self) -> Self {
            let co_actor = Staff::new(102, "Voice 2");
            self.versions[0].voice_actors.push(co_actor.clone());
            for version in self.character_images.iter_mut().filter_map(|i| i.version.as_mut()) {
                if version.id == CharacterVersionId(1) {
                    version.voice_actors.push(co_actor.clone());
                }
            }
            self
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn take<T: Clone>(&self, items: &[T], n: usize) -> Result<Vec<T>, CatalogError> {
            match self.fault {
                Some(Fault::ShortSample) => {
                    Ok(items.iter().take(n.saturating_sub(1)).cloned().collect())
                }
                Some(Fault::DuplicateSample) if n > 1 => {
                    let mut sample: Vec<T> = items.iter().take(n - 1).cloned().collect();
                    sample.push(items[0].clone());
                    Ok(sample)
                }
                _ => Ok(items.iter().take(n).cloned().collect()),
            }
        }
    }

    #[async_trait]
    impl CatalogStore for FakeCatalog {
        async fn count_eligible(&self, category: Category) -> Result<usize, CatalogError> {
            self.record("count_eligible");
            if self.fault == Some(Fault::CountFails) {
                return Err(CatalogError::Unavailable("connection refused".to_string()));
            }
            Ok(match category {
                Category::AnimeImage => self.anime_images.len(),
                Category::CharacterImage => self.character_images.len(),
                Category::AnimeMusic => self.eligible_tracks,
            })
        }

        async fn sample_anime_images(&self, n: usize) -> Result<Vec<AnimeImage>, CatalogError> {
            self.record("sample_anime_images");
            self.take(&self.anime_images, n)
        }

        async fn sample_character_images(
            &self,
            n: usize,
        ) -> Result<Vec<CharacterImage>, CatalogError> {
            self.record("sample_character_images");
            self.take(&self.character_images, n)
        }

        async fn sample_musics(&self, n: usize) -> Result<Vec<MusicTrack>, CatalogError> {
            self.record("sample_musics");
            self.take(&self.tracks[..self.eligible_tracks], n)
        }

        async fn sample_other_anime(
            &self,
            exclude: AnimeId,
            n: usize,
        ) -> Result<Vec<Anime>, CatalogError> {
            Ok(self
                .anime
                .iter()
                .filter(|anime| anime.id != exclude)
                .take(n)
                .cloned()
                .collect())
        }

        async fn sample_other_character_versions(
            &self,
            exclude: CharacterVersionId,
            n: usize,
        ) -> Result<Vec<CharacterVersion>, CatalogError> {
            Ok(self
                .versions
                .iter()
                .filter(|version| version.id != exclude)
                .take(n)
                .cloned()
                .collect())
        }

        async fn sample_other_musics(
            &self,
            exclude: MusicId,
            n: usize,
        ) -> Result<Vec<MusicTrack>, CatalogError> {
            Ok(self
                .tracks
                .iter()
                .filter(|track| track.id != exclude)
                .take(n)
                .cloned()
                .collect())
        }

        async fn sample_staff(
            &self,
            role: StaffRole,
            exclude: &[StaffId],
            n: usize,
        ) -> Result<Vec<Staff>, CatalogError> {
            let staff: Vec<Staff> = match role {
                StaffRole::VoiceActor => self
                    .versions
                    .iter()
                    .flat_map(|version| version.voice_actors.clone())
                    .collect(),
                StaffRole::Singer => self
                    .tracks
                    .iter()
                    .flat_map(|track| track.singers.clone())
                    .collect(),
            };
            Ok(staff
                .into_iter()
                .filter(|member| !exclude.contains(&member.id))
                .take(n)
                .collect())
        }
    }

    /// Records every stage transition
    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl GenerationProgress for RecordingProgress {
        fn on_stage_start(&self, stage: GenerationStage, total_tasks: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start {} {}", stage, total_tasks));
        }

        fn on_question_built(&self, category: Category, _shape: QuestionShape) {
            self.events.lock().unwrap().push(format!("built {}", category));
        }

        fn on_stage_complete(&self, stage: GenerationStage) {
            self.events.lock().unwrap().push(format!("done {}", stage));
        }
    }

    fn use_case(catalog: FakeCatalog) -> GenerateQuizUseCase<FakeCatalog> {
        GenerateQuizUseCase::new(Arc::new(catalog))
            .with_params(GenerationParams::default().with_seed(7))
    }

    fn assert_well_formed(quiz: &Quiz) {
        for question in quiz.questions() {
            let choices: HashSet<&String> = question.choices().iter().collect();
            assert_eq!(question.choices().len(), 4);
            assert_eq!(choices.len(), 4, "duplicate choices: {:?}", question.choices());
            assert_eq!(
                question
                    .choices()
                    .iter()
                    .filter(|c| c.as_str() == question.answer())
                    .count(),
                1
            );
        }
    }

    // ==================== Validating ====================

    #[tokio::test]
    async fn test_out_of_range_counts_are_rejected() {
        for count in [0, 1, 513, 10_000] {
            let outcome = use_case(FakeCatalog::new(600, 0, 0))
                .execute(GenerateQuizInput::new(count))
                .await;
            assert!(outcome.is_rejected(), "count {} should be rejected", count);
            assert_eq!(
                outcome.messages(),
                ["Number of questions should be within 2 to 512.".to_string()]
            );
        }
    }

    #[tokio::test]
    async fn test_validation_happens_before_catalog_is_touched() {
        let catalog = Arc::new(FakeCatalog::new(10, 10, 10).with_fault(Fault::CountFails));
        let outcome = GenerateQuizUseCase::new(catalog.clone())
            .execute(GenerateQuizInput::new(1))
            .await;

        assert!(outcome.is_rejected());
        assert!(catalog.calls().is_empty());
    }

    // ==================== Counting ====================

    #[tokio::test]
    async fn test_count_above_availability_is_rejected() {
        let catalog = Arc::new(FakeCatalog::new(4, 3, 3));
        let outcome = GenerateQuizUseCase::new(catalog.clone())
            .execute(GenerateQuizInput::new(50))
            .await;

        assert!(outcome.is_rejected());
        assert_eq!(
            outcome.messages(),
            ["Number of questions requested exceeds the available number 10.".to_string()]
        );
        assert!(!catalog.calls().iter().any(|call| call.starts_with("sample")));
    }

    #[tokio::test]
    async fn test_empty_catalog_is_rejected() {
        let outcome = use_case(FakeCatalog::new(0, 0, 0))
            .execute(GenerateQuizInput::new(2))
            .await;
        assert!(outcome.is_rejected());
    }

    #[tokio::test]
    async fn test_unavailable_catalog_is_an_error() {
        let outcome = use_case(FakeCatalog::new(10, 10, 10).with_fault(Fault::CountFails))
            .execute(GenerateQuizInput::default())
            .await;

        assert!(outcome.is_error());
        assert_eq!(outcome.messages()[0], GENERIC_ERROR_MESSAGE);
        assert!(outcome.messages()[1].contains("connection refused"));
    }

    #[tokio::test]
    async fn test_availability() {
        let availability = use_case(FakeCatalog::new(4, 5, 6))
            .availability()
            .await
            .unwrap();
        assert_eq!(availability, CategoryAvailability::new(4, 5, 6));
    }

    // ==================== Sampling & Building ====================

    #[tokio::test]
    async fn test_generates_requested_number_of_questions() {
        let outcome = use_case(FakeCatalog::new(10, 10, 10))
            .execute(GenerateQuizInput::new(10))
            .await;

        let quiz = outcome.into_quiz().unwrap();
        assert_eq!(quiz.len(), 10);
        assert_well_formed(&quiz);

        let per_category = |category: Category| {
            quiz.questions()
                .iter()
                .filter(|q| q.kind().category() == category)
                .count()
        };
        assert_eq!(per_category(Category::AnimeImage), 4);
        assert_eq!(per_category(Category::CharacterImage), 3);
        assert_eq!(per_category(Category::AnimeMusic), 3);
    }

    #[tokio::test]
    async fn test_exact_fit_uses_every_entity() {
        let quiz = use_case(FakeCatalog::new(2, 2, 1))
            .try_execute(GenerateQuizInput::new(5))
            .await
            .unwrap();

        assert_eq!(quiz.len(), 5);
        assert_well_formed(&quiz);

        let media: HashSet<&str> = quiz
            .questions()
            .iter()
            .filter_map(|q| q.image_path().or(q.music_path()))
            .collect();
        assert_eq!(media.len(), 5);
    }

    #[tokio::test]
    async fn test_maximum_question_count() {
        let quiz = use_case(FakeCatalog::new(300, 200, 100))
            .try_execute(GenerateQuizInput::new(512))
            .await
            .unwrap();

        assert_eq!(quiz.len(), 512);
        assert_well_formed(&quiz);
    }

    #[tokio::test]
    async fn test_no_source_entity_used_twice() {
        let quiz = use_case(FakeCatalog::new(20, 20, 20))
            .try_execute(GenerateQuizInput::new(30))
            .await
            .unwrap();

        let media: Vec<&str> = quiz
            .questions()
            .iter()
            .filter_map(|q| q.image_path().or(q.music_path()))
            .collect();
        let distinct: HashSet<&str> = media.iter().copied().collect();
        assert_eq!(media.len(), distinct.len());
    }

    #[tokio::test]
    async fn test_character_without_voice_actors_never_asks_for_voice_actor() {
        for seed in 0..20 {
            let quiz = GenerateQuizUseCase::new(Arc::new(
                FakeCatalog::new(0, 6, 0).without_voice_actors(),
            ))
            .with_params(GenerationParams::default().with_seed(seed))
            .try_execute(GenerateQuizInput::new(6))
            .await
            .unwrap();

            assert!(quiz.questions().iter().all(|q| {
                q.kind() == QuestionShape::CharacterImage(CharacterShape::CharacterName)
            }));
        }
    }

    #[tokio::test]
    async fn test_voice_actor_distractors_skip_every_credited_actor() {
        let mut checked = 0;
        for seed in 0..40 {
            let quiz = GenerateQuizUseCase::new(Arc::new(
                FakeCatalog::new(0, 6, 0).with_shared_voice_actor(),
            ))
            .with_params(GenerationParams::default().with_seed(seed))
            .try_execute(GenerateQuizInput::new(6))
            .await
            .unwrap();

            // Only character 1 credits "Voice 1", and it also credits "Voice 2"
            for question in quiz.questions() {
                if question.kind() == QuestionShape::CharacterImage(CharacterShape::VoiceActorName)
                    && question.answer() == "Voice 1"
                {
                    assert!(!question.choices().iter().any(|c| c == "Voice 2"));
                    checked += 1;
                }
            }
        }
        assert!(checked > 0);
    }

    #[tokio::test]
    async fn test_answers_follow_label_templates() {
        let quiz = use_case(FakeCatalog::new(0, 6, 6))
            .try_execute(GenerateQuizInput::new(12))
            .await
            .unwrap();

        for question in quiz.questions() {
            match question.kind() {
                QuestionShape::CharacterImage(CharacterShape::CharacterName) => {
                    assert!(question.answer().starts_with("Character "));
                    assert!(question.answer().contains(", Anime "));
                }
                QuestionShape::CharacterImage(CharacterShape::VoiceActorName) => {
                    assert!(question.answer().starts_with("Voice "));
                    assert!(question.choices().iter().all(|c| c.starts_with("Voice ")));
                }
                QuestionShape::AnimeMusic(MusicShape::MusicName) => {
                    assert!(question.answer().starts_with("Song "));
                    assert!(question.choices().iter().all(|c| c.contains(", Anime ")));
                }
                QuestionShape::AnimeMusic(MusicShape::SingerName) => {
                    assert!(question.answer().starts_with("Singer "));
                }
                QuestionShape::AnimeImage => unreachable!("no anime images in catalog"),
            }
        }
    }

    #[tokio::test]
    async fn test_short_sample_is_an_error() {
        let outcome = use_case(FakeCatalog::new(10, 10, 10).with_fault(Fault::ShortSample))
            .execute(GenerateQuizInput::new(9))
            .await;

        assert!(outcome.is_error());
        assert!(outcome.messages()[1].contains("requested 3 entities, got 2"));
    }

    #[tokio::test]
    async fn test_duplicate_sample_is_an_error() {
        let result = use_case(FakeCatalog::new(10, 10, 10).with_fault(Fault::DuplicateSample))
            .try_execute(GenerateQuizInput::new(9))
            .await;

        assert!(matches!(
            result,
            Err(GenerateQuizError::InconsistentSample { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_relation_is_an_error() {
        let result = use_case(FakeCatalog::new(5, 0, 0).with_fault(Fault::AnimeImageWithoutAnime))
            .try_execute(GenerateQuizInput::new(3))
            .await;

        assert!(matches!(
            result,
            Err(GenerateQuizError::MissingRelation {
                category: Category::AnimeImage,
                relation: "anime",
                ..
            })
        ));
    }

    // ==================== Finalizing ====================

    #[tokio::test]
    async fn test_same_seed_same_quiz() {
        let first = use_case(FakeCatalog::new(10, 10, 10))
            .try_execute(GenerateQuizInput::new(12))
            .await
            .unwrap();
        let second = use_case(FakeCatalog::new(10, 10, 10))
            .try_execute(GenerateQuizInput::new(12))
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_progress_walks_every_stage() {
        let progress = RecordingProgress::default();
        let outcome = use_case(FakeCatalog::new(1, 1, 1))
            .execute_with_progress(GenerateQuizInput::new(3), &progress)
            .await;
        assert!(outcome.is_success());

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(events.first().map(String::as_str), Some("start validating 1"));
        assert_eq!(events.last().map(String::as_str), Some("done finalizing"));
        assert!(events.contains(&"start sampling_and_building 3".to_string()));
        assert_eq!(events.iter().filter(|e| e.starts_with("built")).count(), 3);
    }
}
