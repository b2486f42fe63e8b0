use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use services::{
    Clock, ContentGenerator, CreationError, CreationRequest, CreationService, GenerationError,
    InlineAttachment, LibraryService,
};
use storage::{InMemoryRepository, StudySetRepository};
use study_core::model::{CardDraft, Category, CurriculumUnit, ResourceType, SetBody};
use study_core::time::fixed_now;

#[derive(Default)]
struct FakeGenerator {
    drafts: Vec<CardDraft>,
    script: Option<String>,
    audio: Option<String>,
    fail: bool,
    materials: Mutex<Vec<String>>,
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn flashcards(
        &self,
        material: &str,
        _attachment: Option<&InlineAttachment>,
    ) -> Result<Vec<CardDraft>, GenerationError> {
        self.materials.lock().unwrap().push(material.to_owned());
        if self.fail {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(self.drafts.clone())
    }

    async fn podcast_script(&self, _notes: &str) -> Result<Option<String>, GenerationError> {
        Ok(self.script.clone())
    }

    async fn speech(&self, _script: &str) -> Result<Option<String>, GenerationError> {
        Ok(self.audio.clone())
    }
}

fn service(generator: FakeGenerator) -> (CreationService, Arc<FakeGenerator>, InMemoryRepository) {
    let repo = InMemoryRepository::new();
    let clock = Clock::fixed(fixed_now());
    let library = LibraryService::new(clock, Arc::new(repo.clone()));
    let generator = Arc::new(generator);
    let svc = CreationService::new(clock, generator.clone(), library);
    (svc, generator, repo)
}

fn drafts() -> Vec<CardDraft> {
    vec![
        CardDraft::new("Schema", "A mental framework"),
        CardDraft::new("", "dropped"),
        CardDraft::new("Encoding", "Converting input into memory"),
    ]
}

#[tokio::test]
async fn flashcards_from_text_are_stored_as_personal_set() {
    let (svc, _, repo) = service(FakeGenerator {
        drafts: drafts(),
        ..FakeGenerator::default()
    });

    let set = svc
        .create(
            CreationRequest::new(ResourceType::Flashcard, "Cognitive psychology basics")
                .with_unit(CurriculumUnit::CognitiveApproach),
        )
        .await
        .unwrap();

    assert_eq!(set.title(), "AI Flashcards: Cognitive psych...");
    assert_eq!(set.description(), "Generated from your materials");
    assert_eq!(set.category(), Category::Personal);
    assert_eq!(set.unit(), Some(CurriculumUnit::CognitiveApproach));
    assert_eq!(set.cards().len(), 2);
    let stamp = fixed_now().timestamp_millis();
    assert_eq!(set.cards()[1].id().as_str(), format!("gen-{stamp}-1"));
    assert!(set.id().as_str().starts_with("ai-"));

    let stored = repo.list_sets().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id(), set.id());
}

#[tokio::test]
async fn image_only_flashcards_use_image_title() {
    let (svc, generator, _) = service(FakeGenerator {
        drafts: drafts(),
        ..FakeGenerator::default()
    });
    let image = InlineAttachment::from_bytes("diagram.png", "image/png", b"\x89PNG");

    let set = svc
        .create(CreationRequest::new(ResourceType::Flashcard, "").with_attachment(image))
        .await
        .unwrap();

    assert_eq!(set.title(), "AI Flashcards from Image");
    assert_eq!(
        generator.materials.lock().unwrap().as_slice(),
        ["Generate from the image"]
    );
}

#[tokio::test]
async fn missing_input_never_calls_generator() {
    let (svc, generator, repo) = service(FakeGenerator::default());

    let err = svc
        .create(CreationRequest::new(ResourceType::Flashcard, "  "))
        .await
        .unwrap_err();

    assert!(matches!(err, CreationError::MissingInput));
    assert!(generator.materials.lock().unwrap().is_empty());
    assert!(repo.list_sets().await.unwrap().is_empty());
}

#[tokio::test]
async fn generation_failure_leaves_library_untouched() {
    let (svc, _, repo) = service(FakeGenerator {
        fail: true,
        ..FakeGenerator::default()
    });

    let err = svc
        .create(CreationRequest::new(ResourceType::Flashcard, "Memory"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Something went wrong generating your content.");
    assert!(repo.list_sets().await.unwrap().is_empty());
}

#[tokio::test]
async fn podcast_without_audio_is_rejected() {
    let (svc, _, repo) = service(FakeGenerator {
        script: Some("Host: welcome".into()),
        audio: None,
        ..FakeGenerator::default()
    });

    let err = svc
        .create(CreationRequest::new(ResourceType::Podcast, "Notes on memory"))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Failed to generate audio. Try shorter text.");
    assert!(repo.list_sets().await.unwrap().is_empty());
}

#[tokio::test]
async fn podcast_stores_audio_uri() {
    let (svc, _, _) = service(FakeGenerator {
        script: Some("Host: welcome".into()),
        audio: Some("data:audio/wav;base64,AAAA".into()),
        ..FakeGenerator::default()
    });

    let set = svc
        .create(CreationRequest::new(ResourceType::Podcast, "Notes on memory"))
        .await
        .unwrap();

    assert_eq!(set.title(), "AI Podcast: Notes on memory...");
    assert_eq!(
        set.body(),
        &SetBody::Podcast {
            audio_url: Some("data:audio/wav;base64,AAAA".into())
        }
    );
}

#[tokio::test]
async fn notes_store_input_verbatim() {
    let (svc, _, _) = service(FakeGenerator::default());

    let set = svc
        .create(CreationRequest::new(ResourceType::Note, "Milgram (1963) obedience"))
        .await
        .unwrap();

    assert_eq!(set.title(), "AI Notes: Milgram (1963) ...");
    assert_eq!(
        set.body(),
        &SetBody::Note {
            content: "Milgram (1963) obedience".into()
        }
    );
}

#[tokio::test]
async fn video_generation_is_unsupported() {
    let (svc, _, _) = service(FakeGenerator::default());
    let err = svc
        .create(CreationRequest::new(ResourceType::Video, "anything"))
        .await
        .unwrap_err();
    assert!(matches!(err, CreationError::Unsupported("video")));
}
