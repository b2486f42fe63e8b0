use std::sync::Arc;

use study_core::Clock;
use study_core::model::{
    CardId, Category, CurriculumUnit, ResourceType, SetBody, StudySet, StudySetId,
};

use crate::ai::{ContentGenerator, InlineAttachment};
use crate::error::{CreationError, LibraryError};
use crate::library_service::LibraryService;

const AI_DESCRIPTION: &str = "Generated from your materials";
const IMAGE_ONLY_MATERIAL: &str = "Generate from the image";
const TITLE_PREVIEW_CHARS: usize = 15;

/// Form data for the "Create with AI" tab.
#[derive(Debug, Clone)]
pub struct CreationRequest {
    pub kind: ResourceType,
    pub text: String,
    pub attachment: Option<InlineAttachment>,
    pub unit: Option<CurriculumUnit>,
}

impl CreationRequest {
    #[must_use]
    pub fn new(kind: ResourceType, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            attachment: None,
            unit: None,
        }
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: InlineAttachment) -> Self {
        self.attachment = Some(attachment);
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: CurriculumUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Builds personal study sets from user material through a [`ContentGenerator`].
///
/// The library is only written once generation has fully succeeded. Dropping
/// the returned future cancels any in-flight request.
#[derive(Clone)]
pub struct CreationService {
    clock: Clock,
    generator: Arc<dyn ContentGenerator>,
    library: LibraryService,
}

impl CreationService {
    #[must_use]
    pub fn new(clock: Clock, generator: Arc<dyn ContentGenerator>, library: LibraryService) -> Self {
        Self {
            clock,
            generator,
            library,
        }
    }

    /// Generate a set from `request` and add it to the library.
    ///
    /// # Errors
    ///
    /// Returns `CreationError::MissingInput` when neither text nor an image was
    /// supplied, `CreationError::NoCards` / `CreationError::NoAudio` when the
    /// generator returned nothing usable, and `CreationError::Generation` or
    /// `CreationError::Library` when a collaborator fails.
    pub async fn create(&self, request: CreationRequest) -> Result<StudySet, CreationError> {
        if !request.has_text() && request.attachment.is_none() {
            return Err(CreationError::MissingInput);
        }

        let (title, body) = match request.kind {
            ResourceType::Flashcard => self.flashcards(&request).await?,
            ResourceType::Podcast => self.podcast(&request).await?,
            ResourceType::Note => note(&request)?,
            ResourceType::Video => return Err(CreationError::Unsupported("video")),
        };

        let set = StudySet::new(
            StudySetId::random("ai"),
            title,
            AI_DESCRIPTION,
            Category::Personal,
            request.unit,
            body,
            self.clock.now(),
        )
        .map_err(LibraryError::from)?;
        self.library.add_set(&set).await?;
        Ok(set)
    }

    async fn flashcards(
        &self,
        request: &CreationRequest,
    ) -> Result<(String, SetBody), CreationError> {
        let material = if request.has_text() {
            request.text.as_str()
        } else {
            IMAGE_ONLY_MATERIAL
        };
        let drafts = self
            .generator
            .flashcards(material, request.attachment.as_ref())
            .await?;

        let stamp = self.clock.now_millis();
        let cards = drafts
            .into_iter()
            .filter(|draft| draft.is_complete())
            .enumerate()
            .map(|(index, draft)| draft.validate(CardId::generated(stamp, index)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(LibraryError::from)?;
        if cards.is_empty() {
            return Err(CreationError::NoCards);
        }
        tracing::info!(count = cards.len(), "generated flashcard set");

        let title = if request.has_text() {
            titled("AI Flashcards", &request.text)
        } else {
            "AI Flashcards from Image".to_owned()
        };
        let body = SetBody::flashcards(cards).map_err(LibraryError::from)?;
        Ok((title, body))
    }

    async fn podcast(&self, request: &CreationRequest) -> Result<(String, SetBody), CreationError> {
        if !request.has_text() {
            return Err(CreationError::MissingInput);
        }
        let script = self
            .generator
            .podcast_script(&request.text)
            .await?
            .ok_or(CreationError::NoAudio)?;

        let audio = match self.generator.speech(&script).await {
            Ok(Some(audio)) => audio,
            Ok(None) => return Err(CreationError::NoAudio),
            Err(err) => {
                tracing::warn!(error = %err, "speech synthesis failed");
                return Err(CreationError::NoAudio);
            }
        };

        Ok((
            titled("AI Podcast", &request.text),
            SetBody::Podcast {
                audio_url: Some(audio),
            },
        ))
    }
}

fn note(request: &CreationRequest) -> Result<(String, SetBody), CreationError> {
    if !request.has_text() {
        return Err(CreationError::MissingInput);
    }
    let body = SetBody::note(request.text.clone()).map_err(LibraryError::from)?;
    Ok((titled("AI Notes", &request.text), body))
}

fn titled(prefix: &str, text: &str) -> String {
    let preview: String = text.chars().take(TITLE_PREVIEW_CHARS).collect();
    format!("{prefix}: {preview}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_preview_the_first_fifteen_chars() {
        assert_eq!(
            titled("AI Notes", "Working memory model of Baddeley"),
            "AI Notes: Working memory ...",
        );
        assert_eq!(titled("AI Podcast", "short"), "AI Podcast: short...");
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let request = CreationRequest::new(ResourceType::Note, "   ");
        assert!(!request.has_text());
        assert!(matches!(note(&request), Err(CreationError::MissingInput)));
    }
}
