use std::sync::Arc;

use storage::StudySetRepository;
use study_core::Clock;
use study_core::model::{
    Card, CardDraft, CardId, Category, CurriculumUnit, SetBody, StudySet, StudySetId,
};

use crate::error::LibraryError;

const MANUAL_DESCRIPTION: &str = "Manually created study set";

/// Content of a set typed in by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManualContent {
    /// Rows of the card editor; incomplete rows are dropped.
    Flashcards(Vec<CardDraft>),
    Note(String),
}

/// Form data for manual set creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualSetInput {
    pub title: String,
    pub unit: Option<CurriculumUnit>,
    pub content: ManualContent,
}

/// Creator sets belonging to one curriculum unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitResources {
    pub unit: CurriculumUnit,
    pub sets: Vec<StudySet>,
}

/// Browsing and manual editing of the study library.
#[derive(Clone)]
pub struct LibraryService {
    clock: Clock,
    sets: Arc<dyn StudySetRepository>,
}

impl LibraryService {
    #[must_use]
    pub fn new(clock: Clock, sets: Arc<dyn StudySetRepository>) -> Self {
        Self { clock, sets }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Sets created by the learner, newest first.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Storage` if repository access fails.
    pub async fn personal_sets(&self) -> Result<Vec<StudySet>, LibraryError> {
        Ok(self.sets.list_by_category(Category::Personal).await?)
    }

    /// Community sets shown in the public library.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Storage` if repository access fails.
    pub async fn public_sets(&self) -> Result<Vec<StudySet>, LibraryError> {
        Ok(self.sets.list_by_category(Category::Public).await?)
    }

    /// Official sets grouped per unit, in syllabus order. Units without
    /// resources are included with an empty list.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Storage` if repository access fails.
    pub async fn curriculum(&self) -> Result<Vec<UnitResources>, LibraryError> {
        let official = self.sets.list_by_category(Category::Creator).await?;
        Ok(CurriculumUnit::ALL
            .into_iter()
            .map(|unit| UnitResources {
                unit,
                sets: official
                    .iter()
                    .filter(|set| set.unit() == Some(unit))
                    .cloned()
                    .collect(),
            })
            .collect())
    }

    /// Returns `Ok(None)` when the set does not exist.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Storage` if repository access fails.
    pub async fn get_set(&self, id: &StudySetId) -> Result<Option<StudySet>, LibraryError> {
        Ok(self.sets.get_set(id).await?)
    }

    /// # Errors
    ///
    /// Returns `LibraryError::Storage` if the set is missing or storage fails.
    pub async fn delete_set(&self, id: &StudySetId) -> Result<(), LibraryError> {
        self.sets.delete_set(id).await?;
        tracing::info!(set_id = %id, "deleted study set");
        Ok(())
    }

    /// Add a fully built set to the front of the library.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::Storage` if persistence fails.
    pub async fn add_set(&self, set: &StudySet) -> Result<(), LibraryError> {
        self.sets.upsert_set(set).await?;
        tracing::info!(
            set_id = %set.id(),
            kind = set.resource_type().label(),
            "added study set"
        );
        Ok(())
    }

    /// Validate a manual form and store the resulting personal set.
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::MissingTitle`, `LibraryError::NoCompleteCards` or
    /// `LibraryError::EmptyNote` for invalid forms, and `LibraryError::Storage`
    /// if persistence fails. Nothing is stored on error.
    pub async fn create_manual(&self, input: ManualSetInput) -> Result<StudySet, LibraryError> {
        if input.title.trim().is_empty() {
            return Err(LibraryError::MissingTitle);
        }

        let now = self.clock.now();
        let body = match input.content {
            ManualContent::Flashcards(drafts) => {
                let stamp = now.timestamp_millis();
                let cards = drafts
                    .into_iter()
                    .filter(CardDraft::is_complete)
                    .enumerate()
                    .map(|(index, draft)| draft.validate(CardId::new(format!("m{stamp}-{index}"))))
                    .collect::<Result<Vec<Card>, _>>()?;
                if cards.is_empty() {
                    return Err(LibraryError::NoCompleteCards);
                }
                SetBody::flashcards(cards)?
            }
            ManualContent::Note(content) => {
                if content.trim().is_empty() {
                    return Err(LibraryError::EmptyNote);
                }
                SetBody::note(content)?
            }
        };

        let set = StudySet::new(
            StudySetId::random("man"),
            input.title,
            MANUAL_DESCRIPTION,
            Category::Personal,
            input.unit,
            body,
            now,
        )?;
        self.add_set(&set).await?;
        Ok(set)
    }
}
