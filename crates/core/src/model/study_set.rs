use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    card::Card,
    ids::StudySetId,
    text::{TextError, TitleText},
    unit::CurriculumUnit,
    video::VideoUrl,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudySetError {
    #[error("title: {0}")]
    Title(#[source] TextError),

    #[error("a flashcard set needs at least one card")]
    NoCards,

    #[error("note content cannot be empty")]
    EmptyNote,
}

//
// ─── CLASSIFICATION ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Flashcard,
    Note,
    Podcast,
    Video,
}

impl ResourceType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Flashcard => "flashcard",
            Self::Note => "note",
            Self::Podcast => "podcast",
            Self::Video => "video",
        }
    }
}

/// Who published a set and therefore where it is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Created by the learner; shown on the dashboard.
    Personal,
    /// Community sets in the public library.
    Public,
    /// Official course material, browsed per curriculum unit.
    Creator,
}

//
// ─── BODY ──────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SetBody {
    Flashcard { cards: Vec<Card> },
    Note { content: String },
    Podcast { audio_url: Option<String> },
    Video { video_url: VideoUrl },
}

impl SetBody {
    /// # Errors
    ///
    /// Returns `StudySetError::NoCards` for an empty card list.
    pub fn flashcards(cards: Vec<Card>) -> Result<Self, StudySetError> {
        if cards.is_empty() {
            return Err(StudySetError::NoCards);
        }
        Ok(Self::Flashcard { cards })
    }

    /// # Errors
    ///
    /// Returns `StudySetError::EmptyNote` for blank content.
    pub fn note(content: impl Into<String>) -> Result<Self, StudySetError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(StudySetError::EmptyNote);
        }
        Ok(Self::Note { content })
    }

    #[must_use]
    pub fn resource_type(&self) -> ResourceType {
        match self {
            Self::Flashcard { .. } => ResourceType::Flashcard,
            Self::Note { .. } => ResourceType::Note,
            Self::Podcast { .. } => ResourceType::Podcast,
            Self::Video { .. } => ResourceType::Video,
        }
    }
}

//
// ─── STUDY SET ─────────────────────────────────────────────────────────────────
//

/// A single library resource: a flashcard set, note, podcast or video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySet {
    id: StudySetId,
    title: TitleText,
    description: String,
    category: Category,
    unit: Option<CurriculumUnit>,
    body: SetBody,
    created_at: DateTime<Utc>,
}

impl StudySet {
    /// # Errors
    ///
    /// Returns `StudySetError::Title` if the title is blank.
    pub fn new(
        id: StudySetId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        unit: Option<CurriculumUnit>,
        body: SetBody,
        created_at: DateTime<Utc>,
    ) -> Result<Self, StudySetError> {
        let title = TitleText::parse(title).map_err(StudySetError::Title)?;
        Ok(Self {
            id,
            title,
            description: description.into(),
            category,
            unit,
            body,
            created_at,
        })
    }

    #[must_use]
    pub fn id(&self) -> &StudySetId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn unit(&self) -> Option<CurriculumUnit> {
        self.unit
    }

    #[must_use]
    pub fn body(&self) -> &SetBody {
        &self.body
    }

    #[must_use]
    pub fn resource_type(&self) -> ResourceType {
        self.body.resource_type()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Cards of a flashcard set; empty for other resource types.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.body {
            SetBody::Flashcard { cards } => cards,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardId;
    use crate::time::fixed_now;

    fn card(id: &str) -> Card {
        Card::new(CardId::new(id), format!("term {id}"), format!("def {id}")).unwrap()
    }

    #[test]
    fn blank_title_is_rejected() {
        let err = StudySet::new(
            StudySetId::new("s1"),
            "  ",
            "",
            Category::Personal,
            None,
            SetBody::note("text").unwrap(),
            fixed_now(),
        )
        .unwrap_err();
        assert!(matches!(err, StudySetError::Title(_)));
    }

    #[test]
    fn flashcard_body_needs_cards() {
        assert_eq!(SetBody::flashcards(Vec::new()).unwrap_err(), StudySetError::NoCards);
    }

    #[test]
    fn note_body_needs_content() {
        assert_eq!(SetBody::note(" \n").unwrap_err(), StudySetError::EmptyNote);
    }

    #[test]
    fn cards_are_exposed_only_for_flashcard_sets() {
        let set = StudySet::new(
            StudySetId::new("s1"),
            "Key terms",
            "IV and DV",
            Category::Creator,
            Some(CurriculumUnit::ExperimentsAndSelfReports),
            SetBody::flashcards(vec![card("1"), card("2")]).unwrap(),
            fixed_now(),
        )
        .unwrap();
        assert_eq!(set.resource_type(), ResourceType::Flashcard);
        assert_eq!(set.cards().len(), 2);

        let podcast = StudySet::new(
            StudySetId::new("s2"),
            "Bobo doll",
            "",
            Category::Creator,
            None,
            SetBody::Podcast { audio_url: None },
            fixed_now(),
        )
        .unwrap();
        assert!(podcast.cards().is_empty());
        assert_eq!(podcast.resource_type().label(), "podcast");
    }

    #[test]
    fn body_serializes_with_type_tag() {
        let body = SetBody::note("hello").unwrap();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["type"], "note");
        assert_eq!(json["content"], "hello");
    }
}
