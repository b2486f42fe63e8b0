use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{
    ids::CardId,
    text::{DefinitionText, TermText, TextError},
};

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Unvalidated term/definition pair, as typed into a form or returned by the
/// generation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    pub term: String,
    pub definition: String,
}

impl CardDraft {
    #[must_use]
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Both fields carry non-blank text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.term.trim().is_empty() && !self.definition.trim().is_empty()
    }

    /// # Errors
    ///
    /// Returns `CardError` if the term or definition is blank.
    pub fn validate(self, id: CardId) -> Result<Card, CardError> {
        let term = TermText::parse(self.term).map_err(CardError::Term)?;
        let definition = DefinitionText::parse(self.definition).map_err(CardError::Definition)?;
        Ok(Card {
            id,
            term,
            definition,
        })
    }
}

/// A term/definition pair. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    term: TermText,
    definition: DefinitionText,
}

impl Card {
    /// # Errors
    ///
    /// Returns `CardError` if the term or definition is blank.
    pub fn new(
        id: CardId,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Self, CardError> {
        CardDraft::new(term, definition).validate(id)
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn term(&self) -> &str {
        self.term.as_str()
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        self.definition.as_str()
    }
}

//
// ─── CARD VALIDATION ERRORS ────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("invalid term: {0}")]
    Term(#[source] TextError),

    #[error("invalid definition: {0}")]
    Definition(#[source] TextError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_fails_if_term_empty() {
        let err = CardDraft::new("   ", "ok")
            .validate(CardId::new("1"))
            .unwrap_err();
        assert!(matches!(err, CardError::Term(_)));
    }

    #[test]
    fn card_fails_if_definition_empty() {
        let err = CardDraft::new("ok", " ")
            .validate(CardId::new("1"))
            .unwrap_err();
        assert!(matches!(err, CardError::Definition(_)));
    }

    #[test]
    fn incomplete_draft_is_detected() {
        assert!(!CardDraft::new("IV", "").is_complete());
        assert!(!CardDraft::default().is_complete());
        assert!(CardDraft::new("IV", "manipulated").is_complete());
    }

    #[test]
    fn valid_card_keeps_id_and_text() {
        let card = Card::new(CardId::new("42"), "Sample", " 16 taxi drivers ").unwrap();
        assert_eq!(card.id(), &CardId::new("42"));
        assert_eq!(card.term(), "Sample");
        assert_eq!(card.definition(), "16 taxi drivers");
    }
}
