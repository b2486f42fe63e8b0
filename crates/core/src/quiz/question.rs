use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::model::{Card, CardId};

use super::QuizError;

/// Options shown per question: the correct definition plus distractors.
pub const OPTION_COUNT: usize = 4;

/// Smallest card set that yields a full set of distractors for every card.
pub const MIN_CARDS: usize = OPTION_COUNT;

const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// One multiple-choice prompt derived from a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    card_id: CardId,
    term: String,
    correct_definition: String,
    options: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn correct_definition(&self) -> &str {
        &self.correct_definition
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_definition
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}

/// Build one question per card and return them in random order.
///
/// Each question offers the card's own definition plus three definitions
/// sampled without replacement from the other cards of the set, in a uniformly
/// shuffled order. Definitions are compared as text only, so two cards sharing
/// a definition can produce visually identical options.
///
/// # Errors
///
/// Returns `QuizError::InsufficientCards` when fewer than [`MIN_CARDS`] cards
/// are supplied.
pub fn generate_questions<R: Rng + ?Sized>(
    cards: &[Card],
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    if cards.len() < MIN_CARDS {
        return Err(QuizError::InsufficientCards {
            found: cards.len(),
            required: MIN_CARDS,
        });
    }

    let mut questions = cards
        .iter()
        .enumerate()
        .map(|(position, card)| build_question(position, card, cards, rng))
        .collect::<Vec<_>>();
    questions.shuffle(rng);
    Ok(questions)
}

fn build_question<R: Rng + ?Sized>(
    position: usize,
    card: &Card,
    cards: &[Card],
    rng: &mut R,
) -> Question {
    let pool = cards
        .iter()
        .enumerate()
        .filter(|(other, _)| *other != position)
        .map(|(_, other)| other.definition())
        .collect::<Vec<_>>();

    let mut options = pool
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|definition| (*definition).to_owned())
        .collect::<Vec<_>>();
    options.push(card.definition().to_owned());
    options.shuffle(rng);

    Question {
        card_id: card.id().clone(),
        term: card.term().to_owned(),
        correct_definition: card.definition().to_owned(),
        options,
    }
}
