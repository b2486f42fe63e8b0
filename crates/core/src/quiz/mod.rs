//! Learn mode: multiple-choice questions built from a flashcard set, and the
//! session state machine that walks through them.

mod question;
mod session;

use thiserror::Error;

pub use question::{MIN_CARDS, OPTION_COUNT, Question, generate_questions};
pub use session::{AdvanceTicket, QuizAction, QuizPhase, QuizSession};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("learn mode needs at least {required} cards, found {found}")]
    InsufficientCards { found: usize, required: usize },
}
