use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Card, SessionToken};

use super::{Question, QuizError, generate_questions};

/// Where a learn-mode session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer { index: usize },
    Revealed { index: usize, selection: String },
    Finished { score: u32, total: usize },
}

/// Authorises the auto-advance that follows one revealed answer.
///
/// Issued when an answer is accepted; only honoured while the same session is
/// still revealing the same question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    pub session: SessionToken,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    Submit(String),
    Advance(AdvanceTicket),
    Restart,
}

/// One playthrough over a fixed question set.
///
/// Transitions consume the session and return its successor, so the value
/// held by the caller is always the single live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    token: SessionToken,
    questions: Vec<Question>,
    phase: QuizPhase,
    score: u32,
}

impl QuizSession {
    /// Generate questions for `cards` and start at the first one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InsufficientCards` if fewer than four cards are given.
    pub fn start<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Result<Self, QuizError> {
        let questions = generate_questions(cards, rng)?;
        Ok(Self::begin(questions))
    }

    fn begin(questions: Vec<Question>) -> Self {
        Self {
            token: SessionToken::fresh(),
            questions,
            phase: QuizPhase::AwaitingAnswer { index: 0 },
            score: 0,
        }
    }

    #[must_use]
    pub fn token(&self) -> SessionToken {
        self.token
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Finished { .. })
    }

    /// Index of the question on screen; `None` once finished.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            QuizPhase::AwaitingAnswer { index } | QuizPhase::Revealed { index, .. } => Some(index),
            QuizPhase::Finished { .. } => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.questions.get(index))
    }

    /// The option picked for the current question, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&str> {
        match &self.phase {
            QuizPhase::Revealed { selection, .. } => Some(selection),
            _ => None,
        }
    }

    /// Ticket for the pending auto-advance while an answer is revealed.
    #[must_use]
    pub fn pending_advance(&self) -> Option<AdvanceTicket> {
        match self.phase {
            QuizPhase::Revealed { index, .. } => Some(AdvanceTicket {
                session: self.token,
                index,
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn reduce<R: Rng + ?Sized>(self, action: QuizAction, rng: &mut R) -> Self {
        match action {
            QuizAction::Submit(option) => self.submit(&option),
            QuizAction::Advance(ticket) => self.advance(ticket),
            QuizAction::Restart => self.restart(rng),
        }
    }

    /// Answer the current question.
    ///
    /// Only the first answer per question counts; anything submitted while an
    /// answer is revealed, after the session finished, or that is not one of
    /// the current options leaves the session unchanged.
    #[must_use]
    pub fn submit(mut self, option: &str) -> Self {
        let QuizPhase::AwaitingAnswer { index } = self.phase else {
            return self;
        };
        let Some(question) = self.questions.get(index) else {
            return self;
        };
        if !question.has_option(option) {
            return self;
        }
        if question.is_correct(option) {
            self.score += 1;
        }
        self.phase = QuizPhase::Revealed {
            index,
            selection: option.to_owned(),
        };
        self
    }

    /// Move past a revealed answer to the next question or the final score.
    ///
    /// Tickets from another session or question are stale and ignored.
    #[must_use]
    pub fn advance(mut self, ticket: AdvanceTicket) -> Self {
        if self.pending_advance() != Some(ticket) {
            return self;
        }
        let next = ticket.index + 1;
        self.phase = if next < self.questions.len() {
            QuizPhase::AwaitingAnswer { index: next }
        } else {
            QuizPhase::Finished {
                score: self.score,
                total: self.questions.len(),
            }
        };
        self
    }

    /// Replace this session with a new one over the same questions in a new
    /// order. Distractors are kept; the score and position reset.
    #[must_use]
    pub fn restart<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        if self.questions.is_empty() {
            return self;
        }
        let mut questions = self.questions;
        questions.shuffle(rng);
        Self::begin(questions)
    }
}
