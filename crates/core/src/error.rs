use thiserror::Error;

use crate::flip::EmptyDeck;
use crate::model::{CardError, StudySetError, UnknownUnit, VideoUrlError};
use crate::quiz::QuizError;

/// Any validation failure raised by the domain layer.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    StudySet(#[from] StudySetError),
    #[error(transparent)]
    Unit(#[from] UnknownUnit),
    #[error(transparent)]
    Video(#[from] VideoUrlError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Flip(#[from] EmptyDeck),
}
