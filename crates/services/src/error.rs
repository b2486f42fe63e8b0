//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;
use study_core::model::{CardError, StudySetError};

/// Errors emitted by the generative-language client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("AI generation is not configured")]
    Disabled,
    #[error("AI generation returned an empty response")]
    EmptyResponse,
    #[error("AI generation request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("AI generation returned malformed flashcards: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unsupported attachment type: {0}")]
    UnsupportedAttachment(String),
    #[error("could not read attachment: {0}")]
    Attachment(#[from] std::io::Error),
}

/// Errors emitted by `LibraryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LibraryError {
    #[error("Please enter a title for your set.")]
    MissingTitle,
    #[error("Please add at least one complete flashcard.")]
    NoCompleteCards,
    #[error("Please enter some content for your note.")]
    EmptyNote,
    #[error(transparent)]
    Card(#[from] CardError),
    #[error(transparent)]
    StudySet(#[from] StudySetError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the AI creation flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CreationError {
    #[error("add some text or an image to generate from")]
    MissingInput,
    #[error("{0} sets cannot be generated")]
    Unsupported(&'static str),
    #[error("the AI returned no usable flashcards")]
    NoCards,
    #[error("Failed to generate audio. Try shorter text.")]
    NoAudio,
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Library(#[from] LibraryError),
}

impl CreationError {
    /// Text for the alert shown when creation fails.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Generation(_) | Self::Library(LibraryError::Storage(_)) => {
                "Something went wrong generating your content.".to_owned()
            }
            other => other.to_string(),
        }
    }
}

/// Errors emitted while opening learn mode.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LearnError {
    #[error("study set not found")]
    NotFound,
    #[error("no async runtime available for auto-advance timers")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
    #[error(transparent)]
    Library(#[from] LibraryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_failures_use_generic_alert() {
        let err = CreationError::Generation(GenerationError::EmptyResponse);
        assert_eq!(err.user_message(), "Something went wrong generating your content.");
    }

    #[test]
    fn validation_failures_keep_their_message() {
        let err = CreationError::Library(LibraryError::MissingTitle);
        assert_eq!(err.user_message(), "Please enter a title for your set.");
        assert_eq!(
            CreationError::NoAudio.user_message(),
            "Failed to generate audio. Try shorter text."
        );
    }
}
