//! Generative-language integration used by the AI creation flow.

mod attachment;
mod gemini;
mod wire;

use async_trait::async_trait;
use study_core::model::CardDraft;

use crate::error::GenerationError;

pub use attachment::InlineAttachment;
pub use gemini::{GeminiClient, GeminiConfig};

/// Instruction sent with every flashcard request.
pub const FLASHCARD_PROMPT: &str = "Generate a list of 5-10 concise flashcards (term and definition) based on the provided material. The definitions should be easy to memorize.";

/// Notes beyond this many characters are cut before scripting a podcast.
pub const PODCAST_NOTES_LIMIT: usize = 5000;

/// Backend able to turn study material into flashcards and spoken audio.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Term/definition pairs drawn from `material` and the optional attachment.
    /// An empty response yields an empty list.
    async fn flashcards(
        &self,
        material: &str,
        attachment: Option<&InlineAttachment>,
    ) -> Result<Vec<CardDraft>, GenerationError>;

    /// A short conversational podcast script, or `None` if nothing came back.
    async fn podcast_script(&self, notes: &str) -> Result<Option<String>, GenerationError>;

    /// Spoken audio for `script` as a playable `data:` URI, or `None` if the
    /// response carried no audio.
    async fn speech(&self, script: &str) -> Result<Option<String>, GenerationError>;
}

/// Prompt asking for a podcast script from at most [`PODCAST_NOTES_LIMIT`] characters of notes.
#[must_use]
pub fn podcast_prompt(notes: &str) -> String {
    let notes = notes.chars().take(PODCAST_NOTES_LIMIT).collect::<String>();
    format!(
        "Convert the following notes into a short, engaging, 2-minute podcast script for a student. Keep it conversational. \n\nNotes: {notes}"
    )
}
