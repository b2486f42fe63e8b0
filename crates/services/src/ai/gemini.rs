use std::env;

use async_trait::async_trait;
use reqwest::Client;
use study_core::model::CardDraft;

use super::wire::{GenerateContentRequest, GenerateContentResponse};
use super::{ContentGenerator, FLASHCARD_PROMPT, InlineAttachment, podcast_prompt};
use crate::error::GenerationError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_SPEECH_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_VOICE: &str = "Kore";

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub base_url: String,
    pub api_key: String,
    pub text_model: String,
    pub speech_model: String,
    pub voice: String,
}

impl GeminiConfig {
    /// Default endpoint and models for `api_key`.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.into(),
            speech_model: DEFAULT_SPEECH_MODEL.into(),
            voice: DEFAULT_VOICE.into(),
        }
    }

    /// Reads `GEMINI_API_KEY` (or `API_KEY`). Returns `None` when no key is set.
    ///
    /// `GEMINI_BASE_URL`, `GEMINI_TEXT_MODEL`, `GEMINI_SPEECH_MODEL` and
    /// `GEMINI_VOICE` override the defaults.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var("GEMINI_TEXT_MODEL") {
            config.text_model = model;
        }
        if let Ok(model) = env::var("GEMINI_SPEECH_MODEL") {
            config.speech_model = model;
        }
        if let Ok(voice) = env::var("GEMINI_VOICE") {
            config.voice = voice;
        }
        Some(config)
    }
}

/// REST client for the hosted generative-language API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    config: Option<GeminiConfig>,
}

impl GeminiClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<GeminiConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    fn config(&self) -> Result<&GeminiConfig, GenerationError> {
        self.config.as_ref().ok_or(GenerationError::Disabled)
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let config = self.config()?;
        let url = format!(
            "{}/models/{model}:generateContent",
            config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &config.api_key)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::warn!(model, status = %response.status(), "generateContent failed");
            return Err(GenerationError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn flashcards(
        &self,
        material: &str,
        attachment: Option<&InlineAttachment>,
    ) -> Result<Vec<CardDraft>, GenerationError> {
        let config = self.config()?;
        let prompt = format!("{FLASHCARD_PROMPT}\n\nMaterial:\n{material}");
        let request = GenerateContentRequest::flashcards(prompt, attachment);
        let response = self.generate(&config.text_model, &request).await?;

        let Some(raw) = response.text() else {
            return Ok(Vec::new());
        };
        let drafts: Vec<CardDraft> = serde_json::from_str(&raw)?;
        tracing::debug!(count = drafts.len(), "generated flashcards");
        Ok(drafts)
    }

    async fn podcast_script(&self, notes: &str) -> Result<Option<String>, GenerationError> {
        let config = self.config()?;
        let request = GenerateContentRequest::text(podcast_prompt(notes));
        let response = self.generate(&config.text_model, &request).await?;
        Ok(response.text())
    }

    async fn speech(&self, script: &str) -> Result<Option<String>, GenerationError> {
        let config = self.config()?;
        let request = GenerateContentRequest::speech(script, &config.voice);
        let response = self.generate(&config.speech_model, &request).await?;
        Ok(response
            .inline_data()
            .map(|audio| format!("data:audio/wav;base64,{}", audio.data)))
    }
}
