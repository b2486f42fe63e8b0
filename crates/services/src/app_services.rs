use std::sync::Arc;
use std::time::Duration;

use storage::Storage;
use tokio::runtime::Handle;

use crate::Clock;
use crate::ai::{ContentGenerator, GeminiClient};
use crate::creation_service::CreationService;
use crate::learn::LearnService;
use crate::library_service::LibraryService;

/// Assembles the app-facing services over one storage bundle.
#[derive(Clone)]
pub struct AppServices {
    library: Arc<LibraryService>,
    creation: Arc<CreationService>,
    learn: Arc<LearnService>,
    ai_enabled: bool,
}

impl AppServices {
    /// Wire services against `storage`, generating content with the Gemini
    /// client configured from the environment.
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, advance_delay: Duration, runtime: Handle) -> Self {
        let gemini = GeminiClient::from_env();
        let ai_enabled = gemini.enabled();
        if !ai_enabled {
            tracing::warn!("GEMINI_API_KEY not set; AI creation will fail until configured");
        }
        Self::with_generator(storage, clock, advance_delay, runtime, Arc::new(gemini), ai_enabled)
    }

    /// Wire services with an explicit content generator.
    #[must_use]
    pub fn with_generator(
        storage: &Storage,
        clock: Clock,
        advance_delay: Duration,
        runtime: Handle,
        generator: Arc<dyn ContentGenerator>,
        ai_enabled: bool,
    ) -> Self {
        let library = LibraryService::new(clock, Arc::clone(&storage.sets));
        let creation = CreationService::new(clock, generator, library.clone());
        let learn = LearnService::new(library.clone(), advance_delay, runtime);

        Self {
            library: Arc::new(library),
            creation: Arc::new(creation),
            learn: Arc::new(learn),
            ai_enabled,
        }
    }

    #[must_use]
    pub fn library(&self) -> Arc<LibraryService> {
        Arc::clone(&self.library)
    }

    #[must_use]
    pub fn creation(&self) -> Arc<CreationService> {
        Arc::clone(&self.creation)
    }

    #[must_use]
    pub fn learn(&self) -> Arc<LearnService> {
        Arc::clone(&self.learn)
    }

    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }
}
