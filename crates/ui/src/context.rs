use std::sync::Arc;

use services::{AppServices, CreationService, LearnService, LibraryService};

pub trait UiApp: Send + Sync {
    fn library(&self) -> Arc<LibraryService>;
    fn creation(&self) -> Arc<CreationService>;
    fn learn(&self) -> Arc<LearnService>;
    fn ai_enabled(&self) -> bool;
}

impl UiApp for AppServices {
    fn library(&self) -> Arc<LibraryService> {
        AppServices::library(self)
    }

    fn creation(&self) -> Arc<CreationService> {
        AppServices::creation(self)
    }

    fn learn(&self) -> Arc<LearnService> {
        AppServices::learn(self)
    }

    fn ai_enabled(&self) -> bool {
        AppServices::ai_enabled(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    library: Arc<LibraryService>,
    creation: Arc<CreationService>,
    learn: Arc<LearnService>,
    ai_enabled: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            library: app.library(),
            creation: app.creation(),
            learn: app.learn(),
            ai_enabled: app.ai_enabled(),
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

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
