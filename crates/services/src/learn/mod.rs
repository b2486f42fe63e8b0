//! Learn mode: a quiz session driven by a runner that owns the auto-advance timer.

mod runner;

use std::time::Duration;

use study_core::model::StudySetId;
use tokio::runtime::Handle;

use crate::error::LearnError;
use crate::library_service::LibraryService;

pub use runner::{LearnState, QuizRunner};

/// Pause between revealing an answer and loading the next question.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1500);

/// Opens learn-mode runners for sets in the library.
#[derive(Clone)]
pub struct LearnService {
    library: LibraryService,
    delay: Duration,
    runtime: Handle,
}

impl LearnService {
    #[must_use]
    pub fn new(library: LibraryService, delay: Duration, runtime: Handle) -> Self {
        Self {
            library,
            delay,
            runtime,
        }
    }

    /// Build with the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// Returns `LearnError::NoRuntime` outside a tokio runtime.
    pub fn on_current_runtime(library: LibraryService, delay: Duration) -> Result<Self, LearnError> {
        Ok(Self::new(library, delay, Handle::try_current()?))
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Load the set's cards and start a quiz over them.
    ///
    /// A set with too few cards still yields a runner; its state reports
    /// [`LearnState::Insufficient`].
    ///
    /// # Errors
    ///
    /// Returns `LearnError::NotFound` for unknown ids and
    /// `LearnError::Library` if the library cannot be read.
    pub async fn open(&self, set_id: &StudySetId) -> Result<QuizRunner, LearnError> {
        let set = self
            .library
            .get_set(set_id)
            .await?
            .ok_or(LearnError::NotFound)?;

        let runner = QuizRunner::new(self.delay, self.runtime.clone());
        if let Err(err) = runner.start(set.cards()) {
            tracing::debug!(set_id = %set_id, error = %err, "learn mode unavailable");
        }
        Ok(runner)
    }
}
