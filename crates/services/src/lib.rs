#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod creation_service;
pub mod error;
pub mod learn;
pub mod library_service;

pub use study_core::Clock;

pub use ai::{ContentGenerator, GeminiClient, GeminiConfig, InlineAttachment};
pub use app_services::AppServices;
pub use creation_service::{CreationRequest, CreationService};
pub use error::{CreationError, GenerationError, LearnError, LibraryError};
pub use learn::{DEFAULT_ADVANCE_DELAY, LearnService, LearnState, QuizRunner};
pub use library_service::{LibraryService, ManualContent, ManualSetInput, UnitResources};
