mod create;
mod curriculum;
mod dashboard;
mod flip;
mod learn;
mod library;
mod set_card;
mod state;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use create::CreateView;
pub use curriculum::CurriculumView;
pub use dashboard::DashboardView;
pub use flip::FlipPanel;
pub use learn::LearnPanel;
pub use library::LibraryView;
pub use set_card::SetCard;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use study::StudyView;
