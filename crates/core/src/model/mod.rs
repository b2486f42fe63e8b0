mod card;
mod ids;
mod study_set;
mod text;
mod unit;
mod video;

pub use ids::{CardId, ParseIdError, SessionToken, StudySetId};
pub use text::{TextError, TitleText};

pub use card::{Card, CardDraft, CardError};
pub use study_set::{Category, ResourceType, SetBody, StudySet, StudySetError};
pub use unit::{CurriculumUnit, UnknownUnit};
pub use video::{VideoUrl, VideoUrlError};
