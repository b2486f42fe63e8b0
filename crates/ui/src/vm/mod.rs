mod create_vm;
mod curriculum_vm;
mod flip_vm;
mod learn_vm;
mod set_card_vm;
mod study_vm;

pub use create_vm::{CreateForm, CreateMode, kind_label};
pub use curriculum_vm::{UnitSectionVm, map_curriculum};
pub use flip_vm::{FlipCardVm, map_flip_card};
pub use learn_vm::{LearnVm, OptionStatus, OptionVm, map_learn_state};
pub use set_card_vm::{SetCardVm, map_set_card, map_set_cards};
pub use study_vm::{StudyLayout, StudyPageVm, map_study_page};
