use services::UnitResources;
use study_core::model::CurriculumUnit;

use super::set_card_vm::{SetCardVm, map_set_cards};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitSectionVm {
    pub unit: CurriculumUnit,
    pub title: &'static str,
    pub count_label: String,
    pub resources: Vec<SetCardVm>,
}

impl UnitSectionVm {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[must_use]
pub fn map_curriculum(units: &[UnitResources]) -> Vec<UnitSectionVm> {
    units
        .iter()
        .map(|entry| UnitSectionVm {
            unit: entry.unit,
            title: entry.unit.label(),
            count_label: format!("{} Resources", entry.sets.len()),
            resources: map_set_cards(&entry.sets),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_units_still_get_a_section() {
        let units = CurriculumUnit::ALL
            .into_iter()
            .map(|unit| UnitResources {
                unit,
                sets: Vec::new(),
            })
            .collect::<Vec<_>>();

        let sections = map_curriculum(&units);
        assert_eq!(sections.len(), 8);
        assert!(sections.iter().all(UnitSectionVm::is_empty));
        assert_eq!(sections[3].title, "Cumulative Exam: Research Methods");
        assert_eq!(sections[0].count_label, "0 Resources");
    }
}
