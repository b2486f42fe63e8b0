use study_core::model::{Category, ResourceType, StudySet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind_class: &'static str,
    pub icon: &'static str,
    pub badge: Option<&'static str>,
    pub footer_label: String,
}

#[must_use]
pub fn map_set_card(set: &StudySet) -> SetCardVm {
    let kind = set.resource_type();
    let (kind_class, icon) = match kind {
        ResourceType::Video => ("kind-video", "▶"),
        ResourceType::Podcast => ("kind-podcast", "🎙"),
        ResourceType::Flashcard => ("kind-flashcard", "▤"),
        ResourceType::Note => ("kind-note", "✎"),
    };

    let badge = match set.category() {
        Category::Creator => Some("OFFICIAL"),
        Category::Public => Some("PUBLIC"),
        Category::Personal => None,
    };

    let footer_label = if kind == ResourceType::Flashcard {
        format!("{} Cards", set.cards().len())
    } else {
        kind.label().to_string()
    };

    let description = if set.description().is_empty() {
        kind.label().to_string()
    } else {
        set.description().to_string()
    };

    SetCardVm {
        id: set.id().to_string(),
        title: set.title().to_string(),
        description,
        kind_class,
        icon,
        badge,
        footer_label,
    }
}

#[must_use]
pub fn map_set_cards(sets: &[StudySet]) -> Vec<SetCardVm> {
    sets.iter().map(map_set_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::time::fixed_now;

    fn seeded(id: &str) -> StudySet {
        storage::seed::library(fixed_now())
            .unwrap()
            .into_iter()
            .find(|set| set.id().as_str() == id)
            .unwrap()
    }

    #[test]
    fn flashcard_sets_show_card_count() {
        let vm = map_set_card(&seeded("c3"));
        assert_eq!(vm.footer_label, "4 Cards");
        assert_eq!(vm.badge, Some("OFFICIAL"));
        assert_eq!(vm.kind_class, "kind-flashcard");
    }

    #[test]
    fn other_sets_show_their_kind() {
        let vm = map_set_card(&seeded("p1"));
        assert_eq!(vm.footer_label, "note");
        assert_eq!(vm.badge, Some("PUBLIC"));
    }
}
