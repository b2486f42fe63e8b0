use study_core::model::{Card, SetBody, StudySet};

/// Which reader the study page opens for a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StudyLayout {
    Audio { src: String },
    Video { embed_url: String },
    Flashcards { cards: Vec<Card> },
    Reader { content: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyPageVm {
    pub title: String,
    pub description: String,
    pub unit_label: String,
    pub layout: StudyLayout,
}

#[must_use]
pub fn map_study_page(set: &StudySet) -> StudyPageVm {
    let layout = match set.body() {
        SetBody::Podcast {
            audio_url: Some(src),
        } => StudyLayout::Audio { src: src.clone() },
        SetBody::Video { video_url } => StudyLayout::Video {
            embed_url: video_url.embed_url(),
        },
        SetBody::Flashcard { cards } => StudyLayout::Flashcards {
            cards: cards.clone(),
        },
        SetBody::Note { content } => StudyLayout::Reader {
            content: content.clone(),
        },
        SetBody::Podcast { audio_url: None } => StudyLayout::Reader {
            content: String::new(),
        },
    };

    StudyPageVm {
        title: set.title().to_string(),
        description: set.description().to_string(),
        unit_label: set
            .unit()
            .map_or_else(|| "General".to_string(), |unit| unit.label().to_string()),
        layout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::time::fixed_now;

    fn page(id: &str) -> StudyPageVm {
        let set = storage::seed::library(fixed_now())
            .unwrap()
            .into_iter()
            .find(|set| set.id().as_str() == id)
            .unwrap();
        map_study_page(&set)
    }

    #[test]
    fn video_sets_use_embed_player() {
        let vm = page("c1");
        assert_eq!(
            vm.layout,
            StudyLayout::Video {
                embed_url: "https://www.youtube.com/embed/mOUEC5YXV8U".into()
            }
        );
        assert_eq!(vm.unit_label, "Unit 4: Social Approach");
    }

    #[test]
    fn podcast_without_audio_falls_back_to_reader() {
        assert!(matches!(page("c2").layout, StudyLayout::Reader { .. }));
    }

    #[test]
    fn flashcard_sets_open_the_viewer() {
        let StudyLayout::Flashcards { cards } = page("c3").layout else {
            panic!("expected flashcards");
        };
        assert_eq!(cards.len(), 4);
    }
}
