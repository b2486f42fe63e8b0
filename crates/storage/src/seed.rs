//! Built-in course library shown on first launch.

use chrono::{DateTime, Utc};
use study_core::model::{
    Card, CardId, Category, CurriculumUnit, SetBody, StudySet, StudySetId, VideoUrl,
};

type SeedCard = (&'static str, &'static str, &'static str);

const RESEARCH_METHODS_TERMS: [SeedCard; 4] = [
    (
        "1",
        "Independent Variable (IV)",
        "The variable manipulated by the researcher to see if it causes a change.",
    ),
    (
        "2",
        "Dependent Variable (DV)",
        "The variable measured to see if it changes as a result of the IV.",
    ),
    (
        "3",
        "Demand Characteristics",
        "Cues in an experiment that tell the participant what behavior is expected.",
    ),
    (
        "4",
        "Ecological Validity",
        "The extent to which the findings of a research study are able to be generalized to real-life settings.",
    ),
];

const TAXI_DRIVER_TERMS: [SeedCard; 3] = [
    (
        "m1",
        "Aim",
        "To investigate whether changes could be detected in the brains of London taxi drivers and to see if there was a correlation between time spent driving and brain structure.",
    ),
    ("m2", "Sample", "16 right-handed male London taxi drivers."),
    (
        "m3",
        "VBM",
        "Voxel-Based Morphometry - used to measure the density of grey matter in the brain.",
    ),
];

const CANLI_NOTES: &str = "The aim was to show that emotive images will be remembered better than those that have little emotional impact on an individual.\n\nParticipants were shown 96 scenes...";

fn cards(seed: &[SeedCard]) -> Result<Vec<Card>, study_core::Error> {
    seed.iter()
        .map(|(id, term, definition)| {
            Card::new(CardId::new(*id), *term, *definition).map_err(Into::into)
        })
        .collect()
}

/// The official and public sets every library starts with, stamped `now`.
///
/// # Errors
///
/// Returns a domain error if a built-in set fails validation.
pub fn library(now: DateTime<Utc>) -> Result<Vec<StudySet>, study_core::Error> {
    Ok(vec![
        StudySet::new(
            StudySetId::new("c1"),
            "Milgram (1963) Obedience",
            "Video summary of the shock experiment.",
            Category::Creator,
            Some(CurriculumUnit::SocialApproach),
            SetBody::Video {
                video_url: VideoUrl::parse("https://www.youtube.com/watch?v=mOUEC5YXV8U")?,
            },
            now,
        )?,
        StudySet::new(
            StudySetId::new("c2"),
            "Bandura et al. - Bobo Doll",
            "Key study details for the Learning Approach.",
            Category::Creator,
            Some(CurriculumUnit::LearningApproach),
            SetBody::Podcast { audio_url: None },
            now,
        )?,
        StudySet::new(
            StudySetId::new("c3"),
            "Research Methods Key Terms",
            "IV, DV, Hypothesis types, and designs.",
            Category::Creator,
            Some(CurriculumUnit::ExperimentsAndSelfReports),
            SetBody::flashcards(cards(&RESEARCH_METHODS_TERMS)?)?,
            now,
        )?,
        StudySet::new(
            StudySetId::new("c4"),
            "Maguire - Taxi Drivers",
            "Brain plasticity and the hippocampus.",
            Category::Creator,
            Some(CurriculumUnit::BiologicalApproach),
            SetBody::flashcards(cards(&TAXI_DRIVER_TERMS)?)?,
            now,
        )?,
        StudySet::new(
            StudySetId::new("p1"),
            "Canli et al. Study Guide",
            "Amygdala activation notes.",
            Category::Public,
            Some(CurriculumUnit::BiologicalApproach),
            SetBody::note(CANLI_NOTES)?,
            now,
        )?,
    ])
}
