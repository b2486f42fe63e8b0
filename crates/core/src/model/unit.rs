use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown curriculum unit: {0}")]
pub struct UnknownUnit(pub String);

/// Units of the Cambridge Psychology course, in syllabus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CurriculumUnit {
    ExperimentsAndSelfReports,
    CaseStudiesAndObservations,
    CorrelationalAndLongitudinal,
    ResearchMethodsExam,
    SocialApproach,
    LearningApproach,
    CognitiveApproach,
    BiologicalApproach,
}

impl CurriculumUnit {
    pub const ALL: [CurriculumUnit; 8] = [
        CurriculumUnit::ExperimentsAndSelfReports,
        CurriculumUnit::CaseStudiesAndObservations,
        CurriculumUnit::CorrelationalAndLongitudinal,
        CurriculumUnit::ResearchMethodsExam,
        CurriculumUnit::SocialApproach,
        CurriculumUnit::LearningApproach,
        CurriculumUnit::CognitiveApproach,
        CurriculumUnit::BiologicalApproach,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ExperimentsAndSelfReports => "Unit 1: Experiments and Self Reports",
            Self::CaseStudiesAndObservations => "Unit 2: Case Studies and Observations",
            Self::CorrelationalAndLongitudinal => "Unit 3: Correlational and Longitudinal Designs",
            Self::ResearchMethodsExam => "Cumulative Exam: Research Methods",
            Self::SocialApproach => "Unit 4: Social Approach",
            Self::LearningApproach => "Unit 5: Learning Approach",
            Self::CognitiveApproach => "Unit 6: Cognitive Approach",
            Self::BiologicalApproach => "Unit 7: Biological Approach",
        }
    }
}

impl Default for CurriculumUnit {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for CurriculumUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CurriculumUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s)
            .ok_or_else(|| UnknownUnit(s.to_owned()))
    }
}
