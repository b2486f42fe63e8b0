use services::LearnState;
use study_core::quiz::{QuizPhase, QuizSession};

/// How one answer button is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionStatus {
    Neutral,
    Correct,
    Incorrect,
    Dimmed,
}

impl OptionStatus {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Neutral => "learn-option",
            Self::Correct => "learn-option learn-option--correct",
            Self::Incorrect => "learn-option learn-option--incorrect",
            Self::Dimmed => "learn-option learn-option--dimmed",
        }
    }

    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        match self {
            Self::Correct => Some("✓"),
            Self::Incorrect => Some("✗"),
            Self::Neutral | Self::Dimmed => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub text: String,
    pub status: OptionStatus,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LearnVm {
    Loading,
    Insufficient {
        message: String,
    },
    Question {
        progress_label: String,
        score_label: String,
        term: String,
        options: Vec<OptionVm>,
    },
    Finished {
        score_label: String,
    },
}

#[must_use]
pub fn map_learn_state(state: &LearnState) -> LearnVm {
    match state {
        LearnState::NotStarted => LearnVm::Loading,
        LearnState::Insufficient { required, .. } => LearnVm::Insufficient {
            message: format!(
                "Not enough cards for Learn Mode! Add at least {required} flashcards to generate multiple choice questions."
            ),
        },
        LearnState::Running(session) => map_session(session),
    }
}

fn map_session(session: &QuizSession) -> LearnVm {
    if let QuizPhase::Finished { score, total } = session.phase() {
        return LearnVm::Finished {
            score_label: format!("You scored {score} out of {total}"),
        };
    }

    let (Some(index), Some(question)) = (session.current_index(), session.current_question())
    else {
        return LearnVm::Loading;
    };
    let selection = session.selection();

    let options = question
        .options()
        .iter()
        .map(|option| {
            let status = match selection {
                None => OptionStatus::Neutral,
                Some(_) if question.is_correct(option) => OptionStatus::Correct,
                Some(chosen) if chosen == option.as_str() => OptionStatus::Incorrect,
                Some(_) => OptionStatus::Dimmed,
            };
            OptionVm {
                text: option.clone(),
                status,
                disabled: selection.is_some(),
            }
        })
        .collect();

    LearnVm::Question {
        progress_label: format!("Question {} of {}", index + 1, session.total()),
        score_label: format!("Score: {}", session.score()),
        term: question.term().to_string(),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use study_core::model::{Card, CardDraft, CardId};

    fn session() -> QuizSession {
        let cards: Vec<Card> = ["A", "B", "C", "D"]
            .iter()
            .map(|name| {
                CardDraft::new(format!("term {name}"), format!("def {name}"))
                    .validate(CardId::new(*name))
                    .unwrap()
            })
            .collect();
        QuizSession::start(&cards, &mut StdRng::seed_from_u64(3)).unwrap()
    }

    fn question_vm(state: &LearnState) -> (String, Vec<OptionVm>) {
        match map_learn_state(state) {
            LearnVm::Question {
                progress_label,
                options,
                ..
            } => (progress_label, options),
            other => panic!("expected question, got {other:?}"),
        }
    }

    #[test]
    fn unanswered_options_are_neutral_and_enabled() {
        let (progress, options) = question_vm(&LearnState::Running(session()));
        assert_eq!(progress, "Question 1 of 4");
        assert_eq!(options.len(), 4);
        assert!(options.iter().all(|option| option.status == OptionStatus::Neutral));
        assert!(options.iter().all(|option| !option.disabled));
    }

    #[test]
    fn wrong_answer_marks_choice_correct_answer_and_dims_the_rest() {
        let session = session();
        let question = session.current_question().unwrap().clone();
        let wrong = question
            .options()
            .iter()
            .find(|option| !question.is_correct(option))
            .unwrap()
            .clone();
        let session = session.submit(&wrong);

        let (_, options) = question_vm(&LearnState::Running(session));
        for option in &options {
            let expected = if question.is_correct(&option.text) {
                OptionStatus::Correct
            } else if option.text == wrong {
                OptionStatus::Incorrect
            } else {
                OptionStatus::Dimmed
            };
            assert_eq!(option.status, expected, "{}", option.text);
            assert!(option.disabled);
        }
    }

    #[test]
    fn insufficient_state_explains_minimum() {
        let vm = map_learn_state(&LearnState::Insufficient {
            found: 3,
            required: 4,
        });
        let LearnVm::Insufficient { message } = vm else {
            panic!("expected insufficient");
        };
        assert!(message.contains("at least 4 flashcards"));
    }
}
