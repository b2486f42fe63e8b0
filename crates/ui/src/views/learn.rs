use std::sync::Arc;

use dioxus::prelude::*;
use services::{LearnState, QuizRunner};
use study_core::model::StudySetId;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{LearnVm, map_learn_state};

/// Learn mode for one set. The runner lives as long as this component, so
/// leaving the page cancels any pending auto-advance.
#[component]
pub fn LearnPanel(set_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let learn = ctx.learn();
    let mut state = use_signal(LearnState::default);

    let runner = use_resource(move || {
        let learn = learn.clone();
        let set_id = StudySetId::new(set_id.clone());
        async move {
            let runner = learn.open(&set_id).await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(Arc::new(runner))
        }
    });

    use_effect(move || {
        let Some(Ok(runner)) = runner.read().as_ref().cloned() else {
            return;
        };
        let mut updates = runner.subscribe();
        spawn(async move {
            loop {
                state.set(updates.borrow_and_update().clone());
                if updates.changed().await.is_err() {
                    break;
                }
            }
        });
    });

    let with_runner = move |action: &dyn Fn(&QuizRunner)| {
        if let Some(Ok(runner)) = runner.read().as_ref() {
            action(runner);
        }
    };

    if let Some(Err(err)) = runner.read().as_ref() {
        return rsx! {
            p { class: "empty-state", "{err.message()}" }
        };
    }

    match map_learn_state(&state.read()) {
        LearnVm::Loading => rsx! {
            p { "Loading..." }
        },
        LearnVm::Insufficient { message } => rsx! {
            div { class: "empty-state learn-insufficient",
                p { "{message}" }
            }
        },
        LearnVm::Finished { score_label } => rsx! {
            div { class: "learn-finished",
                h2 { "Great Job!" }
                p { "{score_label}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| with_runner(&|runner| runner.restart()),
                    "Review Again"
                }
            }
        },
        LearnVm::Question {
            progress_label,
            score_label,
            term,
            options,
        } => rsx! {
            div { class: "learn-panel",
                div { class: "learn-meta",
                    span { "{progress_label}" }
                    span { "{score_label}" }
                }
                div { class: "learn-term",
                    h3 { "{term}" }
                }
                div { class: "learn-options",
                    for (index, option) in options.into_iter().enumerate() {
                        button {
                            key: "{index}",
                            class: "{option.status.class()}",
                            r#type: "button",
                            disabled: option.disabled,
                            onclick: {
                                let text = option.text.clone();
                                move |_| with_runner(&|runner| runner.submit(&text))
                            },
                            span { "{option.text}" }
                            if let Some(marker) = option.status.marker() {
                                span { class: "learn-marker", "{marker}" }
                            }
                        }
                    }
                }
            }
        },
    }
}
