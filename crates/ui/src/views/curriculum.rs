use std::collections::BTreeSet;

use dioxus::prelude::*;
use study_core::model::CurriculumUnit;

use crate::context::AppContext;
use crate::views::{SetCard, ViewError, ViewState, view_state_from_resource};
use crate::vm::{UnitSectionVm, map_curriculum};

#[component]
pub fn CurriculumView() -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.library();
    // Every unit starts expanded.
    let collapsed = use_signal(BTreeSet::<CurriculumUnit>::new);

    let resource = use_resource(move || {
        let library = library.clone();
        async move {
            let units = library.curriculum().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_curriculum(&units))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page curriculum-page",
            header { class: "view-header",
                h2 { class: "view-title", "Cambridge Psychology Curriculum" }
                p { class: "view-subtitle",
                    "Official course materials, lectures, and flashcards organized by unit."
                }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(sections) => rsx! {
                    div { class: "unit-list",
                        for section in sections {
                            UnitSection {
                                key: "{section.title}",
                                open: !collapsed.read().contains(&section.unit),
                                section,
                                collapsed,
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn UnitSection(
    section: UnitSectionVm,
    open: bool,
    collapsed: Signal<BTreeSet<CurriculumUnit>>,
) -> Element {
    let unit = section.unit;
    rsx! {
        div { class: "unit-section",
            button {
                class: "unit-header",
                r#type: "button",
                onclick: move |_| {
                    let mut collapsed = collapsed;
                    let mut units = collapsed.write();
                    if !units.remove(&unit) {
                        units.insert(unit);
                    }
                },
                h3 { class: "unit-title", "{section.title}" }
                span { class: "unit-count", "{section.count_label}" }
                span { class: "unit-caret", if open { "▾" } else { "▸" } }
            }
            if open {
                div { class: "unit-body",
                    if section.is_empty() {
                        p { class: "unit-empty", "No resources uploaded for this unit yet." }
                    } else {
                        div { class: "set-grid",
                            for card in section.resources.clone() {
                                SetCard { key: "{card.id}", card }
                            }
                        }
                    }
                }
            }
        }
    }
}
