use dioxus::prelude::*;
use dioxus_router::Link;
use study_core::model::{Card, StudySetId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{FlipPanel, LearnPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{StudyLayout, StudyPageVm, map_study_page};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StudyMode {
    Flip,
    Learn,
}

#[component]
pub fn StudyView(set_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.library();
    let lookup_id = set_id.clone();

    let resource = use_resource(move || {
        let library = library.clone();
        let id = StudySetId::new(lookup_id.clone());
        async move {
            let set = library
                .get_set(&id)
                .await
                .map_err(|_| ViewError::Unknown)?
                .ok_or(ViewError::NotFound)?;
            Ok::<_, ViewError>(map_study_page(&set))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page study-page",
            Link { class: "back-link", to: Route::Dashboard {}, "← Back" }
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
                ViewState::Ready(page) => rsx! {
                    StudyBody { set_id: set_id.clone(), page }
                },
            }
        }
    }
}

#[component]
fn StudyBody(set_id: String, page: StudyPageVm) -> Element {
    match page.layout.clone() {
        StudyLayout::Audio { src } => rsx! {
            div { class: "study-audio",
                h2 { "{page.title}" }
                p { class: "view-subtitle", "{page.description}" }
                audio { class: "audio-player", controls: true, autoplay: true, src: "{src}" }
            }
        },
        StudyLayout::Video { embed_url } => rsx! {
            div { class: "study-video",
                div { class: "video-frame",
                    iframe {
                        src: "{embed_url}",
                        title: "YouTube video player",
                        allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture",
                        allowfullscreen: true,
                    }
                }
                h2 { "{page.title}" }
                p { class: "view-subtitle", "{page.description}" }
                span { class: "unit-pill", "{page.unit_label}" }
            }
        },
        StudyLayout::Flashcards { cards } => rsx! {
            StudyViewer { set_id, title: page.title.clone(), cards }
        },
        StudyLayout::Reader { content } => rsx! {
            article { class: "study-note",
                h2 { "{page.title}" }
                span { class: "study-note-unit", "{page.unit_label}" }
                if content.is_empty() {
                    p { class: "study-note-body", "{page.description}" }
                } else {
                    p { class: "study-note-body", "{content}" }
                }
            }
        },
    }
}

#[component]
fn StudyViewer(set_id: String, title: String, cards: Vec<Card>) -> Element {
    let mut mode = use_signal(|| StudyMode::Flip);
    let tab_class = move |tab: StudyMode| {
        if mode() == tab {
            "segment segment--active"
        } else {
            "segment"
        }
    };

    rsx! {
        div { class: "study-viewer",
            div { class: "study-viewer-header",
                h2 { "{title}" }
                div { class: "segmented",
                    button {
                        class: tab_class(StudyMode::Flip),
                        r#type: "button",
                        onclick: move |_| mode.set(StudyMode::Flip),
                        "Flip Mode"
                    }
                    button {
                        class: tab_class(StudyMode::Learn),
                        r#type: "button",
                        onclick: move |_| mode.set(StudyMode::Learn),
                        "Learn Mode"
                    }
                }
            }
            match mode() {
                StudyMode::Flip => rsx! {
                    FlipPanel { cards }
                },
                StudyMode::Learn => rsx! {
                    LearnPanel { set_id }
                },
            }
        }
    }
}
