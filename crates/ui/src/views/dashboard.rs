use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{SetCard, ViewError, ViewState, view_state_from_resource};
use crate::vm::{SetCardVm, map_set_cards};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.library();

    let resource = use_resource(move || {
        let library = library.clone();
        async move {
            let sets = library
                .personal_sets()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_set_cards(&sets))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard-page",
            header { class: "view-header",
                h2 { class: "view-title", "Welcome Back." }
                p { class: "view-subtitle", "Ready to master Cambridge Psychology?" }
            }

            div { class: "dashboard-tiles",
                Link { class: "dashboard-tile dashboard-tile--primary", to: Route::Create {},
                    h3 { "Create New" }
                    p { "AI or Manual Entry" }
                }
                Link { class: "dashboard-tile", to: Route::Curriculum {},
                    h3 { "Curriculum" }
                    p { "7 Units of Resources" }
                }
                Link { class: "dashboard-tile", to: Route::Library {},
                    h3 { "Public Library" }
                    p { "Community Sets" }
                }
            }

            h3 { class: "section-title", "Your Personal Sets" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(cards) => rsx! {
                    PersonalSets { cards }
                },
            }
        }
    }
}

#[component]
fn PersonalSets(cards: Vec<SetCardVm>) -> Element {
    if cards.is_empty() {
        return rsx! {
            div { class: "empty-state",
                p { "No personal sets yet. Start creating!" }
                Link { class: "btn btn-link", to: Route::Create {}, "Create Now" }
            }
        };
    }

    rsx! {
        div { class: "set-grid",
            for card in cards {
                SetCard { key: "{card.id}", card }
            }
        }
    }
}
