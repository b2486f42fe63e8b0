use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{SetCard, ViewError, ViewState, view_state_from_resource};
use crate::vm::map_set_cards;

#[component]
pub fn LibraryView() -> Element {
    let ctx = use_context::<AppContext>();
    let library = ctx.library();

    let resource = use_resource(move || {
        let library = library.clone();
        async move {
            let sets = library
                .public_sets()
                .await
                .map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(map_set_cards(&sets))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page library-page",
            h2 { class: "view-title", "Public Library" }
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
                ViewState::Ready(cards) => rsx! {
                    if cards.is_empty() {
                        p { class: "empty-state", "No community sets yet." }
                    } else {
                        div { class: "set-grid",
                            for card in cards {
                                SetCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
            }
        }
    }
}
