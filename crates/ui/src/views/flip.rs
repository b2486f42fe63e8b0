use dioxus::prelude::*;
use study_core::flip::FlipReview;
use study_core::model::Card;

use crate::vm::map_flip_card;

#[component]
pub fn FlipPanel(cards: Vec<Card>) -> Element {
    let card_count = cards.len();
    let mut review = use_signal(move || FlipReview::with_len(card_count).ok());

    let Some(current) = review.read().as_ref().and_then(|r| map_flip_card(r, &cards)) else {
        return rsx! {
            p { class: "empty-state", "No flashcards in this set!" }
        };
    };

    let face_class = if current.is_revealed {
        "flip-card flip-card--revealed"
    } else {
        "flip-card"
    };

    rsx! {
        div { class: "flip-panel",
            div { class: "flip-position", "{current.position_label}" }
            button {
                class: "{face_class}",
                r#type: "button",
                onclick: move |_| {
                    if let Some(review) = review.write().as_mut() {
                        review.flip();
                    }
                },
                p { class: "flip-face", "{current.face_text}" }
                if let Some(hint) = current.hint {
                    span { class: "flip-hint", "{hint}" }
                }
            }
            div { class: "flip-controls",
                button {
                    class: "btn btn-round",
                    r#type: "button",
                    aria_label: "Previous card",
                    onclick: move |_| {
                        if let Some(review) = review.write().as_mut() {
                            review.prev();
                        }
                    },
                    "←"
                }
                button {
                    class: "btn btn-round btn-primary",
                    r#type: "button",
                    aria_label: "Next card",
                    onclick: move |_| {
                        if let Some(review) = review.write().as_mut() {
                            review.next();
                        }
                    },
                    "→"
                }
            }
        }
    }
}
