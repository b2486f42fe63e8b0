use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::vm::SetCardVm;

#[component]
pub fn SetCard(card: SetCardVm) -> Element {
    rsx! {
        Link { class: "set-card", to: Route::Study { set_id: card.id.clone() },
            div { class: "set-card-header",
                span { class: "set-card-icon {card.kind_class}", "{card.icon}" }
                if let Some(badge) = card.badge {
                    span { class: "set-card-badge", "{badge}" }
                }
            }
            h3 { class: "set-card-title", "{card.title}" }
            p { class: "set-card-description", "{card.description}" }
            div { class: "set-card-footer",
                span { "{card.footer_label}" }
                span { class: "set-card-open", "Open" }
            }
        }
    }
}
