use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CreateView, CurriculumView, DashboardView, LibraryView, StudyView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/create", CreateView)] Create {},
        #[route("/curriculum", CurriculumView)] Curriculum {},
        #[route("/library", LibraryView)] Library {},
        #[route("/study/:set_id", StudyView)] Study { set_id: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            div { class: "sidebar-brand",
                span { class: "sidebar-logo", "C" }
                h1 { "Psych AI" }
            }
            ul {
                li { Link { to: Route::Dashboard {}, "Home" } }
                li { Link { to: Route::Curriculum {}, "Curriculum" } }
                li { Link { to: Route::Library {}, "Library" } }
                li { Link { to: Route::Create {}, "Create" } }
            }
        }
    }
}
