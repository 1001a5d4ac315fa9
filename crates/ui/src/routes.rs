use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::SharedState;
use crate::views::{
    ExpertView, HomeView, ImportView, LearningView, PracticeView, ResultsView, SettingsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/import", ImportView)] Import {},
        #[route("/practice", PracticeView)] Practice {},
        #[route("/results", ResultsView)] Results {},
        #[route("/learning", LearningView)] Learning {},
        #[route("/expert", ExpertView)] Expert {},
        #[route("/settings", SettingsView)] Settings {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                ErrorBanner {}
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Prepwise" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Import {}, "Import" } }
                li { Link { to: Route::Learning {}, "Learning Path" } }
                li { Link { to: Route::Expert {}, "Expert Advice" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
        }
    }
}

/// Dismissable strip for errors reported from any view or background task.
#[component]
fn ErrorBanner() -> Element {
    let shared = SharedState::grab();
    let message = shared.error.read().clone();

    rsx! {
        if let Some(message) = message {
            div { class: "error-banner",
                span { class: "error-banner-text", "{message}" }
                button {
                    class: "error-banner-dismiss",
                    r#type: "button",
                    onclick: move |_| shared.dismiss_error(),
                    "Dismiss"
                }
            }
        }
    }
}
