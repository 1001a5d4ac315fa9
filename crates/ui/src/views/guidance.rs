use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::GuidanceKind;

use crate::context::{AppContext, SharedState};
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::markdown_to_html;

#[component]
pub fn LearningView() -> Element {
    rsx! {
        GuidanceBody {
            kind: GuidanceKind::Learning,
            title: "Learning Path",
            subtitle: "A structured path through interview preparation.",
        }
    }
}

#[component]
pub fn ExpertView() -> Element {
    rsx! {
        GuidanceBody {
            kind: GuidanceKind::Expert,
            title: "Expert Advice",
            subtitle: "Strategy and tips from the other side of the table.",
        }
    }
}

/// Navigation here is optimistic: the view opens immediately and fetches its
/// document; a failed fetch reports to the global error slot and backs out
/// to home.
#[component]
fn GuidanceBody(kind: GuidanceKind, title: &'static str, subtitle: &'static str) -> Element {
    let ctx = use_context::<AppContext>();
    let shared = SharedState::grab();
    let navigator = use_navigator();
    let guidance = ctx.guidance();

    let resource = use_resource(move || {
        let guidance = guidance.clone();
        async move {
            let document = guidance
                .fetch(kind)
                .await
                .map_err(|error| error.to_string())?;
            Ok::<_, String>(markdown_to_html(&document))
        }
    });

    use_effect(move || {
        if let Some(Err(message)) = resource.value().read().as_ref() {
            shared.report_error(message.clone());
            let _ = navigator.push(Route::Home {});
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page guidance-page",
            header { class: "view-header",
                h2 { class: "view-title", "{title}" }
                p { class: "view-subtitle", "{subtitle}" }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(_) => rsx! {
                    p { class: "view-hint", "Heading back home..." }
                },
                ViewState::Ready(html) => rsx! {
                    div { class: "guidance-document", dangerous_inner_html: "{html}" }
                },
            }
        }
    }
}
