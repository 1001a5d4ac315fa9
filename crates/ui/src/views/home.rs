use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::SessionPlan;

use crate::context::{AppContext, SharedState};
use crate::routes::Route;
use crate::views::build::launch_build;

const TOPIC_SUGGESTIONS: [&str; 6] = [
    "Arrays & Hashing",
    "Two Pointers",
    "Linked Lists",
    "Trees",
    "Graphs",
    "Dynamic Programming",
];

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let shared = SharedState::grab();
    let navigator = use_navigator();
    let builder = ctx.session_builder();
    let mut topic = use_signal(String::new);
    let mut count = use_signal(|| 3_usize);

    // Arriving home tears down whatever session was in flight.
    use_effect(move || {
        shared.clear_session();
    });

    let building = (shared.building)();
    let start_disabled = building || topic().trim().is_empty();

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Start practicing" }
                p { class: "view-subtitle", "Pick a topic and the questions stream in one by one." }
            }
            div { class: "view-divider" }

            if !ctx.provider_enabled() {
                p { class: "view-hint view-hint--warning",
                    "No API key configured. Add one in "
                    Link { to: Route::Settings {}, "Settings" }
                    " before starting a session."
                }
            }

            form { class: "start-form",
                onsubmit: move |evt| evt.prevent_default(),
                label { class: "field-label", r#for: "topic", "Interview topic" }
                input {
                    id: "topic",
                    class: "field-input",
                    r#type: "text",
                    placeholder: "e.g. Arrays & Hashing",
                    value: "{topic()}",
                    oninput: move |evt| topic.set(evt.value()),
                }
                div { class: "topic-suggestions",
                    for suggestion in TOPIC_SUGGESTIONS {
                        button {
                            class: "topic-chip",
                            r#type: "button",
                            onclick: move |_| topic.set(suggestion.to_string()),
                            "{suggestion}"
                        }
                    }
                }

                label { class: "field-label", r#for: "count", "Questions" }
                select {
                    id: "count",
                    class: "field-input",
                    value: "{count()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<usize>() {
                            count.set(value.clamp(1, 10));
                        }
                    },
                    for n in 1..=10_usize {
                        option { value: "{n}", "{n}" }
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: start_disabled,
                    onclick: move |_| {
                        let plan = SessionPlan::Topic {
                            topic: topic().trim().to_string(),
                            count: count(),
                        };
                        launch_build(builder.clone(), plan, shared, navigator);
                    },
                    if building { "Preparing your first question..." } else { "Start practice" }
                }
            }

            p { class: "view-hint",
                "Have specific questions in mind? "
                Link { to: Route::Import {}, "Import them by title." }
            }
        }
    }
}
