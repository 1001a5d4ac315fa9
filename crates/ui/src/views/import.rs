use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::SessionPlan;

use crate::context::{AppContext, SharedState};
use crate::views::build::launch_build;

/// Build a session from a user-supplied list of well-known question titles,
/// one per line.
#[component]
pub fn ImportView() -> Element {
    let ctx = use_context::<AppContext>();
    let shared = SharedState::grab();
    let navigator = use_navigator();
    let builder = ctx.session_builder();
    let mut raw_titles = use_signal(String::new);

    let titles: Vec<String> = raw_titles()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();
    let building = (shared.building)();
    let start_disabled = building || titles.is_empty();
    let count_label = match titles.len() {
        0 => "No titles yet".to_string(),
        1 => "1 question".to_string(),
        n => format!("{n} questions"),
    };

    rsx! {
        div { class: "page import-page",
            header { class: "view-header",
                h2 { class: "view-title", "Import questions" }
                p { class: "view-subtitle", "Paste question titles, one per line." }
            }
            div { class: "view-divider" }

            textarea {
                class: "field-input import-titles",
                rows: "10",
                placeholder: "Two Sum\nReverse Linked List\nValid Parentheses",
                value: "{raw_titles()}",
                oninput: move |evt| raw_titles.set(evt.value()),
            }
            p { class: "view-hint", "{count_label}" }

            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: start_disabled,
                onclick: move |_| {
                    let plan = SessionPlan::Titles(titles.clone());
                    launch_build(builder.clone(), plan, shared, navigator);
                },
                if building { "Preparing your first question..." } else { "Start practice" }
            }
        }
    }
}
