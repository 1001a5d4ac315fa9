use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::SharedState;
use crate::routes::Route;

#[component]
pub fn ResultsView() -> Element {
    let shared = SharedState::grab();
    let navigator = use_navigator();

    // Landing here without a report (deep link, stale history) goes home.
    use_effect(move || {
        if shared.last_run.peek().is_none() {
            let _ = navigator.push(Route::Home {});
        }
    });

    let Some(report) = shared.last_run.read().clone() else {
        return rsx! {
            div { class: "page results-page",
                p { class: "view-hint", "No run to show." }
            }
        };
    };

    let verdict_class = if report.status.is_accepted() {
        "verdict verdict--accepted"
    } else {
        "verdict verdict--failed"
    };
    let passed = report.passed_count();
    let total = report.examples.len();

    rsx! {
        div { class: "page results-page",
            header { class: "view-header",
                h2 { class: "view-title", "Run results" }
            }
            div { class: "view-divider" }

            div { class: verdict_class,
                span { class: "verdict-status", "{report.status}" }
                if total > 0 {
                    span { class: "verdict-count", "{passed} of {total} examples passed" }
                }
            }

            for example in report.examples.iter() {
                div {
                    class: if example.passed { "example-result example-result--pass" } else { "example-result example-result--fail" },
                    h4 { "Example {example.index + 1}" }
                    dl {
                        dt { "Expected" }
                        dd { pre { "{example.expected}" } }
                        dt { "Actual" }
                        dd { pre { "{example.actual}" } }
                    }
                    if let Some(console) = example.console.as_ref() {
                        details {
                            summary { "Console output" }
                            pre { "{console}" }
                        }
                    }
                }
            }

            div { class: "results-actions",
                Link { to: Route::Practice {}, class: "btn btn-primary", "Back to question" }
                Link { to: Route::Home {}, class: "btn btn-ghost", "End session" }
            }
        }
    }
}
