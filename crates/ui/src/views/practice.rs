use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use prep_core::model::Language;

use crate::context::{AppContext, SharedState};
use crate::routes::Route;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{difficulty_class, markdown_to_html};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuestionTab {
    Description,
    Solution,
    Hints,
}

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let shared = SharedState::grab();
    let navigator = use_navigator();
    let run_service = ctx.run_service();
    let translations = ctx.translations();
    let mut tab = use_signal(|| QuestionTab::Description);
    let mut running = use_signal(|| false);

    // The solution tab is rendered from a fresh translation of the current
    // question into the session language; the service behind this caches the
    // last (question, language) pair.
    let translations_for_resource = translations.clone();
    let translation = use_resource(move || {
        let translations = translations_for_resource.clone();
        let wanted = tab() == QuestionTab::Solution;
        let snapshot = shared
            .session
            .read()
            .as_ref()
            .map(|session| (session.current_question().clone(), session.language()));
        async move {
            let (question, language) = match snapshot {
                Some(pair) if wanted => pair,
                _ => return Ok(None),
            };
            let document = translations
                .translate(&question, language.label())
                .await
                .map_err(|error| error.to_string())?;
            Ok::<_, String>(Some(markdown_to_html(&document)))
        }
    });

    let Some(session) = shared.session.read().clone() else {
        return rsx! {
            div { class: "page practice-page",
                p { class: "view-hint", "No active session." }
                Link { to: Route::Home {}, class: "btn btn-secondary", "Back to home" }
            }
        };
    };

    let question = session.current_question().clone();
    let language = session.language();
    let code = session.current_code().to_string();
    let index = session.current_index();
    let total = session.len();
    let at_first = index == 0;
    let at_last = index + 1 == total;

    let translations_for_switch = translations.clone();
    let question_id_for_editor = question.id.clone();
    let question_for_run = question.clone();
    let code_for_run = code.clone();

    rsx! {
        div { class: "page practice-page",
            header { class: "practice-header",
                div { class: "practice-meta",
                    span { class: "practice-counter", "Question {index + 1} of {total}" }
                    h2 { class: "view-title", "{question.title}" }
                    div { class: "practice-badges",
                        span { class: difficulty_class(question.difficulty), "{question.difficulty}" }
                        span { class: "badge badge--topic", "{question.topic}" }
                    }
                }
                div { class: "practice-controls",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: at_first,
                        onclick: move |_| shared.update_session(|session| session.advanced(-1)),
                        "Previous"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        disabled: at_last,
                        onclick: move |_| shared.update_session(|session| session.advanced(1)),
                        "Next"
                    }
                    Link { to: Route::Home {}, class: "btn btn-ghost", "End session" }
                }
            }
            div { class: "view-divider" }

            div { class: "practice-split",
                section { class: "question-pane",
                    div { class: "tab-strip",
                        button {
                            class: if tab() == QuestionTab::Description { "tab tab--active" } else { "tab" },
                            r#type: "button",
                            onclick: move |_| tab.set(QuestionTab::Description),
                            "Description"
                        }
                        button {
                            class: if tab() == QuestionTab::Solution { "tab tab--active" } else { "tab" },
                            r#type: "button",
                            onclick: move |_| tab.set(QuestionTab::Solution),
                            "Solution"
                        }
                        button {
                            class: if tab() == QuestionTab::Hints { "tab tab--active" } else { "tab" },
                            r#type: "button",
                            onclick: move |_| tab.set(QuestionTab::Hints),
                            "Hints"
                        }
                    }

                    match tab() {
                        QuestionTab::Description => rsx! {
                            div {
                                class: "question-description",
                                dangerous_inner_html: markdown_to_html(&question.description),
                            }
                            if !question.constraints.is_empty() {
                                h4 { "Constraints" }
                                ul { class: "constraint-list",
                                    for constraint in question.constraints.iter() {
                                        li { code { "{constraint}" } }
                                    }
                                }
                            }
                            for (number, example) in question.examples.iter().enumerate() {
                                div { class: "example-card",
                                    h4 { "Example {number + 1}" }
                                    pre { "Input: {example.input}\nOutput: {example.output}" }
                                    if let Some(explanation) = example.explanation.as_ref() {
                                        p { class: "example-explanation", "{explanation}" }
                                    }
                                }
                            }
                        },
                        QuestionTab::Solution => rsx! {
                            match view_state_from_resource(&translation) {
                                ViewState::Idle | ViewState::Loading => rsx! {
                                    p { "Translating the solution into {language.label()}..." }
                                },
                                ViewState::Error(message) => rsx! {
                                    p { class: "view-hint view-hint--warning", "{message}" }
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        onclick: move |_| {
                                            let mut translation = translation;
                                            translation.restart();
                                        },
                                        "Retry"
                                    }
                                },
                                ViewState::Ready(Some(html)) => rsx! {
                                    div { class: "solution-document", dangerous_inner_html: "{html}" }
                                },
                                ViewState::Ready(None) => rsx! {
                                    p { "Open this tab again to load the solution." }
                                },
                            }
                        },
                        QuestionTab::Hints => rsx! {
                            if question.hints.is_empty() {
                                p { "No hints for this question." }
                            } else {
                                ol { class: "hint-list",
                                    for hint in question.hints.iter() {
                                        li { "{hint}" }
                                    }
                                }
                            }
                        },
                    }
                }

                section { class: "editor-pane",
                    div { class: "editor-toolbar",
                        label { class: "field-label", r#for: "language", "Language" }
                        select {
                            id: "language",
                            class: "field-input",
                            value: "{language}",
                            onchange: move |evt| {
                                if let Ok(next) = evt.value().parse::<Language>() {
                                    shared.update_session(|session| session.with_language(next));
                                    translations_for_switch.invalidate();
                                }
                            },
                            for choice in Language::ALL {
                                option { value: "{choice}", "{choice.label()}" }
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: running(),
                            onclick: move |_| {
                                let run_service = run_service.clone();
                                let question = question_for_run.clone();
                                let code = code_for_run.clone();
                                let nav = navigator;
                                spawn(async move {
                                    running.set(true);
                                    match run_service.run(&question, language, &code).await {
                                        Ok(report) => {
                                            running.set(false);
                                            let mut last_run = shared.last_run;
                                            last_run.set(Some(report));
                                            let _ = nav.push(Route::Results {});
                                        }
                                        Err(error) => {
                                            running.set(false);
                                            shared.report_error(error.to_string());
                                        }
                                    }
                                });
                            },
                            if running() { "Judging..." } else { "Run" }
                        }
                    }
                    textarea {
                        class: "code-editor",
                        spellcheck: "false",
                        value: "{code}",
                        oninput: move |evt| {
                            let id = question_id_for_editor.clone();
                            shared.update_session(move |session| {
                                let language = session.language();
                                session.with_code(&id, language, evt.value())
                            });
                        },
                    }
                }
            }
        }
    }
}
