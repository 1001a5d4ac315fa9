use dioxus::prelude::*;
use prep_core::model::AppSettingsDraft;

use crate::context::{AppContext, SharedState};

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let shared = SharedState::grab();
    let settings_service = ctx.app_settings();
    let mut api_key = use_signal(String::new);
    let mut api_model = use_signal(String::new);
    let mut api_base_url = use_signal(String::new);
    let mut loaded = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut saved_notice = use_signal(|| false);

    // Seed the form once from the stored row.
    let settings_for_load = settings_service.clone();
    use_hook(move || {
        spawn(async move {
            match settings_for_load.load().await {
                Ok(settings) => {
                    api_key.set(settings.api_key().unwrap_or_default().to_string());
                    api_model.set(settings.api_model().unwrap_or_default().to_string());
                    api_base_url.set(settings.api_base_url().unwrap_or_default().to_string());
                    loaded.set(true);
                }
                Err(error) => {
                    loaded.set(true);
                    shared.report_error(error.to_string());
                }
            }
        });
    });

    rsx! {
        div { class: "page settings-page",
            header { class: "view-header",
                h2 { class: "view-title", "Settings" }
                p { class: "view-subtitle", "Provider credentials are applied on the next launch." }
            }
            div { class: "view-divider" }

            if !loaded() {
                p { "Loading..." }
            } else {
                form { class: "settings-form",
                    onsubmit: move |evt| evt.prevent_default(),
                    label { class: "field-label", r#for: "api-key", "API key" }
                    input {
                        id: "api-key",
                        class: "field-input",
                        r#type: "password",
                        value: "{api_key()}",
                        oninput: move |evt| {
                            saved_notice.set(false);
                            api_key.set(evt.value());
                        },
                    }

                    label { class: "field-label", r#for: "api-model", "Model" }
                    input {
                        id: "api-model",
                        class: "field-input",
                        r#type: "text",
                        placeholder: "gpt-4o-mini",
                        value: "{api_model()}",
                        oninput: move |evt| {
                            saved_notice.set(false);
                            api_model.set(evt.value());
                        },
                    }

                    label { class: "field-label", r#for: "api-base-url", "Base URL" }
                    input {
                        id: "api-base-url",
                        class: "field-input",
                        r#type: "text",
                        placeholder: "https://api.openai.com/v1",
                        value: "{api_base_url()}",
                        oninput: move |evt| {
                            saved_notice.set(false);
                            api_base_url.set(evt.value());
                        },
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: saving(),
                        onclick: move |_| {
                            let settings_service = settings_service.clone();
                            spawn(async move {
                                saving.set(true);
                                let draft = AppSettingsDraft {
                                    api_key: Some(api_key()),
                                    api_model: Some(api_model()),
                                    api_base_url: Some(api_base_url()),
                                };
                                match settings_service.save(draft).await {
                                    Ok(_) => {
                                        saving.set(false);
                                        saved_notice.set(true);
                                    }
                                    Err(error) => {
                                        saving.set(false);
                                        shared.report_error(error.to_string());
                                    }
                                }
                            });
                        },
                        if saving() { "Saving..." } else { "Save" }
                    }

                    if saved_notice() {
                        p { class: "view-hint", "Saved. Restart the app to pick up the new key." }
                    }
                }
            }
        }
    }
}
