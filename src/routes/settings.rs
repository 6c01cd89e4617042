use dioxus::prelude::*;
use crate::stores::settings_store::{self, AppSettings};

#[component]
pub fn Settings() -> Element {
    // Use peek() so typing is not overwritten by re-renders
    let mut api_base_url = use_signal(|| settings_store::SETTINGS.peek().api_base_url.clone());
    let mut reveal_threshold = use_signal(|| settings_store::SETTINGS.peek().reveal_threshold.to_string());
    let mut reveal_root_margin = use_signal(|| settings_store::SETTINGS.peek().reveal_root_margin.clone());
    let mut save_status = use_signal(|| None::<Result<(), String>>);

    let save = move |evt: FormEvent| {
        evt.prevent_default();

        let threshold = match reveal_threshold.read().trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => {
                save_status.set(Some(Err("Reveal threshold must be a number".to_string())));
                return;
            }
        };

        let settings = AppSettings {
            api_base_url: api_base_url.read().clone(),
            reveal_threshold: threshold,
            reveal_root_margin: reveal_root_margin.read().clone(),
        };
        save_status.set(Some(settings_store::update_settings(settings)));
    };

    let reset = move |_: MouseEvent| {
        let defaults = AppSettings::default();
        api_base_url.set(defaults.api_base_url.clone());
        reveal_threshold.set(defaults.reveal_threshold.to_string());
        reveal_root_margin.set(defaults.reveal_root_margin.clone());
        save_status.set(Some(settings_store::update_settings(defaults)));
    };

    let status = match save_status.read().as_ref() {
        Some(Ok(())) => Some(("text-green-600 dark:text-green-400", "Settings saved".to_string())),
        Some(Err(err)) => Some(("text-red-600 dark:text-red-400", err.clone())),
        None => None,
    };

    rsx! {
        div {
            class: "max-w-xl mx-auto px-4 py-10",

            form {
                class: "flex flex-col gap-4 rounded-lg bg-card shadow-lg p-6",
                onsubmit: save,

                h1 {
                    class: "text-2xl font-bold",
                    "Settings"
                }

                label {
                    class: "flex flex-col gap-1",
                    span { class: "text-sm font-medium", "API base URL" }
                    input {
                        class: "px-3 py-2 rounded-lg border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary",
                        r#type: "url",
                        value: "{api_base_url}",
                        oninput: move |evt| api_base_url.set(evt.value()),
                    }
                }

                label {
                    class: "flex flex-col gap-1",
                    span { class: "text-sm font-medium", "Card reveal threshold (0 to 1)" }
                    input {
                        class: "px-3 py-2 rounded-lg border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary",
                        r#type: "text",
                        value: "{reveal_threshold}",
                        oninput: move |evt| reveal_threshold.set(evt.value()),
                    }
                }

                label {
                    class: "flex flex-col gap-1",
                    span { class: "text-sm font-medium", "Card reveal root margin" }
                    input {
                        class: "px-3 py-2 rounded-lg border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary",
                        r#type: "text",
                        value: "{reveal_root_margin}",
                        oninput: move |evt| reveal_root_margin.set(evt.value()),
                    }
                }

                if let Some((status_class, status_text)) = status {
                    p {
                        class: "text-sm {status_class}",
                        "{status_text}"
                    }
                }

                div {
                    class: "flex gap-2",
                    button {
                        class: "px-4 py-2 rounded-full bg-primary text-primary-foreground hover:opacity-90 transition",
                        r#type: "submit",
                        "Save"
                    }
                    button {
                        class: "px-4 py-2 rounded-full border border-border hover:bg-accent transition",
                        r#type: "button",
                        onclick: reset,
                        "Reset to defaults"
                    }
                }
            }
        }
    }
}
