use chrono::Datelike;
use dioxus::prelude::*;
use crate::routes::Route;
use crate::stores::auth_store;

/// How many academic years the picker offers, newest first
const RECENT_YEAR_COUNT: usize = 4;

/// `count` years ending at `current`, newest first
pub fn recent_years(current: i32, count: usize) -> Vec<i32> {
    (0..count as i32).map(|offset| current - offset).collect()
}

#[component]
pub fn Home() -> Element {
    let mentor_id = auth_store::get_mentor_id();

    rsx! {
        div {
            class: "max-w-xl mx-auto px-4 py-10",
            if let Some(mentor_id) = mentor_id {
                YearPicker { mentor_id }
            } else {
                SignInForm {}
            }
        }
    }
}

#[component]
fn SignInForm() -> Element {
    let mut mentor_id = use_signal(String::new);
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let token_value = token.read().clone();
        let token_value = if token_value.trim().is_empty() { None } else { Some(token_value) };

        match auth_store::sign_in(&mentor_id.read(), token_value) {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        form {
            class: "flex flex-col gap-4 rounded-lg bg-card shadow-lg p-6",
            onsubmit: submit,

            h1 {
                class: "text-2xl font-bold",
                "Mentor sign in"
            }

            label {
                class: "flex flex-col gap-1",
                span { class: "text-sm font-medium", "Mentor ID" }
                input {
                    class: "px-3 py-2 rounded-lg border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary",
                    r#type: "text",
                    value: "{mentor_id}",
                    oninput: move |evt| mentor_id.set(evt.value()),
                }
            }

            label {
                class: "flex flex-col gap-1",
                span { class: "text-sm font-medium", "API token (optional)" }
                input {
                    class: "px-3 py-2 rounded-lg border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary",
                    r#type: "password",
                    value: "{token}",
                    oninput: move |evt| token.set(evt.value()),
                }
            }

            if let Some(err) = error.read().as_ref() {
                p {
                    class: "text-sm text-red-600 dark:text-red-400",
                    "{err}"
                }
            }

            button {
                class: "px-4 py-2 rounded-full bg-primary text-primary-foreground hover:opacity-90 transition",
                r#type: "submit",
                "Sign in"
            }
        }
    }
}

#[component]
fn YearPicker(mentor_id: String) -> Element {
    let navigator = navigator();
    let mut custom_year = use_signal(String::new);
    let years = recent_years(chrono::Local::now().year(), RECENT_YEAR_COUNT);

    let open_custom = move |evt: FormEvent| {
        evt.prevent_default();
        let year = custom_year.read().trim().to_string();
        if !year.is_empty() {
            navigator.push(Route::MenteesList { year });
        }
    };

    rsx! {
        div {
            class: "flex flex-col gap-6",

            h1 {
                class: "text-2xl font-bold",
                "Welcome, {mentor_id}"
            }

            div {
                class: "grid grid-cols-2 gap-3",
                for year in years {
                    Link {
                        key: "{year}",
                        to: Route::MenteesList { year: year.to_string() },
                        class: "px-4 py-3 text-center rounded-lg bg-card shadow hover:bg-accent transition",
                        "{year}"
                    }
                }
            }

            form {
                class: "flex gap-2",
                onsubmit: open_custom,
                input {
                    class: "flex-1 px-3 py-2 rounded-lg border border-border bg-background focus:outline-none focus:ring-2 focus:ring-primary",
                    r#type: "text",
                    placeholder: "Other year",
                    value: "{custom_year}",
                    oninput: move |evt| custom_year.set(evt.value()),
                }
                button {
                    class: "px-4 py-2 rounded-full bg-primary text-primary-foreground hover:opacity-90 transition",
                    r#type: "submit",
                    "Open"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_years_newest_first() {
        assert_eq!(recent_years(2026, 4), vec![2026, 2025, 2024, 2023]);
        assert!(recent_years(2026, 0).is_empty());
    }
}
