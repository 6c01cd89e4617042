use dioxus::prelude::*;

/// Centered spinner shown while a request is outstanding
#[component]
pub fn LoadingIndicator(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-center min-h-[60vh]",
            role: "status",
            aria_live: "polite",
            aria_busy: "true",

            div {
                class: "w-12 h-12 rounded-full border-4 border-muted border-t-primary animate-spin"
            }

            // Screen reader announcement
            span {
                class: "sr-only",
                "{label}"
            }
        }
    }
}

/// Centered message block used for empty, error and waiting states
#[component]
pub fn CenteredNotice(
    message: String,
    #[props(default = false)] is_error: bool,
    children: Element,
) -> Element {
    let text_class = if is_error {
        "text-red-600 dark:text-red-400"
    } else {
        "text-foreground"
    };

    rsx! {
        div {
            class: "p-6 mt-5 text-center",
            div {
                class: "max-w-md mx-auto",
                h2 {
                    class: "text-2xl mb-4 {text_class}",
                    "{message}"
                }
                {children}
            }
        }
    }
}
