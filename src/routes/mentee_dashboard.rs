use dioxus::prelude::*;
use crate::components::{CenteredNotice, LoadingIndicator};
use crate::components::mentee_card::{card_labels, photo_alt};
use crate::routes::Route;
use crate::services::mentees::{Mentee, MenteeApi, MenteeDirectory};
use crate::stores::selection_store;
use crate::utils::LoadState;

#[component]
pub fn MenteeDashboard(mentee_id: String) -> Element {
    let mut mentee = use_signal(LoadState::<Mentee>::default);
    let navigator = navigator();

    // Deep links and reloads arrive without a click; keep the selection in step with the URL
    use_effect(use_reactive(&mentee_id, move |id| {
        selection_store::select_mentee(&id);

        mentee.set(LoadState::Loading);
        spawn(async move {
            let api = MenteeApi::from_session();
            let result = load_mentee(&api, &id).await;
            // Ignore responses for a mentee the user already navigated away from
            if selection_store::peek_selected_mentee().as_deref() == Some(id.as_str()) {
                mentee.set(result);
            }
        });
    }));

    let state = mentee.read().clone();
    let content = match state {
        LoadState::AwaitingInput | LoadState::Loading => rsx! {
            LoadingIndicator { label: "Loading mentee..." }
        },
        LoadState::Failed(err) => rsx! {
            CenteredNotice {
                message: err,
                is_error: true,
                Link {
                    to: Route::Home {},
                    class: "text-blue-500 hover:underline",
                    "Back to home"
                }
            }
        },
        LoadState::Loaded(record) => rsx! {
            MenteeDetails { mentee: record }
        },
    };

    rsx! {
        div {
            class: "max-w-3xl mx-auto px-4 py-6",

            div {
                class: "mb-4",
                button {
                    class: "hover:bg-accent px-3 py-1 rounded-full transition",
                    onclick: move |_| navigator.go_back(),
                    "← Back"
                }
            }

            {content}
        }
    }
}

#[component]
fn MenteeDetails(mentee: Mentee) -> Element {
    let alt = photo_alt(&mentee);

    rsx! {
        section {
            class: "flex flex-col sm:flex-row items-center gap-6 rounded-lg bg-card shadow-lg p-6",

            if !mentee.photo_link.is_empty() {
                img {
                    class: "h-[240px] w-auto object-cover shadow-lg",
                    src: "{mentee.photo_link}",
                    alt: "{alt}",
                }
            }

            div {
                class: "flex flex-col gap-2",
                for line in card_labels(&mentee) {
                    p {
                        class: "text-lg",
                        "{line}"
                    }
                }
            }
        }
    }
}

/// Fetch one mentee, turning a 404 into a readable message
async fn load_mentee<D>(directory: &D, mentee_id: &str) -> LoadState<Mentee>
where
    D: MenteeDirectory + ?Sized,
{
    match directory.mentee(mentee_id).await {
        Ok(mentee) => LoadState::Loaded(mentee),
        Err(e) if e.is_not_found() => {
            log::warn!("Mentee {} not found", mentee_id);
            LoadState::Failed("Mentee not found".to_string())
        }
        Err(e) => {
            log::error!("Failed to fetch mentee {}: {}", mentee_id, e);
            LoadState::Failed(format!("Could not load mentee: {}", e))
        }
    }
}
