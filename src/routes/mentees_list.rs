use dioxus::prelude::*;
use crate::components::{CenteredNotice, LoadingIndicator, MenteeCard};
use crate::routes::Route;
use crate::services::mentees::{Mentee, MenteeApi};
use crate::stores::mentee_list::{FetchTicket, ListController, ListQuery, ListView};
use crate::stores::{auth_store, selection_store};

/// Text shown when the backend returns no mentees for the year
pub const EMPTY_MESSAGE: &str = "No mentees present.";

/// Text shown when the roster request fails
pub const ERROR_MESSAGE: &str = "Could not load mentees.";

/// Run a fetch for `ticket` and hand the outcome back to the controller
fn run_fetch(mut controller: Signal<ListController>, ticket: FetchTicket) {
    spawn(async move {
        let api = MenteeApi::from_session();
        let result = ticket.fetch(&api).await;
        controller.write().resolve(ticket, result);
    });
}

/// Make `mentee_id` the shared selection and return the dashboard route for it
pub fn open_mentee(mentee_id: String) -> Route {
    selection_store::select_mentee(&mentee_id);
    Route::MenteeDashboard { mentee_id }
}

/// One card per record, in backend order, keyed by id
#[component]
pub fn MenteeGrid(mentees: Vec<Mentee>, onselect: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4",
            for mentee in mentees {
                MenteeCard {
                    key: "{mentee.id}",
                    mentee: mentee.clone(),
                    onselect,
                }
            }
        }
    }
}

#[component]
pub fn MenteesList(year: String) -> Element {
    let mut controller = use_signal(ListController::default);
    let navigator = navigator();
    let mentor_id = auth_store::AUTH_STATE.read().mentor_id.clone();

    // Refetch whenever the signed-in mentor or the year changes
    use_effect(use_reactive((&mentor_id, &year), move |(mentor_id, year)| {
        let query = ListQuery::from_inputs(mentor_id.as_deref(), Some(year.as_str()));
        let ticket = controller.write().request(query);
        if let Some(ticket) = ticket {
            run_fetch(controller, ticket);
        }
    }));

    let onselect = move |mentee_id: String| {
        navigator.push(open_mentee(mentee_id));
    };

    let retry = move |_: MouseEvent| {
        let ticket = controller.write().retry();
        if let Some(ticket) = ticket {
            run_fetch(controller, ticket);
        }
    };

    let awaiting_message = if mentor_id.is_none() {
        "Sign in to see your mentees."
    } else {
        "Choose a year to see your mentees."
    };

    let state = controller.read();
    let content = match state.view() {
        ListView::AwaitingInputs => rsx! {
            CenteredNotice {
                message: awaiting_message,
                Link {
                    to: Route::Home {},
                    class: "text-blue-500 hover:underline",
                    "Go to home"
                }
            }
        },
        ListView::Loading => rsx! {
            LoadingIndicator { label: "Loading mentees..." }
        },
        ListView::Empty => rsx! {
            CenteredNotice {
                message: EMPTY_MESSAGE,
                Link {
                    to: Route::Home {},
                    class: "text-blue-500 hover:underline",
                    "Choose another year"
                }
            }
        },
        ListView::Failed(err) => rsx! {
            CenteredNotice {
                message: ERROR_MESSAGE,
                is_error: true,
                p {
                    class: "text-sm text-muted-foreground mb-4",
                    "{err}"
                }
                button {
                    class: "px-4 py-2 rounded-full bg-primary text-primary-foreground hover:opacity-90 transition",
                    onclick: retry,
                    "Retry"
                }
            }
        },
        ListView::Mentees(mentees) => rsx! {
            h1 {
                class: "text-2xl font-bold mb-4",
                "Mentees of {year}"
            }
            MenteeGrid {
                mentees: mentees.to_vec(),
                onselect,
            }
        },
    };
    drop(state);

    rsx! {
        div {
            class: "max-w-6xl mx-auto px-4 py-6",
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::Mutation;

    fn mentee(id: &str, name: &str) -> Mentee {
        Mentee {
            id: id.to_string(),
            name: name.to_string(),
            registration_number: format!("R-{}", id),
            class_label: "10A".to_string(),
            phone: "555".to_string(),
            photo_link: String::new(),
        }
    }

    #[test]
    fn test_open_mentee_selects_and_routes() {
        let dom = VirtualDom::new(|| rsx! { div {} });
        dom.in_runtime(|| {
            let route = open_mentee("A1".to_string());
            assert_eq!(route.to_string(), "/menteedashboard/A1");
            assert_eq!(selection_store::peek_selected_mentee(), Some("A1".to_string()));

            let route = open_mentee("B2".to_string());
            assert_eq!(route, Route::MenteeDashboard { mentee_id: "B2".to_string() });
            assert_eq!(selection_store::peek_selected_mentee(), Some("B2".to_string()));
        });
    }

    #[test]
    fn test_grid_renders_one_card_per_mentee() {
        let roster = vec![mentee("B2", "Ben"), mentee("A1", "Asha"), mentee("C3", "Cai")];
        let mut dom = VirtualDom::new_with_props(
            |mentees: Vec<Mentee>| {
                rsx! {
                    MenteeGrid {
                        mentees,
                        onselect: move |_: String| {},
                    }
                }
            },
            roster,
        );

        let names: Vec<String> = dom
            .rebuild_to_vec()
            .edits
            .into_iter()
            .filter_map(|edit| match edit {
                Mutation::CreateTextNode { value, .. } if value.starts_with("Name - ") => Some(value),
                _ => None,
            })
            .collect();

        assert_eq!(names, vec!["Name - Ben", "Name - Asha", "Name - Cai"]);
    }
}
