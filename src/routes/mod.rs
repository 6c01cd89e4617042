use dioxus::prelude::*;

pub mod home;
pub mod mentee_dashboard;
pub mod mentees_list;
pub mod settings;

use home::Home;
use mentee_dashboard::MenteeDashboard;
use mentees_list::MenteesList;
use settings::Settings;

use crate::stores::auth_store;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/mentees/:year")]
        MenteesList { year: String },

        #[route("/menteedashboard/:mentee_id")]
        MenteeDashboard { mentee_id: String },

        #[route("/settings")]
        Settings {},
}

#[component]
fn Layout() -> Element {
    let auth = auth_store::AUTH_STATE.read().clone();
    let navigator = navigator();

    rsx! {
        div {
            class: "min-h-screen bg-background text-foreground transition-colors",

            header {
                class: "sticky top-0 z-20 bg-background/80 backdrop-blur-sm border-b border-border",
                div {
                    class: "max-w-6xl mx-auto px-4 py-3 flex items-center justify-between",

                    Link {
                        to: Route::Home {},
                        class: "text-xl font-bold",
                        "Menteeboard"
                    }

                    div {
                        class: "flex items-center gap-3",
                        Link {
                            to: Route::Settings {},
                            class: "text-sm hover:underline",
                            "Settings"
                        }
                        if let Some(mentor_id) = auth.mentor_id {
                            span {
                                class: "text-sm text-muted-foreground",
                                "Mentor {mentor_id}"
                            }
                            button {
                                class: "px-3 py-1 rounded-full border border-border hover:bg-accent transition text-sm",
                                onclick: move |_| {
                                    auth_store::sign_out();
                                    navigator.push(Route::Home {});
                                },
                                "Sign out"
                            }
                        }
                    }
                }
            }

            main {
                Outlet::<Route> {}
            }

            footer {
                class: "py-6 text-center text-xs text-muted-foreground",
                "Menteeboard {VERSION}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_path() {
        let route = Route::MenteeDashboard { mentee_id: "A1".to_string() };
        assert_eq!(route.to_string(), "/menteedashboard/A1");
    }

    #[test]
    fn test_mentees_list_path_round_trip() {
        let route = Route::MenteesList { year: "2024".to_string() };
        assert_eq!(route.to_string(), "/mentees/2024");
        assert_eq!("/mentees/2024".parse::<Route>().ok(), Some(route));
    }
}
