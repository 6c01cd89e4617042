use dioxus::prelude::*;
use crate::hooks::{use_in_view, InViewOptions};
use crate::services::mentees::Mentee;

/// Labelled summary lines shown under the photo
pub fn card_labels(mentee: &Mentee) -> [String; 4] {
    [
        format!("Name - {}", mentee.name),
        format!("Registration - {}", mentee.registration_number),
        format!("Class - {}", mentee.class_label),
        format!("Phone - {}", mentee.phone),
    ]
}

/// Fade classes for the card body, derived from the reveal flag
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-6"
    }
}

pub fn photo_alt(mentee: &Mentee) -> String {
    format!("{}'s profile", mentee.name)
}

#[component]
pub fn MenteeCard(mentee: Mentee, onselect: EventHandler<String>) -> Element {
    let mut in_view = use_in_view(InViewOptions::from_settings);
    let fade = reveal_class(in_view.revealed());

    let [name, registration, class_label, phone] = card_labels(&mentee);
    let alt = photo_alt(&mentee);
    let mentee_id = mentee.id.clone();

    rsx! {
        div {
            class: "w-full",
            onmounted: move |evt| in_view.attach(evt.data()),

            article {
                class: "h-[350px] flex flex-col items-center justify-center text-center rounded-lg bg-card shadow-lg cursor-pointer transition-all duration-700 ease-out hover:shadow-xl {fade}",
                onclick: move |_| onselect.call(mentee_id.clone()),

                div {
                    class: "flex flex-col items-center justify-center w-full p-4",

                    if mentee.photo_link.is_empty() {
                        div {
                            class: "h-[200px] w-[160px] mb-5 rounded bg-muted"
                        }
                    } else {
                        img {
                            class: "h-[200px] w-auto object-cover mb-5 shadow-lg",
                            src: "{mentee.photo_link}",
                            alt: "{alt}",
                            loading: "lazy",
                        }
                    }

                    h3 {
                        class: "text-lg font-semibold",
                        "{name}"
                    }
                    p {
                        class: "text-sm text-muted-foreground",
                        "{registration}"
                    }
                    p {
                        class: "text-sm text-muted-foreground",
                        "{class_label}"
                    }
                    p {
                        class: "text-sm text-muted-foreground",
                        "{phone}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> Mentee {
        Mentee {
            id: "A1".to_string(),
            name: "Asha".to_string(),
            registration_number: "R1".to_string(),
            class_label: "10A".to_string(),
            phone: "555".to_string(),
            photo_link: "a.jpg".to_string(),
        }
    }

    #[test]
    fn test_card_labels() {
        assert_eq!(
            card_labels(&asha()),
            [
                "Name - Asha".to_string(),
                "Registration - R1".to_string(),
                "Class - 10A".to_string(),
                "Phone - 555".to_string(),
            ]
        );
        assert_eq!(photo_alt(&asha()), "Asha's profile");
    }

    #[test]
    fn test_reveal_class() {
        assert!(reveal_class(false).contains("opacity-0"));
        assert!(reveal_class(true).contains("opacity-100"));
    }
}
