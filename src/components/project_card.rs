//! Project Card Component
//!
//! One card of the project grid. Reveals on scroll like the static sections.

use dioxus::prelude::*;
use folio_core::{CardView, ProjectId};
use folio_ui::{ButtonVariant, ExternalLink};

use crate::components::RevealKey;
use crate::context::use_reveal;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectCardProps {
    pub card: CardView,
    /// Called with the card's id when "Details" is clicked
    pub on_details: EventHandler<ProjectId>,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let reveal = use_reveal();
    let card = props.card;
    let id = card.id;
    let shown = reveal.is_shown(&RevealKey::Card(id));
    let on_details = props.on_details;
    let attrs = card.attrs();
    let class = if shown { format!("{} show", attrs.class) } else { attrs.class.to_string() };

    rsx! {
        article {
            class: "{class}",
            "data-type": "{attrs.data_type}",
            "data-title": "{attrs.data_title}",
            onmounted: move |e| {
                reveal.attach(RevealKey::Card(id), e.data());
                spawn(reveal.run_pass());
            },

            img {
                class: "thumb",
                src: "{attrs.cover}",
                alt: "{attrs.alt}",
                loading: "lazy",
            }
            div { class: "pad",
                h3 { "{card.title}" }
                p { "{card.description}" }
                div { class: "tags",
                    for tag in card.tags.iter() {
                        span { key: "{tag}", "{tag}" }
                    }
                }
                div { class: "actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        "data-id": "{attrs.details_id}",
                        "data-action": attrs.details_action,
                        onclick: move |_| on_details.call(id),
                        "Details"
                    }
                    ExternalLink {
                        href: attrs.live_url.clone(),
                        variant: ButtonVariant::Ghost,
                        "Live"
                    }
                }
            }
        }
    }
}
