//! Hero Section
//!
//! Intro block with the parallax backdrop. The transform is computed by the
//! page from pointer movement and passed in.

use dioxus::prelude::*;
use folio_ui::{ButtonVariant, ExternalLink};

use crate::components::RevealKey;
use crate::context::use_reveal;

#[component]
pub fn Hero(
    /// CSS transform of the parallax layer
    transform: String,
) -> Element {
    let reveal = use_reveal();

    rsx! {
        section {
            id: "home",
            class: "hero",
            // Anchor only; the hero is visible from the start
            onmounted: move |e| reveal.attach(RevealKey::Section("home".to_string()), e.data()),
            div { class: "parallax", style: "transform: {transform};" }
            div { class: "hero-content",
                p { class: "eyebrow", "Front-end developer" }
                h1 { "Hi, I build fast, friendly web experiences." }
                p { class: "lead",
                    "Responsive sites, small tools and API-driven apps. "
                    "Browse the projects below or get in touch."
                }
                div { class: "hero-actions",
                    a {
                        class: "btn",
                        href: "#projects",
                        onclick: move |e| {
                            if reveal.scroll_into_view("projects") {
                                e.prevent_default();
                            }
                        },
                        "View projects"
                    }
                    ExternalLink {
                        href: "https://github.com/noaimahmad".to_string(),
                        variant: ButtonVariant::Ghost,
                        "GitHub"
                    }
                }
            }
        }
    }
}
