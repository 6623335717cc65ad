//! Project Detail Modal
//!
//! Clicking the backdrop or the close control closes the dialog; clicks
//! inside the content box do not.

use dioxus::prelude::*;
use folio_core::{render_tag_chips, ClickTarget, DetailModal};
use folio_ui::{ButtonVariant, CloseButton, ExternalLink};

#[component]
pub fn ProjectModal(modal: Signal<DetailModal>) -> Element {
    let mut modal = modal;
    let Some(detail) = modal.read().detail().cloned() else {
        return rsx! {};
    };
    let tags = render_tag_chips(&detail.tags, Some("tag"));

    rsx! {
        div {
            id: "projectModal",
            class: "modal open",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "modalTitle",
            onclick: move |_| modal.with_mut(|m| m.click(ClickTarget::Backdrop)),

            div {
                class: "modal-content",
                onclick: move |e| {
                    e.stop_propagation();
                    modal.with_mut(|m| m.click(ClickTarget::Content));
                },

                CloseButton { onclick: move |_| modal.with_mut(|m| m.close()) }

                img {
                    id: "modalCover",
                    class: "modal-cover",
                    src: "{detail.cover}",
                    alt: "{detail.title}",
                }
                h3 { id: "modalTitle", "{detail.title}" }
                p { id: "modalDesc", "{detail.description}" }
                div { id: "modalTags", class: "tags", dangerous_inner_html: "{tags}" }
                div { class: "actions",
                    ExternalLink {
                        id: "liveDemo".to_string(),
                        href: detail.live_url.clone(),
                        "Live Demo"
                    }
                    ExternalLink {
                        id: "sourceCode".to_string(),
                        href: detail.source_url.clone(),
                        variant: ButtonVariant::Ghost,
                        "Source Code"
                    }
                }
            }
        }
    }
}
