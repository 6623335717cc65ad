//! The portfolio page: header, hero, about, projects, contact and footer.
//!
//! The page container is the scroll root. Its scroll events drive the
//! progress bar and reveal passes; pointer movement drives the parallax.

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::{parallax_offset, parallax_transform, FrameGate};

use crate::components::{
    ContactFormView, Footer, Hero, NavHeader, ProjectGrid, RevealSection, ScrollProgress,
};
use crate::context::{use_reveal, use_theme};

/// One animation frame
const FRAME: Duration = Duration::from_millis(16);

#[component]
pub fn Portfolio() -> Element {
    let theme = use_theme();
    let reveal = use_reveal();

    let mut progress = use_signal(|| 0.0_f64);
    let mut transform = use_signal(|| parallax_transform((0.0, 0.0)));
    let gate = use_hook(FrameGate::new);

    let refresh = move || {
        spawn(async move {
            reveal.run_pass().await;
            if let Some(percent) = reveal.scroll_percent().await {
                progress.set(percent);
            }
        });
    };

    let on_pointer_move = move |e: MouseEvent| {
        // At most one pending update per frame; later events are dropped
        if !gate.try_begin() {
            return;
        }
        let point = e.client_coordinates();
        let gate = gate.clone();
        spawn(async move {
            tokio::time::sleep(FRAME).await;
            let (width, height) = reveal.viewport_size();
            transform.set(parallax_transform(parallax_offset(point.x, point.y, width, height)));
            gate.finish();
        });
    };

    let data_theme = theme().data_attr();
    let percent = progress();

    rsx! {
        div {
            class: "page",
            "data-theme": "{data_theme}",
            onmounted: move |e| {
                reveal.set_viewport(e.data());
                refresh();
            },
            onscroll: move |_| refresh(),
            onmousemove: on_pointer_move,

            ScrollProgress { percent }
            NavHeader {}

            main {
                Hero { transform: transform() }

                RevealSection { id: "about".to_string(),
                    h2 { class: "section-title", "About" }
                    p {
                        "I design and build responsive websites and small web tools with "
                        "HTML, CSS and JavaScript, and enjoy wiring them up to public APIs."
                    }
                    ul { class: "skills",
                        li { "HTML & CSS" }
                        li { "JavaScript" }
                        li { "REST APIs" }
                        li { "Bootstrap" }
                    }
                }

                RevealSection { id: "projects".to_string(),
                    h2 { class: "section-title", "Projects" }
                    ProjectGrid {}
                }

                RevealSection { id: "contact".to_string(),
                    h2 { class: "section-title", "Contact" }
                    p { "Have a project in mind? Send a message and I will get back to you." }
                    ContactFormView {}
                }
            }

            Footer {}
        }
    }
}
