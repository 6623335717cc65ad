//! Scroll progress bar pinned to the top of the window.

use dioxus::prelude::*;

#[component]
pub fn ScrollProgress(
    /// Scrolled share of the page, 0 to 100
    percent: f64,
) -> Element {
    rsx! {
        div { class: "progress", "aria-hidden": "true",
            div { class: "bar", style: "width: {percent}%;" }
        }
    }
}
