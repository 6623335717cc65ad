//! Site footer with the current year.

use dioxus::prelude::*;
use folio_core::current_year;

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            p {
                "\u{00A9} "
                span { id: "year", "{year}" }
                " Folio. Built with Rust."
            }
        }
    }
}
