//! Navigation Header Component
//!
//! Brand, in-page section links, theme toggle and the mobile menu toggle.
//! On narrow windows the links collapse behind the toggle.

use dioxus::prelude::*;
use folio_core::{anchor_target, NavMenu};
use folio_ui::IconButton;

use crate::context::{use_preferences, use_reveal, use_theme};

/// Sections reachable from the header
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    About,
    Projects,
    Contact,
}

impl NavLocation {
    pub const ALL: [NavLocation; 3] = [NavLocation::About, NavLocation::Projects, NavLocation::Contact];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::About => "About",
            NavLocation::Projects => "Projects",
            NavLocation::Contact => "Contact",
        }
    }

    /// In-page anchor of the section
    pub fn href(&self) -> &'static str {
        match self {
            NavLocation::About => "#about",
            NavLocation::Projects => "#projects",
            NavLocation::Contact => "#contact",
        }
    }
}

/// Navigation Header component
#[component]
pub fn NavHeader() -> Element {
    let mut theme = use_theme();
    let store = use_preferences();
    let reveal = use_reveal();
    let mut menu = use_signal(NavMenu::default);

    let toggle_theme = move |_: ()| {
        let next = theme().toggled();
        theme.set(next);
        if let Some(store) = &store {
            if let Err(e) = store.save_theme(next) {
                tracing::warn!("Failed to save theme preference: {}", e);
            }
        }
        tracing::info!(theme = next.as_str(), "Theme toggled");
    };

    let links_class = if menu().is_open() { "nav-links open" } else { "nav-links" };
    let icon = theme().icon();

    rsx! {
        header { class: "site-header",
            nav { class: "nav",
                a {
                    class: "brand",
                    href: "#home",
                    onclick: move |e| {
                        if reveal.scroll_into_view("home") {
                            e.prevent_default();
                        }
                    },
                    "Folio"
                }

                ul { class: "{links_class}",
                    for location in NavLocation::ALL {
                        li { key: "{location:?}",
                            a {
                                href: location.href(),
                                onclick: move |e| {
                                    menu.with_mut(|m| m.close());
                                    if let Some(id) = anchor_target(location.href()) {
                                        if reveal.scroll_into_view(id) {
                                            e.prevent_default();
                                        }
                                    }
                                },
                                {location.display_name()}
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    IconButton {
                        id: "themeToggle".to_string(),
                        aria_label: "Toggle theme".to_string(),
                        onclick: toggle_theme,
                        "{icon}"
                    }
                    IconButton {
                        class: "nav-toggle".to_string(),
                        aria_label: "Toggle navigation".to_string(),
                        aria_expanded: menu().is_open(),
                        onclick: move |_| {
                            menu.with_mut(|m| {
                                m.toggle();
                            });
                        },
                        "\u{2630}"
                    }
                }
            }
        }
    }
}
