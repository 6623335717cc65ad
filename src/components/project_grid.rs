//! Project Grid
//!
//! Loads the catalog (skeleton cards while it arrives), applies the chip
//! and search filters, renders the matching cards and owns the detail modal.

use dioxus::prelude::*;
use folio_core::{
    render_skeleton, visible_cards, Catalog, CatalogSource, DetailModal, FilterState, ProjectId,
};
use folio_ui::{CategoryChips, SearchInput};

use crate::components::{ProjectCard, ProjectModal};
use crate::context::{use_app_config, use_reveal};

#[component]
pub fn ProjectGrid() -> Element {
    let config = use_app_config();
    let reveal = use_reveal();

    let source = use_hook(|| match Catalog::builtin() {
        Ok(catalog) => Some(CatalogSource::new(catalog, config.catalog_latency)),
        Err(e) => {
            tracing::error!("Failed to load project catalog: {}", e);
            None
        }
    });
    let load_failed = source.is_none();
    let skeleton_count = source.as_ref().map(|s| s.expected_len()).unwrap_or(0);

    let mut catalog: Signal<Option<Catalog>> = use_signal(|| None);
    let mut filter = use_signal(FilterState::default);
    let mut modal = use_signal(DetailModal::new);

    // Resolve the catalog once
    use_effect(move || {
        if let Some(source) = source.clone() {
            spawn(async move {
                let loaded = source.fetch().await;
                tracing::info!(projects = loaded.len(), "Project catalog loaded");
                catalog.set(Some(loaded));
            });
        }
    });

    let categories = use_memo(move || {
        catalog
            .read()
            .as_ref()
            .map(|c| c.categories())
            .unwrap_or_default()
    });

    // None until the catalog arrives or fails to load
    let visible = use_memo(move || {
        let catalog = catalog.read();
        let state = filter.read();
        let cards = visible_cards(catalog.as_ref(), load_failed, &state)?;
        tracing::debug!(
            category = state.category.token(),
            query = %state.query,
            visible = cards.len(),
            "Filter applied"
        );
        Some(cards)
    });

    // Every render of the grid re-observes its cards
    use_effect(move || {
        if let Some(cards) = visible() {
            let ids: Vec<ProjectId> = cards.iter().map(|c| c.id).collect();
            reveal.observe_cards(&ids);
            spawn(reveal.run_pass());
        }
    });

    let on_details = EventHandler::new(move |id: ProjectId| {
        let opened = match catalog.read().as_ref() {
            Some(catalog) => modal.write().open(catalog, id),
            None => false,
        };
        if opened {
            tracing::info!(project = %id, "Project details opened");
        } else {
            tracing::debug!(project = %id, "Details requested for unknown project");
        }
    });
    let skeleton = render_skeleton(skeleton_count);

    rsx! {
        div { class: "toolbar",
            CategoryChips {
                categories: categories(),
                selected: filter().category,
                on_select: move |category| filter.with_mut(|f| f.category = category),
            }
            SearchInput {
                value: filter().query,
                oninput: move |query| filter.with_mut(|f| f.query = query),
            }
        }

        {match visible() {
            None => rsx! {
                div {
                    id: "projectGrid",
                    class: "grid loading",
                    "aria-busy": "true",
                    dangerous_inner_html: "{skeleton}",
                }
            },
            Some(cards) => rsx! {
                div { id: "projectGrid", class: "grid",
                    for card in cards {
                        ProjectCard {
                            key: "{card.id}",
                            card: card.clone(),
                            on_details: on_details,
                        }
                    }
                }
            },
        }}

        ProjectModal { modal }
    }
}
