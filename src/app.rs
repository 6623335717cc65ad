use dioxus::prelude::*;
use folio_core::Theme;

use crate::components::use_reveal_registry;
use crate::context::{get_app_config, get_diagnostic_log, get_preference_store};
use crate::pages::Portfolio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, configuration, diagnostics, theme and reveal
/// contexts, then
/// renders the single portfolio page.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(get_app_config);
    let store = use_context_provider(get_preference_store);
    use_context_provider(get_diagnostic_log);

    // Saved choice wins, otherwise the system preference
    let theme = use_signal(|| {
        let saved = store.as_ref().and_then(|s| match s.load_theme() {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                None
            }
        });
        let theme = Theme::resolve(saved, config.prefer_light);
        tracing::info!(theme = theme.as_str(), "Theme resolved");
        theme
    });
    use_context_provider(|| theme);

    let reveal = use_reveal_registry();
    use_context_provider(|| reveal);

    rsx! {
        style { {GLOBAL_STYLES} }
        Portfolio {}
    }
}
