//! Category Chips Component
//!
//! Row of filter chips, one per category token plus the "all" wildcard.
//! The active chip carries the `active` class.

use dioxus::prelude::*;
use folio_core::filter::ALL_TOKEN;
use folio_core::CategoryFilter;

/// Properties for the CategoryChips component
#[derive(Clone, PartialEq, Props)]
pub struct CategoryChipsProps {
    /// Category tokens, without the wildcard
    pub categories: Vec<String>,
    /// Currently active filter
    pub selected: CategoryFilter,
    /// Called with the filter of the clicked chip
    pub on_select: EventHandler<CategoryFilter>,
}

/// Chip label for a token ("web" -> "Web", "all" -> "All").
pub fn chip_label(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Wildcard first, then the categories in the order given.
pub fn chip_tokens(categories: &[String]) -> Vec<String> {
    std::iter::once(ALL_TOKEN.to_string())
        .chain(categories.iter().filter(|c| c.as_str() != ALL_TOKEN).cloned())
        .collect()
}

/// Displays the filter chips
///
/// # Example
///
/// ```rust,ignore
/// let mut filter = use_signal(FilterState::default);
///
/// rsx! {
///     CategoryChips {
///         categories: catalog.categories(),
///         selected: filter().category,
///         on_select: move |category| filter.with_mut(|f| f.category = category),
///     }
/// }
/// ```
#[component]
pub fn CategoryChips(props: CategoryChipsProps) -> Element {
    let selected = props.selected.token().to_string();

    rsx! {
        div {
            class: "filters",
            role: "radiogroup",
            "aria-label": "Filter projects by category",
            for token in chip_tokens(&props.categories) {
                {
                    let is_active = selected == token;
                    let on_select = props.on_select;
                    let label = chip_label(&token);
                    let clicked = CategoryFilter::from_token(&token);
                    rsx! {
                        button {
                            key: "{token}",
                            class: if is_active { "chip active" } else { "chip" },
                            r#type: "button",
                            role: "radio",
                            "aria-checked": if is_active { "true" } else { "false" },
                            "data-filter": "{token}",
                            onclick: move |_| {
                                on_select.call(clicked.clone());
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chip_tokens_start_with_wildcard() {
        let tokens = chip_tokens(&["web".to_string(), "tools".to_string(), "app".to_string()]);
        assert_eq!(tokens, vec!["all", "web", "tools", "app"]);
    }

    #[test]
    fn chip_tokens_skip_duplicate_wildcard() {
        let tokens = chip_tokens(&["all".to_string(), "web".to_string()]);
        assert_eq!(tokens, vec!["all", "web"]);
    }

    #[test]
    fn chip_labels_are_capitalized() {
        assert_eq!(chip_label("all"), "All");
        assert_eq!(chip_label("tools"), "Tools");
        assert_eq!(chip_label(""), "");
    }
}
