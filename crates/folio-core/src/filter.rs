//! Filter engine: category chip + free-text search over the catalog.
//!
//! The visible set is always re-derived from the full catalog, so the same
//! [`FilterState`] yields the same subset no matter what came before.

use serde::{Deserialize, Serialize};

use crate::catalog::ProjectRecord;

/// Wildcard token carried by the "All" chip.
pub const ALL_TOKEN: &str = "all";

/// Active category selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Wildcard: every category matches
    #[default]
    All,
    /// Only records whose `type` equals this token
    Only(String),
}

impl CategoryFilter {
    /// Build from a chip token; `"all"` maps to the wildcard.
    pub fn from_token(token: &str) -> Self {
        if token == ALL_TOKEN {
            Self::All
        } else {
            Self::Only(token.to_string())
        }
    }

    pub fn only(token: impl Into<String>) -> Self {
        Self::Only(token.into())
    }

    /// The token this filter would be carried as on a chip.
    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_TOKEN,
            Self::Only(token) => token,
        }
    }

    pub fn matches(&self, kind: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(token) => token == kind,
        }
    }
}

/// Transient filter state: active chip plus search query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Trimmed, lowercased query; `None` when there is nothing to search for.
    fn needle(&self) -> Option<String> {
        let q = self.query.trim();
        if q.is_empty() {
            None
        } else {
            Some(q.to_lowercase())
        }
    }

    /// Whether a single record passes both predicates.
    pub fn accepts(&self, record: &ProjectRecord) -> bool {
        self.category.matches(&record.kind) && text_matches(record, self.needle().as_deref())
    }
}

fn text_matches(record: &ProjectRecord, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => {
            record.title.to_lowercase().contains(needle)
                || record.description.to_lowercase().contains(needle)
        }
    }
}

/// Records passing `state`, in catalog order.
///
/// Only `title` and `description` are searched; tags are not. An empty result
/// is a valid outcome and renders as an empty grid.
pub fn compute_visible<'a>(
    catalog: &'a [ProjectRecord],
    state: &FilterState,
) -> Vec<&'a ProjectRecord> {
    let needle = state.needle();
    catalog
        .iter()
        .filter(|p| state.category.matches(&p.kind) && text_matches(p, needle.as_deref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids(visible: &[&ProjectRecord]) -> Vec<u32> {
        visible.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_all_and_empty_query_is_identity() {
        let catalog = Catalog::builtin().unwrap();
        let visible = compute_visible(catalog.projects(), &FilterState::default());
        assert_eq!(ids(&visible), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_web_category() {
        let catalog = Catalog::builtin().unwrap();
        let state = FilterState::new(CategoryFilter::only("web"), "");
        let visible = compute_visible(catalog.projects(), &state);
        assert_eq!(ids(&visible), vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_weather_query() {
        let catalog = Catalog::builtin().unwrap();
        let state = FilterState::new(CategoryFilter::All, "weather");
        let visible = compute_visible(catalog.projects(), &state);
        assert_eq!(ids(&visible), vec![5]);
        assert_eq!(visible[0].title, "Weather App");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let lower = compute_visible(catalog.projects(), &FilterState::default().with_query("weather"));
        let upper = compute_visible(catalog.projects(), &FilterState::default().with_query("WEATHER"));
        let mixed = compute_visible(catalog.projects(), &FilterState::default().with_query("Weather"));
        assert_eq!(lower, upper);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn test_query_is_trimmed() {
        let catalog = Catalog::builtin().unwrap();
        let padded = compute_visible(catalog.projects(), &FilterState::default().with_query("  weather "));
        assert_eq!(ids(&padded), vec![5]);

        let blank = compute_visible(catalog.projects(), &FilterState::default().with_query("   "));
        assert_eq!(blank.len(), 6);
    }

    #[test]
    fn test_description_is_searched() {
        let catalog = Catalog::builtin().unwrap();
        let visible = compute_visible(catalog.projects(), &FilterState::default().with_query("unsplash"));
        assert_eq!(ids(&visible), vec![1]);
    }

    #[test]
    fn test_tags_are_not_searched() {
        let catalog = Catalog::builtin().unwrap();
        // "Bootstrap" only appears as a tag on project 4
        let visible = compute_visible(catalog.projects(), &FilterState::default().with_query("bootstrap"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_category_and_query_combine() {
        let catalog = Catalog::builtin().unwrap();
        let state = FilterState::new(CategoryFilter::only("web"), "responsive");
        let visible = compute_visible(catalog.projects(), &state);
        assert_eq!(ids(&visible), vec![1, 4, 6]);
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let catalog = Catalog::builtin().unwrap();
        let state = FilterState::new(CategoryFilter::only("games"), "");
        assert!(compute_visible(catalog.projects(), &state).is_empty());
    }

    #[test]
    fn test_from_token() {
        assert_eq!(CategoryFilter::from_token("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_token("app"), CategoryFilter::only("app"));
        assert_eq!(CategoryFilter::only("tools").token(), "tools");
        assert_eq!(CategoryFilter::All.token(), "all");
    }

    #[test]
    fn test_accepts_agrees_with_compute_visible() {
        let catalog = Catalog::builtin().unwrap();
        let state = FilterState::new(CategoryFilter::only("web"), "website");
        let visible = compute_visible(catalog.projects(), &state);
        for project in catalog.projects() {
            assert_eq!(state.accepts(project), visible.contains(&project));
        }
    }
}
