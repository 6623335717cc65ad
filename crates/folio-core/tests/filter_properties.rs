//! Property-based tests for the filter engine
//!
//! Uses proptest to check ordering, predicate and idempotence properties of
//! `compute_visible` over generated catalogs.

use folio_core::{compute_visible, CategoryFilter, FilterState, ProjectId, ProjectRecord};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn kind_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("web"), Just("app"), Just("tools")].prop_map(String::from)
}

/// Short words over a small alphabet so queries actually hit
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C ]{1,24}").expect("valid regex")
}

fn record_strategy() -> impl Strategy<Value = (String, String, String, Vec<String>)> {
    (
        kind_strategy(),
        text_strategy().prop_filter("non-empty title", |t| !t.trim().is_empty()),
        text_strategy(),
        prop::collection::vec(text_strategy(), 0..4),
    )
}

/// Catalog with unique ids 1..=n in order
fn catalog_strategy() -> impl Strategy<Value = Vec<ProjectRecord>> {
    prop::collection::vec(record_strategy(), 0..12).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, (kind, title, description, tags))| ProjectRecord {
                id: ProjectId(i as u32 + 1),
                kind,
                title,
                description,
                cover: format!("cover_{}.png", i),
                tags,
                live_url: format!("https://example.com/{}", i),
                source_url: format!("https://example.com/{}/src", i),
            })
            .collect()
    })
}

fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just("all"),
        Just("web"),
        Just("app"),
        Just("tools"),
        Just("games"),
    ]
    .prop_map(CategoryFilter::from_token)
}

fn state_strategy() -> impl Strategy<Value = FilterState> {
    (
        category_strategy(),
        prop::string::string_regex("[a-cA-C ]{0,4}").expect("valid regex"),
    )
        .prop_map(|(category, query)| FilterState::new(category, query))
}

fn satisfies(record: &ProjectRecord, state: &FilterState) -> bool {
    let category_ok = match &state.category {
        CategoryFilter::All => true,
        CategoryFilter::Only(token) => &record.kind == token,
    };
    let q = state.query.trim().to_lowercase();
    let text_ok = q.is_empty()
        || record.title.to_lowercase().contains(&q)
        || record.description.to_lowercase().contains(&q);
    category_ok && text_ok
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Result is an order-preserving subsequence and every member passes
    #[test]
    fn visible_is_ordered_subsequence(catalog in catalog_strategy(), state in state_strategy()) {
        let visible = compute_visible(&catalog, &state);

        let ids: Vec<u32> = visible.iter().map(|p| p.id.0).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&ids, &sorted);

        for record in &visible {
            prop_assert!(satisfies(record, &state));
        }
    }

    /// Nothing that passes the predicates is left out
    #[test]
    fn visible_is_complete(catalog in catalog_strategy(), state in state_strategy()) {
        let visible = compute_visible(&catalog, &state);
        let expected = catalog.iter().filter(|r| satisfies(r, &state)).count();
        prop_assert_eq!(visible.len(), expected);
    }

    /// The wildcard with an empty query returns the catalog unchanged
    #[test]
    fn all_with_empty_query_is_identity(catalog in catalog_strategy()) {
        let visible = compute_visible(&catalog, &FilterState::default());
        let expected: Vec<&ProjectRecord> = catalog.iter().collect();
        prop_assert_eq!(visible, expected);
    }

    /// Same state, same result, regardless of what ran before
    #[test]
    fn filtering_is_idempotent(
        catalog in catalog_strategy(),
        state in state_strategy(),
        other in state_strategy()
    ) {
        let first = compute_visible(&catalog, &state);
        let _ = compute_visible(&catalog, &other);
        let second = compute_visible(&catalog, &state);
        prop_assert_eq!(first, second);
    }

    /// Query case never changes the result
    #[test]
    fn query_case_is_ignored(catalog in catalog_strategy(), state in state_strategy()) {
        let upper = state.clone().with_query(state.query.to_uppercase());
        let lower = state.clone().with_query(state.query.to_lowercase());
        prop_assert_eq!(compute_visible(&catalog, &upper), compute_visible(&catalog, &lower));
    }

    /// Narrowing the category never grows the result
    #[test]
    fn category_narrows(catalog in catalog_strategy(), query in "[a-c]{0,3}") {
        let all = compute_visible(&catalog, &FilterState::new(CategoryFilter::All, query.clone()));
        for token in ["web", "app", "tools"] {
            let some = compute_visible(&catalog, &FilterState::new(CategoryFilter::only(token), query.clone()));
            prop_assert!(some.len() <= all.len());
        }
    }
}
