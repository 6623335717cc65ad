//! End-to-end pipeline: catalog -> filter -> render -> modal

use folio_core::{
    compute_visible, render, render_grid, render_skeleton, Catalog, CatalogSource, CategoryFilter,
    ClickTarget, DetailModal, FilterState, IntersectionEntry, ProjectId, ProjectRecord, Rect,
    RevealObserver,
};

fn ids(visible: &[&ProjectRecord]) -> Vec<u32> {
    visible.iter().map(|p| p.id.0).collect()
}

#[tokio::test(start_paused = true)]
async fn skeleton_then_cards() {
    let catalog = Catalog::builtin().unwrap();
    let source = CatalogSource::new(catalog, std::time::Duration::from_millis(200));

    // Skeleton is sized before the data arrives
    let skeleton = render_skeleton(source.expected_len());
    assert_eq!(skeleton.card_count(), 6);
    assert!(skeleton.as_str().contains("skeleton"));

    let catalog = source.fetch().await;
    let visible = compute_visible(catalog.projects(), &FilterState::default());
    let cards = render(&visible);
    assert_eq!(cards.card_count(), 6);
    assert!(!cards.as_str().contains("thumb skeleton"));
}

#[test]
fn web_chip_shows_four_cards_in_order() {
    let catalog = Catalog::builtin().unwrap();
    let state = FilterState::default().with_category(CategoryFilter::from_token("web"));
    let visible = compute_visible(catalog.projects(), &state);

    assert_eq!(ids(&visible), vec![1, 3, 4, 6]);
    assert_eq!(render(&visible).card_count(), 4);
}

#[test]
fn search_weather_then_open_details() {
    let catalog = Catalog::builtin().unwrap();
    let state = FilterState::default().with_query("weather");
    let visible = compute_visible(catalog.projects(), &state);
    assert_eq!(ids(&visible), vec![5]);

    let markup = render(&visible);
    assert!(markup.as_str().contains("data-id=\"5\""));

    let mut modal = DetailModal::new();
    assert!(modal.open(&catalog, visible[0].id));
    let detail = modal.detail().unwrap();
    assert_eq!(detail.title, "Weather App");
    assert_eq!(detail.source_url, "https://github.com/noaimahmad/Weather-App");

    modal.click(ClickTarget::Backdrop);
    assert!(!modal.is_open());
}

#[test]
fn modal_lookup_uses_full_catalog() {
    let catalog = Catalog::builtin().unwrap();
    // Grid currently shows only "app" projects
    let state = FilterState::default().with_category(CategoryFilter::only("app"));
    let visible = compute_visible(catalog.projects(), &state);
    assert_eq!(ids(&visible), vec![5]);

    // A stale id from an earlier render still resolves
    let mut modal = DetailModal::new();
    assert!(modal.open(&catalog, ProjectId(1)));
    assert_eq!(modal.detail().unwrap().title, "Image Search Engine");
}

#[test]
fn empty_result_renders_empty_grid() {
    let catalog = Catalog::builtin().unwrap();
    let state = FilterState::default().with_query("no project mentions this");
    let visible = compute_visible(catalog.projects(), &state);

    assert!(visible.is_empty());
    let markup = render(&visible);
    assert!(markup.is_empty());
    assert_eq!(markup.card_count(), 0);
}

#[test]
fn rerender_reveals_cards_again() {
    let catalog = Catalog::builtin().unwrap();
    let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let on_screen = |id: u32| IntersectionEntry::new(ProjectId(id), Rect::new(0.0, 0.0, 300.0, 300.0));

    let mut observer = RevealObserver::default();
    let all = compute_visible(catalog.projects(), &FilterState::default());
    render_grid(&all, &mut observer, |id| id);
    assert_eq!(observer.process(viewport, vec![on_screen(1)]), vec![ProjectId(1)]);
    assert!(observer.process(viewport, vec![on_screen(1)]).is_empty());

    // Filtering replaces the grid; card 1 is a fresh element
    let web = compute_visible(
        catalog.projects(),
        &FilterState::default().with_category(CategoryFilter::only("web")),
    );
    render_grid(&web, &mut observer, |id| id);
    assert_eq!(observer.process(viewport, vec![on_screen(1)]), vec![ProjectId(1)]);
}
