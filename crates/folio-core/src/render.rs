//! Card renderer: project records to markup.
//!
//! Rendering is a pure mapping from records to an HTML fragment. Every
//! record-derived value is escaped before it lands in the fragment.
//! [`render_grid`] additionally registers each rendered card with a
//! [`RevealObserver`].

use std::fmt;

use crate::catalog::{Catalog, ProjectId, ProjectRecord};
use crate::filter::{compute_visible, FilterState};
use crate::reveal::RevealObserver;

/// An HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Markup(String);

impl Markup {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of rendered cards (real or skeleton) in the fragment.
    pub fn card_count(&self) -> usize {
        self.0.matches("<article class=\"card project").count()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Class list of a rendered card before it is revealed.
pub const CARD_CLASS: &str = "card project reveal";

/// `data-action` of the control that opens the detail modal.
pub const DETAILS_ACTION: &str = "details";

/// Attribute values one card exposes. Both the markup renderer and the
/// desktop card component read them from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAttrs {
    pub class: &'static str,
    /// `data-type` of the card
    pub data_type: String,
    /// `data-title` of the card
    pub data_title: String,
    pub cover: String,
    pub alt: String,
    /// `data-id` of the "Details" control
    pub details_id: String,
    /// `data-action` of the "Details" control
    pub details_action: &'static str,
    pub live_url: String,
}

/// Display model of one card.
///
/// Components that build their own element tree (the desktop grid) read
/// from this instead of the record so both renderings expose the same
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ProjectId,
    pub kind: String,
    pub cover: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub live_url: String,
}

impl CardView {
    /// Lowercased title, carried as `data-title`.
    pub fn data_title(&self) -> String {
        self.title.to_lowercase()
    }

    /// Alt text for the cover image.
    pub fn alt(&self) -> &str {
        &self.title
    }

    pub fn attrs(&self) -> CardAttrs {
        CardAttrs {
            class: CARD_CLASS,
            data_type: self.kind.clone(),
            data_title: self.data_title(),
            cover: self.cover.clone(),
            alt: self.alt().to_string(),
            details_id: self.id.to_string(),
            details_action: DETAILS_ACTION,
            live_url: self.live_url.clone(),
        }
    }

    pub fn to_markup(&self) -> Markup {
        let attrs = self.attrs();
        Markup(format!(
            concat!(
                "<article class=\"{class}\" data-type=\"{kind}\" data-title=\"{data_title}\">",
                "<img class=\"thumb\" src=\"{cover}\" alt=\"{alt}\" loading=\"lazy\"/>",
                "<div class=\"pad\">",
                "<h3>{title}</h3>",
                "<p>{description}</p>",
                "<div class=\"tags\">{tags}</div>",
                "<div class=\"actions\">",
                "<button class=\"btn\" data-id=\"{id}\" data-action=\"{action}\">Details</button>",
                "<a class=\"btn-ghost\" href=\"{live}\" target=\"_blank\" rel=\"noopener\">Live</a>",
                "</div></div></article>",
            ),
            class = attrs.class,
            kind = escape_html(&attrs.data_type),
            data_title = escape_html(&attrs.data_title),
            cover = escape_html(&attrs.cover),
            alt = escape_html(&attrs.alt),
            title = escape_html(&self.title),
            description = escape_html(&self.description),
            tags = render_tag_chips(&self.tags, None),
            id = escape_html(&attrs.details_id),
            action = attrs.details_action,
            live = escape_html(&attrs.live_url),
        ))
    }
}

impl From<&ProjectRecord> for CardView {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            kind: record.kind.clone(),
            cover: record.cover.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            tags: record.tags.clone(),
            live_url: record.live_url.clone(),
        }
    }
}

/// Tag chips as `<span>` elements, optionally with a class.
pub fn render_tag_chips(tags: &[String], class: Option<&str>) -> Markup {
    let open = match class {
        Some(class) => format!("<span class=\"{}\">", escape_html(class)),
        None => "<span>".to_string(),
    };
    let mut out = String::new();
    for tag in tags {
        out.push_str(&open);
        out.push_str(&escape_html(tag));
        out.push_str("</span>");
    }
    Markup(out)
}

/// Real cards for `items`, in order. An empty slice yields empty markup.
pub fn render(items: &[&ProjectRecord]) -> Markup {
    let mut out = String::new();
    for record in items {
        out.push_str(CardView::from(*record).to_markup().as_str());
    }
    Markup(out)
}

/// Render `items` and register each card with `observer`.
///
/// Every rendered card is a new element, so a card revealed by an earlier
/// render is observed again and reveals again.
pub fn render_grid<K, F>(items: &[&ProjectRecord], observer: &mut RevealObserver<K>, key: F) -> Markup
where
    K: Eq + std::hash::Hash + Clone,
    F: Fn(ProjectId) -> K,
{
    let markup = render(items);
    for record in items {
        observer.observe(key(record.id));
    }
    markup
}

/// Cards the grid shows for `state`.
///
/// `None` only while the catalog is still on its way. A catalog that failed
/// to load settles on an empty grid instead of loading forever.
pub fn visible_cards(
    catalog: Option<&Catalog>,
    load_failed: bool,
    state: &FilterState,
) -> Option<Vec<CardView>> {
    match catalog {
        Some(catalog) => Some(
            compute_visible(catalog.projects(), state)
                .into_iter()
                .map(CardView::from)
                .collect(),
        ),
        None if load_failed => Some(Vec::new()),
        None => None,
    }
}

/// `count` placeholder cards shown before the catalog arrives.
pub fn render_skeleton(count: usize) -> Markup {
    const SKELETON: &str = concat!(
        "<article class=\"card project\">",
        "<div class=\"thumb skeleton\"></div>",
        "<div class=\"pad\">",
        "<div class=\"skeleton line\"></div>",
        "<div class=\"skeleton line short\"></div>",
        "</div></article>",
    );
    Markup(SKELETON.repeat(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::reveal::{IntersectionEntry, Rect};

    fn hostile_record() -> ProjectRecord {
        ProjectRecord {
            id: ProjectId(9),
            kind: "web".to_string(),
            title: "<script>alert(1)</script>".to_string(),
            description: "Tom & \"Jerry\"".to_string(),
            cover: "x.png\" onerror=\"boom".to_string(),
            tags: vec!["<b>".to_string()],
            live_url: "https://example.com/?a=1&b=2".to_string(),
            source_url: String::new(),
        }
    }

    #[test]
    fn test_render_empty_is_empty() {
        let markup = render(&[]);
        assert!(markup.is_empty());
        assert_eq!(markup.card_count(), 0);
    }

    #[test]
    fn test_render_card_fields() {
        let catalog = Catalog::builtin().unwrap();
        let weather = catalog.get(ProjectId(5)).unwrap();
        let markup = render(&[weather]);
        let html = markup.as_str();

        assert_eq!(markup.card_count(), 1);
        assert!(html.contains("src=\"weather_app.png\""));
        assert!(html.contains("loading=\"lazy\""));
        assert!(html.contains("<h3>Weather App</h3>"));
        assert!(html.contains("data-id=\"5\" data-action=\"details\""));
        assert!(html.contains("href=\"https://noaimahmad.github.io/Weather-App/\" target=\"_blank\" rel=\"noopener\""));
        assert!(html.contains("data-type=\"app\""));
        assert!(html.contains("data-title=\"weather app\""));
    }

    #[test]
    fn test_visible_cards_loading_failed_and_loaded() {
        let state = FilterState::default();
        assert_eq!(visible_cards(None, false, &state), None);
        assert_eq!(visible_cards(None, true, &state), Some(Vec::new()));

        let catalog = Catalog::builtin().unwrap();
        let cards = visible_cards(Some(&catalog), false, &state).unwrap();
        assert_eq!(cards.len(), catalog.len());
        assert_eq!(cards[0].id, catalog.projects()[0].id);
    }

    #[test]
    fn test_card_attrs_match_rendered_markup() {
        let catalog = Catalog::builtin().unwrap();
        for record in catalog.projects() {
            let card = CardView::from(record);
            let attrs = card.attrs();
            let html = card.to_markup().into_string();

            assert_eq!(attrs.details_id, record.id.to_string());
            assert_eq!(attrs.details_action, "details");
            assert_eq!(attrs.data_type, record.kind);
            assert_eq!(attrs.live_url, record.live_url);
            assert!(html.starts_with(&format!("<article class=\"{}\"", attrs.class)));
            assert!(html.contains(&format!(
                "data-id=\"{}\" data-action=\"{}\"",
                attrs.details_id, attrs.details_action
            )));
            assert!(html.contains(&format!("data-title=\"{}\"", escape_html(&attrs.data_title))));
            assert!(html.contains(&format!("src=\"{}\"", escape_html(&attrs.cover))));
            // The details id resolves back to the record
            assert_eq!(ProjectId::parse(&attrs.details_id), Some(record.id));
        }
    }

    #[test]
    fn test_render_preserves_order_and_tag_order() {
        let catalog = Catalog::builtin().unwrap();
        let items: Vec<&ProjectRecord> = catalog.projects().iter().collect();
        let markup = render(&items);
        assert_eq!(markup.card_count(), 6);

        let html = markup.as_str();
        let first = html.find("Image Search Engine").unwrap();
        let last = html.find("The Afghanistan Tourism Website").unwrap();
        assert!(first < last);

        let chips = render_tag_chips(&catalog.get(ProjectId(3)).unwrap().tags, None);
        assert_eq!(
            chips.as_str(),
            "<span>HTML</span><span>CSS</span><span>JS</span><span>API</span><span>Charts</span>"
        );
    }

    #[test]
    fn test_render_escapes_record_fields() {
        let record = hostile_record();
        let html = render(&[&record]).into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
        assert!(html.contains("<span>&lt;b&gt;</span>"));
        assert!(html.contains("x.png&quot; onerror=&quot;boom"));
        assert!(html.contains("?a=1&amp;b=2"));
    }

    #[test]
    fn test_skeleton_count() {
        assert_eq!(render_skeleton(6).card_count(), 6);
        assert_eq!(render_skeleton(0).card_count(), 0);
        assert!(render_skeleton(1).as_str().contains("skeleton line short"));
    }

    #[test]
    fn test_tag_chips_with_class() {
        let tags = vec!["JS".to_string(), "Web Speech".to_string()];
        assert_eq!(
            render_tag_chips(&tags, Some("chip")).as_str(),
            "<span class=\"chip\">JS</span><span class=\"chip\">Web Speech</span>"
        );
    }

    #[test]
    fn test_render_grid_registers_each_card() {
        let catalog = Catalog::builtin().unwrap();
        let items: Vec<&ProjectRecord> = catalog.projects().iter().take(3).collect();
        let mut observer = RevealObserver::default();

        let markup = render_grid(&items, &mut observer, |id| id);
        assert_eq!(markup.card_count(), 3);
        assert_eq!(observer.observed_len(), 3);

        let revealed = observer.process(
            Rect::new(0.0, 0.0, 800.0, 600.0),
            vec![IntersectionEntry::new(ProjectId(2), Rect::new(0.0, 0.0, 200.0, 200.0))],
        );
        assert_eq!(revealed, vec![ProjectId(2)]);
        assert_eq!(observer.observed_len(), 2);
    }
}
