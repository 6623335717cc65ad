//! Reveal-on-scroll wiring
//!
//! Mounted elements are measured against the scrolling page container and
//! fed to the core `RevealObserver`. Revealed keys get the `show` class.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use dioxus::prelude::*;
use folio_core::{scroll_progress, IntersectionEntry, ProjectId, Rect, RevealObserver};

/// Identifies an element that reveals on scroll
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RevealKey {
    /// Static page section, keyed by its element id
    Section(String),
    Card(ProjectId),
}

/// Shared reveal state. Copy, since every field is a signal handle.
#[derive(Clone, Copy, PartialEq)]
pub struct RevealRegistry {
    observer: Signal<RevealObserver<RevealKey>>,
    elements: Signal<HashMap<RevealKey, Rc<MountedData>>>,
    shown: Signal<HashSet<RevealKey>>,
    viewport: Signal<Option<Rc<MountedData>>>,
    viewport_size: Signal<(f64, f64)>,
}

/// Create the registry for the App context.
pub fn use_reveal_registry() -> RevealRegistry {
    RevealRegistry {
        observer: use_signal(RevealObserver::default),
        elements: use_signal(HashMap::new),
        shown: use_signal(HashSet::new),
        viewport: use_signal(|| None),
        viewport_size: use_signal(|| (0.0, 0.0)),
    }
}

fn to_rect(rect: dioxus::html::geometry::PixelsRect) -> Rect {
    Rect::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

impl RevealRegistry {
    /// Set the scrolling container that acts as the viewport.
    pub fn set_viewport(&self, element: Rc<MountedData>) {
        let mut viewport = self.viewport;
        viewport.set(Some(element));
    }

    /// Last measured viewport size (width, height).
    pub fn viewport_size(&self) -> (f64, f64) {
        *self.viewport_size.peek()
    }

    /// Record the mounted element for `key`.
    pub fn attach(&self, key: RevealKey, element: Rc<MountedData>) {
        let mut elements = self.elements;
        elements.write().insert(key, element);
    }

    /// Start watching `key`. Clears any earlier reveal.
    pub fn observe(&self, key: RevealKey) {
        let mut observer = self.observer;
        let mut shown = self.shown;
        observer.write().observe(key.clone());
        shown.write().remove(&key);
    }

    /// Re-observe the cards of a fresh grid render and forget cards that
    /// are no longer in it.
    pub fn observe_cards(&self, ids: &[ProjectId]) {
        let stale: Vec<RevealKey> = self
            .elements
            .peek()
            .keys()
            .filter(|key| matches!(key, RevealKey::Card(id) if !ids.contains(id)))
            .cloned()
            .collect();

        let mut observer = self.observer;
        let mut elements = self.elements;
        for key in &stale {
            observer.write().unobserve(key);
            elements.write().remove(key);
        }

        for id in ids {
            self.observe(RevealKey::Card(*id));
        }
    }

    /// Whether `key` has been revealed. Subscribes the caller.
    pub fn is_shown(&self, key: &RevealKey) -> bool {
        self.shown.read().contains(key)
    }

    /// Smoothly scroll the section with element id `id` into view.
    ///
    /// Returns false (and does nothing) for unknown ids.
    pub fn scroll_into_view(&self, id: &str) -> bool {
        let Some(element) = self
            .elements
            .peek()
            .get(&RevealKey::Section(id.to_string()))
            .cloned()
        else {
            return false;
        };

        spawn(async move {
            if let Err(e) = element.scroll_to(ScrollBehavior::Smooth).await {
                tracing::debug!("Smooth scroll failed: {:?}", e);
            }
        });
        true
    }

    /// Scrolled share of the page container in percent.
    pub async fn scroll_percent(self) -> Option<f64> {
        let root = self.viewport.peek().clone()?;
        let offset = root.get_scroll_offset().await.ok()?;
        let size = root.get_scroll_size().await.ok()?;
        let client = root.get_client_rect().await.ok()?;
        Some(scroll_progress(offset.y, size.height, client.size.height))
    }

    /// Measure every watched element and reveal the ones in view.
    pub async fn run_pass(self) {
        let Some(root) = self.viewport.peek().clone() else {
            return;
        };
        let viewport = match root.get_client_rect().await {
            Ok(rect) => to_rect(rect),
            Err(e) => {
                tracing::debug!("Viewport not measurable: {:?}", e);
                return;
            }
        };
        let mut viewport_size = self.viewport_size;
        viewport_size.set((viewport.width, viewport.height));

        let targets: Vec<(RevealKey, Rc<MountedData>)> = {
            let observer = self.observer.peek();
            self.elements
                .peek()
                .iter()
                .filter(|(key, _)| observer.is_observed(key))
                .map(|(key, element)| (key.clone(), element.clone()))
                .collect()
        };
        if targets.is_empty() {
            return;
        }

        let mut entries = Vec::with_capacity(targets.len());
        for (key, element) in targets {
            // Elements removed since mounting no longer measure
            if let Ok(rect) = element.get_client_rect().await {
                entries.push(IntersectionEntry::new(key, to_rect(rect)));
            }
        }

        let mut observer = self.observer;
        let revealed = observer.write().process(viewport, entries);
        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), "Revealed elements");
            let mut shown = self.shown;
            shown.write().extend(revealed);
        }
    }
}

/// Page section that fades in the first time it scrolls into view
#[component]
pub fn RevealSection(
    /// Element id, also the smooth-scroll anchor
    id: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let reveal = crate::context::use_reveal();
    let key = RevealKey::Section(id.clone());
    let shown = reveal.is_shown(&key);
    let mut full_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("reveal {}", extra),
        _ => "reveal".to_string(),
    };
    if shown {
        full_class.push_str(" show");
    }

    rsx! {
        section {
            id: "{id}",
            class: "{full_class}",
            onmounted: move |e| {
                reveal.attach(key.clone(), e.data());
                reveal.observe(key.clone());
                spawn(reveal.run_pass());
            },
            {children}
        }
    }
}
