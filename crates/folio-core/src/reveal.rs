//! One-shot visibility observer for reveal-on-scroll.
//!
//! Elements are registered with [`RevealObserver::observe`]. Each visibility
//! pass hands the observer the current viewport and the bounds of the
//! elements on screen; an observed element whose visible share reaches the
//! threshold is revealed exactly once and dropped from the observed set.

use std::collections::HashSet;
use std::hash::Hash;

/// Visible share of an element required for reveal.
pub const DEFAULT_THRESHOLD: f64 = 0.12;

/// Margin grown around the viewport on every side.
pub const DEFAULT_ROOT_MARGIN: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
        }
    }
}

/// Axis-aligned rectangle in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grow by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Rect {
        Rect::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Overlap with `other`, if the two touch or overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Share of `target` visible inside `root`, in `[0, 1]`.
///
/// A zero-area target counts as fully visible while it lies inside `root`.
pub fn intersection_ratio(target: &Rect, root: &Rect) -> f64 {
    match target.intersection(root) {
        None => 0.0,
        Some(overlap) => {
            let area = target.area();
            if area == 0.0 {
                1.0
            } else {
                (overlap.area() / area).clamp(0.0, 1.0)
            }
        }
    }
}

/// Current bounds of one element during a visibility pass.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<K> {
    pub key: K,
    pub bounds: Rect,
}

impl<K> IntersectionEntry<K> {
    pub fn new(key: K, bounds: Rect) -> Self {
        Self { key, bounds }
    }
}

/// Tracks which elements still wait for their first reveal.
#[derive(Debug, Clone)]
pub struct RevealObserver<K> {
    options: ObserverOptions,
    observed: HashSet<K>,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> Default for RevealObserver<K> {
    fn default() -> Self {
        Self::new(ObserverOptions::default())
    }
}

impl<K: Eq + Hash + Clone> RevealObserver<K> {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: HashSet::new(),
            revealed: HashSet::new(),
        }
    }

    pub fn options(&self) -> ObserverOptions {
        self.options
    }

    /// Register an element. Returns `false` if it is already observed.
    ///
    /// Observing a key that was revealed before starts a fresh one-shot
    /// cycle: the element is treated as newly rendered.
    pub fn observe(&mut self, key: K) -> bool {
        self.revealed.remove(&key);
        self.observed.insert(key)
    }

    pub fn unobserve(&mut self, key: &K) -> bool {
        self.observed.remove(key)
    }

    /// Forget every registration and reveal.
    pub fn clear(&mut self) {
        self.observed.clear();
        self.revealed.clear();
    }

    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.contains(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }

    /// Run one visibility pass against `viewport`.
    ///
    /// Returns the keys revealed by this pass. Revealed keys are removed from
    /// the observed set, so later passes never report them again; entries for
    /// keys that are not observed are ignored.
    pub fn process<I>(&mut self, viewport: Rect, entries: I) -> Vec<K>
    where
        I: IntoIterator<Item = IntersectionEntry<K>>,
    {
        let root = viewport.expand(self.options.root_margin);
        let mut newly_revealed = Vec::new();

        for entry in entries {
            if !self.observed.contains(&entry.key) {
                continue;
            }
            let ratio = intersection_ratio(&entry.bounds, &root);
            if ratio > 0.0 && ratio >= self.options.threshold {
                self.observed.remove(&entry.key);
                self.revealed.insert(entry.key.clone());
                newly_revealed.push(entry.key);
            }
        }

        newly_revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn test_ratio_fully_inside() {
        let target = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&target, &viewport()), 1.0);
    }

    #[test]
    fn test_ratio_partial() {
        // Half of the card hangs below the viewport
        let target = Rect::new(0.0, 550.0, 100.0, 100.0);
        assert!((intersection_ratio(&target, &viewport()) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_disjoint() {
        let target = Rect::new(0.0, 2000.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&target, &viewport()), 0.0);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut observer = RevealObserver::default();
        observer.observe(1u32);

        let on_screen = IntersectionEntry::new(1u32, Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(observer.process(viewport(), vec![on_screen.clone()]), vec![1]);
        assert!(observer.is_revealed(&1));
        assert!(!observer.is_observed(&1));

        // Same element stays on screen: no second reveal
        assert!(observer.process(viewport(), vec![on_screen]).is_empty());
    }

    #[test]
    fn test_root_margin_counts_as_visible() {
        let mut observer = RevealObserver::default();
        observer.observe("card");

        // 50px below the viewport, inside the 80px margin
        let near = IntersectionEntry::new("card", Rect::new(0.0, 650.0, 100.0, 100.0));
        assert_eq!(observer.process(viewport(), vec![near]), vec!["card"]);
    }

    #[test]
    fn test_below_threshold_stays_observed() {
        let mut observer = RevealObserver::default();
        observer.observe(7u32);

        // Only 10px of a 100px card reaches the expanded root (bottom at 680)
        let sliver = IntersectionEntry::new(7u32, Rect::new(0.0, 670.0, 100.0, 100.0));
        assert!(observer.process(viewport(), vec![sliver]).is_empty());
        assert!(observer.is_observed(&7));

        // 20px visible crosses the 12% threshold
        let more = IntersectionEntry::new(7u32, Rect::new(0.0, 660.0, 100.0, 100.0));
        assert_eq!(observer.process(viewport(), vec![more]), vec![7]);
    }

    #[test]
    fn test_unobserved_entries_ignored() {
        let mut observer: RevealObserver<u32> = RevealObserver::default();
        let entry = IntersectionEntry::new(3, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(observer.process(viewport(), vec![entry]).is_empty());
        assert!(!observer.is_revealed(&3));
    }

    #[test]
    fn test_observe_again_restarts_cycle() {
        let mut observer = RevealObserver::default();
        observer.observe(1u32);
        observer.process(viewport(), vec![IntersectionEntry::new(1u32, Rect::new(0.0, 0.0, 1.0, 1.0))]);
        assert!(observer.is_revealed(&1));

        assert!(observer.observe(1));
        assert!(!observer.is_revealed(&1));
        assert!(observer.is_observed(&1));
    }
}
