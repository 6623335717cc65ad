//! Ambient page effects: theme, mobile nav, scroll progress, parallax,
//! smooth-scroll targets and the footer year.
//!
//! These are pure helpers; the desktop components wire them to events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Datelike;

/// Maximum parallax travel in pixels, edge to edge.
pub const PARALLAX_STRENGTH: f64 = 10.0;

/// Color theme of the page. Dark unless the user picked light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Stored token for this theme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored token. Anything but `"light"` reads as dark.
    pub fn from_token(token: &str) -> Self {
        if token == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Theme at startup: a saved preference wins, otherwise the system
    /// preference decides.
    pub fn resolve(saved: Option<Theme>, prefers_light: bool) -> Self {
        match saved {
            Some(theme) => theme,
            None if prefers_light => Theme::Light,
            None => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of the root `data-theme` attribute.
    pub fn data_attr(&self) -> &'static str {
        match self {
            Theme::Dark => "",
            Theme::Light => "light",
        }
    }

    /// Icon shown on the toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Following any link closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }
}

/// Scrolled share of the page in percent, clamped to `[0, 100]`.
///
/// A page that cannot scroll, or non-finite measurements, report 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    let percent = scroll_top / scrollable * 100.0;
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Parallax offset `(x, y)` in pixels for a pointer at `(client_x, client_y)`
/// inside a `width` x `height` viewport. Centered pointer yields `(0, 0)`.
pub fn parallax_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    (
        (client_x / width - 0.5) * PARALLAX_STRENGTH,
        (client_y / height - 0.5) * PARALLAX_STRENGTH,
    )
}

/// CSS transform for a parallax offset.
pub fn parallax_transform((x, y): (f64, f64)) -> String {
    format!("translate({}px, {}px)", x, y)
}

/// Section id an in-page link points at (`"#about"` -> `"about"`).
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Current calendar year for the footer.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// At most one pending update per animation frame.
///
/// `try_begin` claims the frame; events that arrive before `finish` are
/// dropped, not queued. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    pending: Arc<AtomicBool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next frame. Returns `false` if an update is already pending.
    pub fn try_begin(&self) -> bool {
        self.pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Release the frame after the update ran.
    pub fn finish(&self) {
        self.pending.store(false, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}
