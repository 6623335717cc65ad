//! Folio Core Library
//!
//! The UI-free pipeline behind the Folio portfolio window.
//!
//! ## Overview
//!
//! A fixed catalog of project records flows through a small pipeline:
//!
//! ```text
//! Catalog ──► compute_visible(FilterState) ──► render / CardView ──► grid
//!                                                        │
//!                                   "Details" click ─────┴──► DetailModal
//! ```
//!
//! The contact form is an independent branch: [`ContactController`] validates
//! consent, sends the form through a [`ContactTransport`], and maps the outcome
//! to a status line.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{compute_visible, Catalog, CategoryFilter, FilterState};
//!
//! let catalog = Catalog::builtin()?;
//! let state = FilterState::new(CategoryFilter::only("web"), "");
//! for project in compute_visible(catalog.projects(), &state) {
//!     println!("{}: {}", project.id, project.title);
//! }
//! ```

pub mod ambient;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod filter;
pub mod logging;
pub mod modal;
pub mod preferences;
pub mod render;
pub mod reveal;

// Re-exports
pub use ambient::{
    anchor_target, current_year, parallax_offset, parallax_transform, scroll_progress, FrameGate,
    NavMenu, Theme, PARALLAX_STRENGTH,
};
pub use catalog::{Catalog, CatalogSource, ProjectId, ProjectRecord};
pub use contact::{
    local_outcome, rejection_message, ContactController, ContactForm, ContactRequest, ContactState,
    ContactTransport, FieldValue, FormField, FormMethod, HttpTransport, TransportError,
    TransportResponse, DIAGNOSTICS_TARGET,
};
pub use error::{FolioError, FolioResult};
pub use filter::{compute_visible, CategoryFilter, FilterState};
pub use logging::{DiagnosticEntry, DiagnosticLayer, DiagnosticLog, DiagnosticWriter};
pub use modal::{ClickTarget, DetailModal, ModalState, ProjectDetail};
pub use preferences::PreferenceStore;
pub use render::{
    escape_html, render, render_grid, render_skeleton, render_tag_chips, CardAttrs, CardView,
    visible_cards, Markup, CARD_CLASS, DETAILS_ACTION,
};
pub use reveal::{IntersectionEntry, ObserverOptions, Rect, RevealObserver};
