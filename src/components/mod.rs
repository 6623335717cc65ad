//! UI Components for Folio.
//!
//! Page sections and the reveal-on-scroll wiring. Reusable widgets live in
//! the `folio-ui` crate.

mod contact_form;
mod footer;
mod hero;
mod nav_header;
mod project_card;
mod project_grid;
mod project_modal;
mod reveal;
mod scroll_progress;

pub use contact_form::ContactFormView;
pub use footer::Footer;
pub use hero::Hero;
pub use nav_header::NavHeader;
pub use project_card::ProjectCard;
pub use project_grid::ProjectGrid;
pub use project_modal::ProjectModal;
pub use reveal::{use_reveal_registry, RevealKey, RevealRegistry, RevealSection};
pub use scroll_progress::ScrollProgress;
