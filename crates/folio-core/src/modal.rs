//! Detail modal controller.
//!
//! ```text
//!            Details click (known id)
//!   Closed ──────────────────────────► Open(detail)
//!     ▲                                    │
//!     └──── close control / backdrop ──────┘
//! ```
//!
//! Lookups always go against the full catalog, never the filtered subset.
//! An unknown id aborts the open silently.

use crate::catalog::{Catalog, ProjectId, ProjectRecord};

/// Everything the dialog shows for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub id: ProjectId,
    pub cover: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub live_url: String,
    pub source_url: String,
}

impl From<&ProjectRecord> for ProjectDetail {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            cover: record.cover.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            tags: record.tags.clone(),
            live_url: record.live_url.clone(),
            source_url: record.source_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProjectDetail),
}

/// Where a click inside the dialog landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dialog element itself, outside its content box
    Backdrop,
    /// Anything inside the content box
    Content,
}

/// The page's single detail dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModal {
    state: ModalState,
}

impl DetailModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Detail currently on display, if open.
    pub fn detail(&self) -> Option<&ProjectDetail> {
        match &self.state {
            ModalState::Open(detail) => Some(detail),
            ModalState::Closed => None,
        }
    }

    /// Populate and open the dialog for `id`.
    ///
    /// Returns `false` and leaves the modal untouched when `id` is not in the
    /// catalog. Any previous content is replaced wholesale.
    pub fn open(&mut self, catalog: &Catalog, id: ProjectId) -> bool {
        let Some(record) = catalog.get(id) else {
            tracing::debug!(%id, "details requested for unknown project, ignoring");
            return false;
        };
        self.state = ModalState::Open(ProjectDetail::from(record));
        tracing::debug!(%id, "project modal opened");
        true
    }

    pub fn close(&mut self) {
        self.state = ModalState::Closed;
    }

    /// Handle a click on the dialog. Only a backdrop click closes it.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.close();
        }
    }
}
