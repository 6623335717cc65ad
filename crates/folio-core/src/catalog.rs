//! Project catalog: the fixed, ordered list of project records.
//!
//! The catalog is embedded at build time and validated once at load. After
//! that it is shared read-only; cloning a [`Catalog`] only bumps a refcount.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};

/// Embedded catalog data.
const BUILTIN_PROJECTS: &str = include_str!("../data/projects.json");

/// Default latency of the simulated catalog fetch.
pub const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(200);

/// Unique, positive identifier of a project. Also its stable sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl ProjectId {
    /// Parse an id carried in markup (`data-id="3"`).
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse().ok().map(Self)
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single project shown on the page. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    /// Category token used as the filter partition key ("web", "app", ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    /// Static image resource for the card and modal cover
    pub cover: String,
    /// Display order is insertion order
    pub tags: Vec<String>,
    pub live_url: String,
    pub source_url: String,
}

/// Validated, immutable project catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    projects: Arc<Vec<ProjectRecord>>,
}

impl Catalog {
    /// Build a catalog from records, checking id and title invariants.
    pub fn new(projects: Vec<ProjectRecord>) -> FolioResult<Self> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if project.id.0 == 0 {
                return Err(FolioError::InvalidCatalog(format!(
                    "project '{}' has id 0; ids must be positive",
                    project.title
                )));
            }
            if !seen.insert(project.id) {
                return Err(FolioError::InvalidCatalog(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
            if project.title.trim().is_empty() {
                return Err(FolioError::InvalidCatalog(format!(
                    "project {} has an empty title",
                    project.id
                )));
            }
        }

        Ok(Self {
            projects: Arc::new(projects),
        })
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// The catalog embedded in the binary.
    pub fn builtin() -> FolioResult<Self> {
        Self::from_json(BUILTIN_PROJECTS)
    }

    /// All projects in display order.
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Look up a project by id across the full catalog.
    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Distinct category tokens in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .filter(|p| seen.insert(p.kind.as_str()))
            .map(|p| p.kind.clone())
            .collect()
    }
}

/// Data source for the initial card population.
///
/// Stands in for an asynchronous fetch: the record count is known up front
/// (so the skeleton can be sized) and the records arrive after `latency`.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    catalog: Catalog,
    latency: Duration,
}

impl CatalogSource {
    pub fn new(catalog: Catalog, latency: Duration) -> Self {
        Self { catalog, latency }
    }

    /// Number of records the fetch will yield.
    pub fn expected_len(&self) -> usize {
        self.catalog.len()
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Resolve the catalog after the configured latency (zero is allowed).
    pub async fn fetch(&self) -> Catalog {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        tracing::debug!(count = self.catalog.len(), "catalog fetched");
        self.catalog.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, kind: &str, title: &str) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId(id),
            kind: kind.to_string(),
            title: title.to_string(),
            description: String::new(),
            cover: format!("{}.png", id),
            tags: vec![],
            live_url: String::new(),
            source_url: String::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<u32> = catalog.projects().iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_builtin_categories_in_first_seen_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.categories(), vec!["web", "tools", "app"]);
    }

    #[test]
    fn test_type_field_is_renamed() {
        let catalog = Catalog::builtin().unwrap();
        let weather = catalog.get(ProjectId(5)).unwrap();
        assert_eq!(weather.kind, "app");
        assert_eq!(weather.title, "Weather App");

        let json = serde_json::to_value(weather).unwrap();
        assert_eq!(json["type"], "app");
        assert_eq!(json["id"], 5);
    }

    #[test]
    fn test_tags_keep_insertion_order() {
        let catalog = Catalog::builtin().unwrap();
        let crypto = catalog.get(ProjectId(3)).unwrap();
        assert_eq!(crypto.tags, vec!["HTML", "CSS", "JS", "API", "Charts"]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![record(1, "web", "A"), record(1, "app", "B")]);
        assert!(matches!(result, Err(FolioError::InvalidCatalog(_))));
    }

    #[test]
    fn test_zero_id_rejected() {
        let result = Catalog::new(vec![record(0, "web", "A")]);
        assert!(matches!(result, Err(FolioError::InvalidCatalog(_))));
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = Catalog::new(vec![record(1, "web", "   ")]);
        assert!(matches!(result, Err(FolioError::InvalidCatalog(_))));
    }

    #[test]
    fn test_get_unknown_id() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.get(ProjectId(99)).is_none());
    }

    #[test]
    fn test_project_id_parse() {
        assert_eq!(ProjectId::parse("4"), Some(ProjectId(4)));
        assert_eq!(ProjectId::parse(" 12 "), Some(ProjectId(12)));
        assert_eq!(ProjectId::parse("four"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_source_fetch_waits_for_latency() {
        let catalog = Catalog::builtin().unwrap();
        let source = CatalogSource::new(catalog.clone(), DEFAULT_FETCH_LATENCY);
        assert_eq!(source.expected_len(), 6);

        let started = tokio::time::Instant::now();
        let fetched = source.fetch().await;
        assert!(started.elapsed() >= DEFAULT_FETCH_LATENCY);
        assert_eq!(fetched, catalog);
    }

    #[tokio::test]
    async fn test_source_fetch_zero_latency() {
        let catalog = Catalog::builtin().unwrap();
        let source = CatalogSource::new(catalog, Duration::ZERO);
        assert_eq!(source.fetch().await.len(), 6);
    }
}
