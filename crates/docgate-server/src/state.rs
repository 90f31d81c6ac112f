//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use docgate_source::RepoFiles;

/// One documented project: an immutable repository/branch pair served
/// under a route prefix. Fixed for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct Project {
    /// URL route prefix (e.g., "table/v8").
    pub route: String,
    /// Repository identifier in `owner/name` form.
    pub repo: String,
    /// Branch the documentation is fetched from.
    pub branch: String,
    /// Human-readable label used in page titles.
    pub label: String,
    /// Directory inside the repository holding the markdown files.
    pub docs_dir: String,
}

impl Project {
    /// Build a project from its configuration entry.
    #[must_use]
    pub fn from_config(config: &docgate_config::ProjectConfig) -> Self {
        Self {
            route: config.route.clone(),
            repo: config.repo.clone(),
            branch: config.branch.clone(),
            label: config.label.clone(),
            docs_dir: config.docs_dir.clone(),
        }
    }
}

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Raw file access for the external repositories.
    pub(crate) files: Arc<dyn RepoFiles>,
    /// Configured projects, in route registration order.
    pub(crate) projects: Vec<Arc<Project>>,
    /// Enable verbose output (show fetch warnings).
    pub(crate) verbose: bool,
    /// Application version.
    pub(crate) version: String,
}
