//! Projects API endpoint.
//!
//! Returns the configured projects and the server version.

use std::sync::Arc;

use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/projects.
#[derive(Serialize)]
pub(crate) struct ProjectsResponse {
    /// Configured projects.
    projects: Vec<ProjectInfo>,
    /// Application version.
    version: String,
}

/// One project entry.
#[derive(Serialize)]
struct ProjectInfo {
    /// URL route prefix.
    route: String,
    /// Repository identifier.
    repo: String,
    /// Branch the documentation is fetched from.
    branch: String,
    /// Human-readable label.
    label: String,
}

/// Handle GET /api/projects.
pub(crate) async fn list_projects(state: Arc<AppState>) -> Json<ProjectsResponse> {
    let projects = state
        .projects
        .iter()
        .map(|p| ProjectInfo {
            route: p.route.clone(),
            repo: p.repo.clone(),
            branch: p.branch.clone(),
            label: p.label.clone(),
        })
        .collect();

    Json(ProjectsResponse {
        projects,
        version: state.version.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::tests::test_state;
    use docgate_source::MockFiles;

    #[tokio::test]
    async fn test_projects_response() {
        let state = Arc::new(test_state(Arc::new(MockFiles::new())));

        let Json(response) = list_projects(state).await;
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["version"], "0.0.0-test");
        assert_eq!(json["projects"][0]["route"], "table/v8");
        assert_eq!(json["projects"][0]["repo"], "tanstack/table");
        assert_eq!(json["projects"][0]["branch"], "main");
        assert_eq!(json["projects"][0]["label"], "TanStack Table Docs");
    }
}
