//! Router construction.
//!
//! Builds the axum router with all routes and middleware. Each configured
//! project gets two wildcard routes registered at build time; the handler
//! closures capture the project's immutable identity, so per-request code
//! never looks projects up.

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: &Arc<AppState>) -> Router {
    let mut router = Router::new().route(
        "/api/projects",
        get({
            let state = Arc::clone(state);
            move || handlers::projects::list_projects(state)
        }),
    );

    for project in &state.projects {
        let api_route = format!("/api/{}/docs/{{*path}}", project.route);
        router = router.route(
            &api_route,
            get({
                let state = Arc::clone(state);
                let project = Arc::clone(project);
                move |Path(path): Path<String>| handlers::docs::get_doc(state, project, path)
            }),
        );

        let page_route = format!("/{}/docs/{{*path}}", project.route);
        router = router.route(
            &page_route,
            get({
                let state = Arc::clone(state);
                let project = Arc::clone(project);
                move |Path(path): Path<String>| handlers::page::get_page(state, project, path)
            }),
        );
    }

    // Request tracing and security headers on every response
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(security::csp_layer())
            .layer(security::content_type_options_layer())
            .layer(security::frame_options_layer()),
    )
}
