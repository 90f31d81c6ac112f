//! Docs API endpoint.
//!
//! Resolves a wildcard docs path against a project's repository, splits
//! front matter from the markdown body, and returns the loader payload
//! with a short-lived cache directive.

use std::sync::Arc;

use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::error::ServerError;
use crate::handlers::{CACHE_CONTROL, load_document};
use crate::state::{AppState, Project};

/// Response for GET /api/{route}/docs/{path}.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DocResponse {
    /// Title from the front matter. Omitted when the document has none;
    /// consumers fall back to a generic label.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Plain-text description derived from the excerpt.
    description: String,
    /// Repository-relative source path (shown as an "edit this page" link).
    file_path: String,
    /// Markdown body.
    content: String,
}

/// Handle GET /api/{route}/docs/{*path}.
pub(crate) async fn get_doc(
    state: Arc<AppState>,
    project: Arc<Project>,
    path: String,
) -> Result<impl IntoResponse + std::fmt::Debug, ServerError> {
    let doc = load_document(&state, &project, &path).await?;

    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(DocResponse {
            title: doc.title,
            description: doc.description,
            file_path: doc.file_path,
            content: doc.content,
        }),
    ))
}
