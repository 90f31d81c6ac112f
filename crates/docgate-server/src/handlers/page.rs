//! HTML page view.
//!
//! Renders a resolved document as a standalone HTML page: SEO head tags,
//! the markdown body rendered to HTML, and an "edit this page" link built
//! from the project's repository, branch, and the resolved file path.

use std::sync::Arc;

use axum::http::header;
use axum::response::{Html, IntoResponse};
use docgate_markdown::render_html;

use crate::error::ServerError;
use crate::handlers::{CACHE_CONTROL, LoadedDoc, load_document};
use crate::seo;
use crate::state::{AppState, Project};

/// Web host for "edit this page" links.
const GITHUB_WEB: &str = "https://github.com";

/// Handle GET /{route}/docs/{*path}.
pub(crate) async fn get_page(
    state: Arc<AppState>,
    project: Arc<Project>,
    path: String,
) -> Result<impl IntoResponse + std::fmt::Debug, ServerError> {
    let doc = load_document(&state, &project, &path).await?;

    Ok((
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Html(page_html(&project, &doc)),
    ))
}

/// Build the edit link for a document.
fn edit_url(repo: &str, branch: &str, file_path: &str) -> String {
    format!("{GITHUB_WEB}/{repo}/edit/{branch}/{file_path}")
}

/// Render the full page.
fn page_html(project: &Project, doc: &LoadedDoc) -> String {
    let title = seo::page_title(doc.title.as_deref(), &project.label);
    let head = seo::head_tags(&title, &doc.description);
    let heading = seo::escape_html(doc.title.as_deref().unwrap_or("Docs"));
    let body = render_html(&doc.content);
    let edit = edit_url(&project.repo, &project.branch, &doc.file_path);

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         {head}\n\
         </head>\n\
         <body>\n\
         <header><h1>{heading}</h1></header>\n\
         <main>\n{body}</main>\n\
         <footer>\n\
         <a href=\"{edit}\">Edit this page on GitHub</a>\n\
         <p>Source: {repo} @ {branch} &mdash; {file_path}</p>\n\
         </footer>\n\
         </body>\n\
         </html>\n",
        repo = seo::escape_html(&project.repo),
        branch = seo::escape_html(&project.branch),
        file_path = seo::escape_html(&doc.file_path),
    )
}
