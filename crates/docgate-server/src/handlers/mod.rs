//! HTTP request handlers.

pub(crate) mod docs;
pub(crate) mod page;
pub(crate) mod projects;

use std::sync::Arc;

use docgate_markdown::{extract_front_matter, plain_text};

use crate::error::ServerError;
use crate::state::{AppState, Project};

/// Cache directive for document responses: fresh for 1 second, serve
/// stale for up to 300 seconds while revalidating in the background.
pub(crate) const CACHE_CONTROL: &str = "s-maxage=1, stale-while-revalidate=300";

/// A fully resolved document, shared by the JSON and HTML handlers.
#[derive(Debug)]
pub(crate) struct LoadedDoc {
    /// Title from the front matter, if any.
    pub(crate) title: Option<String>,
    /// Plain-text description derived from the excerpt (empty if none).
    pub(crate) description: String,
    /// Repository-relative path the document was fetched from.
    pub(crate) file_path: String,
    /// Markdown body after front matter extraction.
    pub(crate) content: String,
}

/// Map a wildcard docs path to a repository-relative file path.
///
/// The wildcard must be non-empty; an empty one fails before any network
/// call is made.
pub(crate) fn resolve_file_path(docs_dir: &str, path: &str) -> Result<String, ServerError> {
    if path.is_empty() {
        return Err(ServerError::InvalidDocsPath);
    }
    Ok(format!("{docs_dir}/{path}.md"))
}

/// Resolve, fetch, and parse one document.
///
/// The fetch runs on the blocking pool; everything else is pure. A missing
/// remote file short-circuits to [`ServerError::DocNotFound`] with no
/// parsing attempted.
pub(crate) async fn load_document(
    state: &AppState,
    project: &Project,
    path: &str,
) -> Result<LoadedDoc, ServerError> {
    let file_path = resolve_file_path(&project.docs_dir, path)?;

    let files = Arc::clone(&state.files);
    let repo = project.repo.clone();
    let branch = project.branch.clone();
    let fetch_path = file_path.clone();
    let text =
        tokio::task::spawn_blocking(move || files.fetch_file(&repo, &branch, &fetch_path))
            .await??;

    let Some(text) = text else {
        if state.verbose {
            tracing::info!(repo = %project.repo, branch = %project.branch, file = %file_path,
                "document not found upstream");
        }
        return Err(ServerError::DocNotFound);
    };

    let front_matter = extract_front_matter(&text);
    let description = front_matter
        .meta
        .excerpt
        .as_deref()
        .map(plain_text)
        .unwrap_or_default();

    Ok(LoadedDoc {
        title: front_matter.meta.title,
        description,
        file_path,
        content: front_matter.content,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use docgate_source::MockFiles;
    use pretty_assertions::assert_eq;

    pub(crate) fn test_project() -> Project {
        Project {
            route: "table/v8".to_owned(),
            repo: "tanstack/table".to_owned(),
            branch: "main".to_owned(),
            label: "TanStack Table Docs".to_owned(),
            docs_dir: "docs".to_owned(),
        }
    }

    pub(crate) fn test_state(files: Arc<MockFiles>) -> AppState {
        AppState {
            files,
            projects: vec![Arc::new(test_project())],
            verbose: false,
            version: "0.0.0-test".to_owned(),
        }
    }

    #[test]
    fn test_resolve_file_path_shape() {
        assert_eq!(
            resolve_file_path("docs", "guide/overview").unwrap(),
            "docs/guide/overview.md"
        );
        assert_eq!(resolve_file_path("docs", "intro").unwrap(), "docs/intro.md");
    }

    #[test]
    fn test_resolve_file_path_rejects_empty() {
        assert!(matches!(
            resolve_file_path("docs", ""),
            Err(ServerError::InvalidDocsPath)
        ));
    }

    #[tokio::test]
    async fn test_load_document_scenario() {
        let files = Arc::new(MockFiles::new().with_file(
            "tanstack/table",
            "main",
            "docs/guide/overview.md",
            "---\ntitle: Overview\nexcerpt: A **short** intro\n---\n# Overview\nBody text",
        ));
        let state = test_state(files);
        let project = test_project();

        let doc = load_document(&state, &project, "guide/overview").await.unwrap();

        assert_eq!(doc.title.as_deref(), Some("Overview"));
        assert_eq!(doc.description, "A short intro");
        assert_eq!(doc.file_path, "docs/guide/overview.md");
        assert_eq!(doc.content, "# Overview\nBody text");
    }

    #[tokio::test]
    async fn test_load_document_missing_is_not_found() {
        let state = test_state(Arc::new(MockFiles::new()));
        let project = test_project();

        let err = load_document(&state, &project, "missing-page").await.unwrap_err();
        assert!(matches!(err, ServerError::DocNotFound));
    }

    #[tokio::test]
    async fn test_load_document_no_excerpt_empty_description() {
        let files = Arc::new(MockFiles::new().with_file(
            "tanstack/table",
            "main",
            "docs/intro.md",
            "---\ntitle: Intro\n---\nBody",
        ));
        let state = test_state(files);
        let project = test_project();

        let doc = load_document(&state, &project, "intro").await.unwrap();
        assert_eq!(doc.description, "");
    }

    #[tokio::test]
    async fn test_empty_path_fails_before_fetch() {
        let files = Arc::new(MockFiles::new());
        let state = test_state(Arc::clone(&files));
        let project = test_project();

        let err = load_document(&state, &project, "").await.unwrap_err();
        assert!(matches!(err, ServerError::InvalidDocsPath));
        assert_eq!(files.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_upstream_fault_propagates() {
        let files = Arc::new(MockFiles::new().failing_with_status(500));
        let state = test_state(files);
        let project = test_project();

        let err = load_document(&state, &project, "intro").await.unwrap_err();
        assert!(matches!(err, ServerError::Upstream(_)));
    }
}
