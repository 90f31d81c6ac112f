//! Mock implementation of [`RepoFiles`] for testing.
//!
//! Provides [`MockFiles`] for unit testing without network access.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::source::{RepoFiles, SourceError};

/// Key identifying one file: (repo, branch, path).
type FileKey = (String, String, String);

/// Mock repository file store for testing.
///
/// Stores file contents in memory and counts fetches, so tests can assert
/// that a handler short-circuited before any fetch happened.
///
/// # Example
///
/// ```ignore
/// use docgate_source::{MockFiles, RepoFiles};
///
/// let files = MockFiles::new()
///     .with_file("tanstack/table", "main", "docs/intro.md", "# Intro");
///
/// let content = files.fetch_file("tanstack/table", "main", "docs/intro.md");
/// assert!(content.unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct MockFiles {
    files: RwLock<HashMap<FileKey, String>>,
    fetches: AtomicUsize,
    fail_with_status: Option<u16>,
}

impl MockFiles {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file with the given content.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(
        self,
        repo: impl Into<String>,
        branch: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.files.write().unwrap().insert(
            (repo.into(), branch.into(), path.into()),
            content.into(),
        );
        self
    }

    /// Make every fetch fail with the given HTTP status.
    #[must_use]
    pub fn failing_with_status(mut self, status: u16) -> Self {
        self.fail_with_status = Some(status);
        self
    }

    /// Number of `fetch_file` calls made so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl RepoFiles for MockFiles {
    fn fetch_file(
        &self,
        repo: &str,
        branch: &str,
        path: &str,
    ) -> Result<Option<String>, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.fail_with_status {
            return Err(SourceError::Status {
                status,
                url: format!("mock://{repo}/{branch}/{path}"),
            });
        }

        let key = (repo.to_owned(), branch.to_owned(), path.to_owned());
        Ok(self.files.read().unwrap().get(&key).cloned())
    }
}
