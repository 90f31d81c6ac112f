//! `RepoFiles` trait and error types.

/// Error from a remote file fetch.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The remote host answered with an unexpected status (404 is not an
    /// error, it maps to `Ok(None)`).
    #[error("HTTP {status} fetching {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Request URL.
        url: String,
    },
    /// Transport-level failure (DNS, TLS, timeout, connection reset).
    #[error("network error fetching {url}: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Underlying error description.
        message: String,
    },
    /// The response body could not be read as text.
    #[error("error reading body of {url}: {message}")]
    Body {
        /// Request URL.
        url: String,
        /// Underlying error description.
        message: String,
    },
}

/// Read-only access to raw text files in an external repository.
///
/// Implementations must be cheap to share across request handlers
/// (`Send + Sync`); the server holds one instance behind an `Arc`.
pub trait RepoFiles: Send + Sync {
    /// Fetch the text content of `path` on `branch` of `repo`.
    ///
    /// `repo` is an `owner/name` identifier; `path` is repository-relative
    /// (e.g., `docs/guide/overview.md`).
    ///
    /// Returns `Ok(None)` when the file does not exist on that branch.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] for transport failures and non-404 error
    /// statuses.
    fn fetch_file(&self, repo: &str, branch: &str, path: &str)
    -> Result<Option<String>, SourceError>;
}
