//! Server error type and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docgate_source::SourceError;

/// Errors raised by request handlers.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// The remote repository has no file for the resolved path.
    #[error("document not found")]
    DocNotFound,

    /// The wildcard docs path was empty. Routes always carry a wildcard,
    /// so an empty one means the route table is misconfigured; this is a
    /// server fault, not a client 404.
    #[error("invalid docs path")]
    InvalidDocsPath,

    /// The upstream file host failed (non-404 status or transport error).
    #[error(transparent)]
    Upstream(#[from] SourceError),

    /// The blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::DocNotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            Self::InvalidDocsPath => {
                tracing::error!("empty docs path reached a handler");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            Self::Upstream(err) => {
                tracing::error!(error = %err, "upstream fetch failed");
                (StatusCode::BAD_GATEWAY, "Bad Gateway").into_response()
            }
            Self::Join(err) => {
                tracing::error!(error = %err, "fetch task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}
