//! CLI error types.

use docgate_config::ConfigError;
use docgate_source::SourceError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Validation(String),

    #[error("document not found: {0}")]
    NotFound(String),
}
