//! HTTP server for docgate.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - JSON API endpoints for documentation pages fetched from external
//!   repositories
//! - HTML page views with rendered markdown and SEO head tags
//! - A project listing endpoint
//!
//! # Quick Start
//!
//! ```ignore
//! use docgate_server::{Project, ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         fetch_base_url: "https://raw.githubusercontent.com".to_string(),
//!         fetch_timeout_secs: 30,
//!         fetch_token: None,
//!         projects: vec![Project {
//!             route: "table/v8".to_string(),
//!             repo: "tanstack/table".to_string(),
//!             branch: "main".to_string(),
//!             label: "TanStack Table Docs".to_string(),
//!             docs_dir: "docs".to_string(),
//!         }],
//!         verbose: false,
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (docgate-server)
//!                        │
//!                        ├─► /api/{route}/docs/{*path} ──► JSON payload
//!                        │                                    │
//!                        ├─► /{route}/docs/{*path} ────► HTML page
//!                        │                                    │
//!                        └───────────────────────┬────────────┘
//!                                                │
//!                              RepoFiles (raw.githubusercontent.com)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod seo;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use docgate_source::{GithubFiles, RepoFiles};

pub use state::Project;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Base URL for raw file fetches.
    pub fetch_base_url: String,
    /// Fetch timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// Optional bearer token for the raw file host.
    pub fetch_token: Option<String>,
    /// Documented projects.
    pub projects: Vec<Project>,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version.
    pub version: String,
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Shared raw-file client (connection pooling across requests)
    let mut files = GithubFiles::new(
        &config.fetch_base_url,
        Duration::from_secs(config.fetch_timeout_secs),
    );
    if let Some(token) = &config.fetch_token {
        files = files.with_token(token.clone());
    }
    let files: Arc<dyn RepoFiles> = Arc::new(files);

    let state = Arc::new(AppState {
        files,
        projects: config.projects.iter().cloned().map(Arc::new).collect(),
        verbose: config.verbose,
        version: config.version.clone(),
    });

    let app = app::create_router(&state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, projects = config.projects.len(), "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from docgate config.
///
/// # Arguments
///
/// * `config` - docgate configuration
/// * `version` - Application version
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(
    config: &docgate_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        fetch_base_url: config.fetch.base_url.clone(),
        fetch_timeout_secs: config.fetch.timeout_secs,
        fetch_token: config.fetch.token.clone(),
        projects: config.projects.iter().map(Project::from_config).collect(),
        verbose,
        version,
    }
}
