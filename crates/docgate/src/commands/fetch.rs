//! `docgate fetch` command implementation.
//!
//! Resolves one docs path against a configured project and prints the
//! loader payload as JSON. Useful to inspect what a route would serve
//! without starting the server.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use docgate_config::Config;
use docgate_markdown::{extract_front_matter, plain_text};
use docgate_source::{GithubFiles, RepoFiles};
use serde_json::json;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the fetch command.
#[derive(Args)]
pub(crate) struct FetchArgs {
    /// Project route (e.g., "table/v8").
    route: String,

    /// Docs path without extension (e.g., "guide/overview").
    path: String,

    /// Path to configuration file (default: auto-discover docgate.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl FetchArgs {
    /// Execute the fetch command.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown route, an empty path, a missing
    /// document, or a fetch failure.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;

        let project = config.project(&self.route).ok_or_else(|| {
            CliError::Validation(format!("no project configured for route: {}", self.route))
        })?;

        if self.path.is_empty() {
            return Err(CliError::Validation("docs path cannot be empty".to_owned()));
        }
        let file_path = format!("{}/{}.md", project.docs_dir, self.path);

        let mut files = GithubFiles::new(
            &config.fetch.base_url,
            Duration::from_secs(config.fetch.timeout_secs),
        );
        if let Some(token) = &config.fetch.token {
            files = files.with_token(token.clone());
        }

        let text = files
            .fetch_file(&project.repo, &project.branch, &file_path)?
            .ok_or_else(|| CliError::NotFound(file_path.clone()))?;

        let front_matter = extract_front_matter(&text);
        let description = front_matter
            .meta
            .excerpt
            .as_deref()
            .map(plain_text)
            .unwrap_or_default();

        let payload = json!({
            "title": front_matter.meta.title,
            "description": description,
            "filePath": file_path,
            "content": front_matter.content,
        });
        output.payload(&serde_json::to_string_pretty(&payload).unwrap_or_default());
        output.success(&format!(
            "Fetched {} @ {} - {}",
            project.repo, project.branch, file_path
        ));

        Ok(())
    }
}
