//! GitHub raw-content implementation of [`RepoFiles`].
//!
//! Fetches files as `{base_url}/{owner}/{name}/{branch}/{path}` from
//! `raw.githubusercontent.com` (or a configured mirror). An optional
//! bearer token is attached for rate-limit relief on private mirrors.

use std::time::Duration;

use ureq::Agent;

use crate::source::{RepoFiles, SourceError};

/// Raw file client for GitHub-style content hosts.
pub struct GithubFiles {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl GithubFiles {
    /// Create a client with the given base URL and timeout.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build the raw-content URL for a file.
    fn file_url(&self, repo: &str, branch: &str, path: &str) -> String {
        format!("{}/{repo}/{branch}/{path}", self.base_url)
    }
}

impl RepoFiles for GithubFiles {
    fn fetch_file(
        &self,
        repo: &str,
        branch: &str,
        path: &str,
    ) -> Result<Option<String>, SourceError> {
        let url = self.file_url(repo, branch, path);

        let mut request = self.agent.get(&url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        let response = request.call().map_err(|e| SourceError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        if status == 404 {
            tracing::debug!(url = %url, "remote file not found");
            return Ok(None);
        }
        if status >= 400 {
            return Err(SourceError::Status { status, url });
        }

        let text = response
            .into_body()
            .read_to_string()
            .map_err(|e| SourceError::Body {
                url,
                message: e.to_string(),
            })?;

        Ok(Some(text))
    }
}
