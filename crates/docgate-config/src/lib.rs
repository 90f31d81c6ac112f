//! Configuration management for docgate.
//!
//! Parses `docgate.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! The `fetch.token` value supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docgate.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote fetch configuration.
    #[serde(default)]
    pub fetch: FetchConfig,
    /// Documented projects. At least one entry is required.
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Remote fetch configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Base URL for raw file access.
    pub base_url: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Optional access token for the raw file host (rate-limit relief).
    /// Supports `${VAR}` / `${VAR:-default}` expansion.
    pub token: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://raw.githubusercontent.com".to_owned(),
            timeout_secs: 30,
            token: None,
        }
    }
}

/// A documented project: one repository/branch pair served under a route.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// URL route prefix (e.g., "table/v8"). May contain slashes.
    pub route: String,
    /// Repository identifier in `owner/name` form.
    pub repo: String,
    /// Branch to fetch documentation from.
    pub branch: String,
    /// Human-readable label used in page titles (e.g., "TanStack Table Docs").
    pub label: String,
    /// Directory inside the repository holding the markdown files.
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
}

fn default_docs_dir() -> String {
    "docs".to_owned()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`fetch.token`").
        field: String,
        /// Error message (e.g., "${`DOCGATE_GITHUB_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docgate.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if no config file is found, parsing fails, or
    /// validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        } else {
            Self::discover_config()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?
        };

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
    }

    /// Look up a project by its route prefix.
    #[must_use]
    pub fn project(&self, route: &str) -> Option<&ProjectConfig> {
        self.projects.iter().find(|p| p.route == route)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from a TOML string (no expansion, no validation).
    ///
    /// Intended for tests and embedding; production code goes through
    /// [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Expand environment variables in expandable fields.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(token) = &self.fetch.token {
            let expanded = expand::expand_env(token, "fetch.token")?;
            // An expansion resolving to an empty string means "no token"
            self.fetch.token = if expanded.is_empty() {
                None
            } else {
                Some(expanded)
            };
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid
    /// values. Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;
        require_http_url(&self.fetch.base_url, "fetch.base_url")?;

        if self.projects.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[projects]] entry is required".to_owned(),
            ));
        }

        for project in &self.projects {
            project.validate()?;
        }

        // Routes must be unique, they become URL prefixes
        for (i, project) in self.projects.iter().enumerate() {
            if self.projects[..i].iter().any(|p| p.route == project.route) {
                return Err(ConfigError::Validation(format!(
                    "duplicate project route: {}",
                    project.route
                )));
            }
        }

        Ok(())
    }
}

impl ProjectConfig {
    /// Validate a single project entry.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.route, "projects.route")?;
        require_non_empty(&self.repo, "projects.repo")?;
        require_non_empty(&self.branch, "projects.branch")?;
        require_non_empty(&self.label, "projects.label")?;
        require_non_empty(&self.docs_dir, "projects.docs_dir")?;

        let mut parts = self.repo.splitn(2, '/');
        let owner = parts.next().unwrap_or_default();
        let name = parts.next().unwrap_or_default();
        if owner.is_empty() || name.is_empty() {
            return Err(ConfigError::Validation(format!(
                "projects.repo must be in owner/name form, got: {}",
                self.repo
            )));
        }

        if self.route.starts_with('/') || self.route.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "projects.route must not start or end with a slash: {}",
                self.route
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_toml() -> &'static str {
        r#"
            [[projects]]
            route = "table/v8"
            repo = "tanstack/table"
            branch = "main"
            label = "TanStack Table Docs"
        "#
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml(minimal_toml()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.fetch.base_url, "https://raw.githubusercontent.com");
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.fetch.token.is_none());
    }

    #[test]
    fn test_project_defaults() {
        let config = Config::from_toml(minimal_toml()).unwrap();
        let project = &config.projects[0];
        assert_eq!(project.docs_dir, "docs");
        assert_eq!(project.route, "table/v8");
        assert_eq!(project.repo, "tanstack/table");
    }

    #[test]
    fn test_validate_minimal_passes() {
        let config = Config::from_toml(minimal_toml()).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_projects() {
        let config = Config::from_toml("[server]\nport = 8080").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[[projects]]"));
    }

    #[test]
    fn test_validate_rejects_bad_repo() {
        let toml = r#"
            [[projects]]
            route = "table/v8"
            repo = "table"
            branch = "main"
            label = "Table Docs"
        "#;
        let config = Config::from_toml(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("owner/name"));
    }

    #[test]
    fn test_validate_rejects_duplicate_routes() {
        let toml = r#"
            [[projects]]
            route = "table/v8"
            repo = "tanstack/table"
            branch = "main"
            label = "Table Docs"

            [[projects]]
            route = "table/v8"
            repo = "tanstack/ranger"
            branch = "main"
            label = "Ranger Docs"
        "#;
        let config = Config::from_toml(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate project route"));
    }

    #[test]
    fn test_validate_rejects_slash_wrapped_route() {
        let toml = r#"
            [[projects]]
            route = "/table/v8"
            repo = "tanstack/table"
            branch = "main"
            label = "Table Docs"
        "#;
        let config = Config::from_toml(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_base_url() {
        let toml = r#"
            [fetch]
            base_url = "ftp://example.com"

            [[projects]]
            route = "table/v8"
            repo = "tanstack/table"
            branch = "main"
            label = "Table Docs"
        "#;
        let config = Config::from_toml(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fetch.base_url"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::from_toml(minimal_toml()).unwrap();
        config.apply_cli_settings(&CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
        });
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_project_lookup_by_route() {
        let config = Config::from_toml(minimal_toml()).unwrap();
        assert!(config.project("table/v8").is_some());
        assert!(config.project("ranger/v1").is_none());
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let err = Config::load(Some(Path::new("/nonexistent/docgate.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docgate.toml");
        std::fs::write(&path, minimal_toml()).unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.config_path, Some(path));
    }
}
