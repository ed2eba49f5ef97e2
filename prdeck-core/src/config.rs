//! Configuration management for prdeck
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (PRDECK_*)
//! 3. Config file (~/.config/prdeck/config.toml)
//! 4. Default values

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::identity::Viewer;
use crate::{Error, Result};

/// Which REST listing a view is backed by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListSource {
    /// `/repos/{owner}/{repo}/issues` (issues and pull requests)
    Issues,
    /// `/repos/{owner}/{repo}/pulls` (pull requests only)
    #[default]
    Pulls,
}

impl ListSource {
    /// Path segment of the REST endpoint
    pub fn endpoint(&self) -> &'static str {
        match self {
            ListSource::Issues => "issues",
            ListSource::Pulls => "pulls",
        }
    }
}

impl fmt::Display for ListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

impl FromStr for ListSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "issues" => Ok(ListSource::Issues),
            "pulls" | "prs" => Ok(ListSource::Pulls),
            other => Err(Error::Config(format!(
                "Unknown list source '{}'. Expected 'issues' or 'pulls'",
                other
            ))),
        }
    }
}

/// Repository-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Repository in owner/repo form
    pub repo: Option<String>,
}

/// List view configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Endpoint the list view fetches from
    pub source: ListSource,

    /// Query applied when none is given on the command line
    pub default_query: String,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration
    pub github: GitHubConfig,

    /// Identity that `@me` resolves to
    pub viewer: Viewer,

    /// List view configuration
    pub view: ViewConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/prdeck/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prdeck").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - PRDECK_REPO: Repository in owner/repo form
    /// - PRDECK_VIEWER: Login that `@me` resolves to
    /// - PRDECK_SOURCE: `issues` or `pulls`
    /// - PRDECK_QUERY: Default list query
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(repo) = std::env::var("PRDECK_REPO") {
            self.github.repo = Some(repo);
        }

        if let Ok(login) = std::env::var("PRDECK_VIEWER") {
            self.viewer = Viewer::new(login);
        }

        if let Ok(source) = std::env::var("PRDECK_SOURCE") {
            self.view.source = source.parse()?;
        }

        if let Ok(query) = std::env::var("PRDECK_QUERY") {
            self.view.default_query = query;
        }

        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, repo: Option<String>, viewer: Option<String>) -> Self {
        if let Some(r) = repo {
            self.github.repo = Some(r);
        }

        if let Some(login) = viewer {
            self.viewer = Viewer::new(login);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(repo: Option<String>, viewer: Option<String>) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()?
            .with_cli_overrides(repo, viewer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.repo.is_none());
        assert!(config.viewer.is_anonymous());
        assert_eq!(config.view.source, ListSource::Pulls);
        assert!(config.view.default_query.is_empty());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default()
            .with_cli_overrides(Some("octo/hello".to_string()), Some("octocat".to_string()));

        assert_eq!(config.github.repo.as_deref(), Some("octo/hello"));
        assert_eq!(config.viewer.login(), "octocat");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[github]
repo = "celsozC/github-clone"

[viewer]
login = "celsozC"

[view]
source = "issues"
default_query = "is:open is:pr"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.github.repo.as_deref(), Some("celsozC/github-clone"));
        assert_eq!(config.viewer.login(), "celsozC");
        assert_eq!(config.view.source, ListSource::Issues);
        assert_eq!(config.view.default_query, "is:open is:pr");
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[view]
default_query = "is:closed"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // source should use default
        assert_eq!(config.view.source, ListSource::Pulls);
        assert_eq!(config.view.default_query, "is:closed");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[github]\nrepo = \"owner/repo\"").unwrap();

        let config = Config::load_from_file(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.github.repo.as_deref(), Some("owner/repo"));
    }

    #[test]
    fn test_load_from_file_rejects_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[view]\nsource = \"commits\"").unwrap();

        let err = Config::load_from_file(&file.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_list_source_from_str() {
        assert_eq!("issues".parse::<ListSource>().unwrap(), ListSource::Issues);
        assert_eq!("PULLS".parse::<ListSource>().unwrap(), ListSource::Pulls);
        assert_eq!("prs".parse::<ListSource>().unwrap(), ListSource::Pulls);
        assert!("commits".parse::<ListSource>().is_err());
    }
}
