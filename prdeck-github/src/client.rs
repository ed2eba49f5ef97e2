//! GitHub API client using octocrab

use crate::error::{is_bad_credentials, is_not_found};
use crate::{Error, Result};
use octocrab::Octocrab;
use prdeck_core::Secrets;
use reqwest::header::ACCEPT;
use tracing::{debug, info};

/// Media type requested on every call
const GITHUB_V3_JSON: &str = "application/vnd.github.v3+json";

/// GitHub API client bound to one repository
pub struct GitHubClient {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubClient {
    /// Create a client authenticating with a bearer token
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let owner = owner.into();
        let repo = repo.into();
        let token: String = token.into();

        let client = Octocrab::builder()
            .personal_token(token)
            .add_header(ACCEPT, GITHUB_V3_JSON.to_string())
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        info!(owner = %owner, repo = %repo, "Created GitHub client");

        Ok(Self {
            client,
            owner,
            repo,
        })
    }

    /// Create a client for `repo_ref` using the token from `secrets`
    ///
    /// `repo_ref` accepts the forms understood by [`parse_repo_ref`].
    /// The token comes from GITHUB_TOKEN or ~/.config/prdeck/secrets.toml.
    pub fn from_secrets(repo_ref: &str, secrets: &Secrets) -> Result<Self> {
        let (owner, repo) = parse_repo_ref(repo_ref)?;

        let token = secrets.github_token().ok_or_else(|| {
            Error::Auth(
                "GitHub token not found. Set GITHUB_TOKEN environment variable \
                 or add token to ~/.config/prdeck/secrets.toml"
                    .to_string(),
            )
        })?;

        Self::new(owner, repo, token)
    }

    /// Get the repository owner
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    pub(crate) fn client(&self) -> &Octocrab {
        &self.client
    }

    /// Login of the account the token belongs to
    pub async fn authenticated_login(&self) -> Result<String> {
        debug!("Fetching authenticated user");

        let user = self.client.current().user().await.map_err(|e| {
            if is_bad_credentials(&e) {
                Error::Auth("Invalid GitHub token".to_string())
            } else {
                Error::Api(e)
            }
        })?;

        Ok(user.login)
    }

    /// Check that the repository exists and the token can read it
    pub async fn test_connection(&self) -> Result<()> {
        debug!(owner = %self.owner, repo = %self.repo, "Testing GitHub connection");

        self.client
            .repos(&self.owner, &self.repo)
            .get()
            .await
            .map_err(|e| {
                if is_not_found(&e) {
                    Error::RepoNotFound(self.full_name())
                } else if is_bad_credentials(&e) {
                    Error::Auth("Invalid GitHub token".to_string())
                } else {
                    Error::Api(e)
                }
            })?;

        info!(repo = %self.full_name(), "GitHub connection successful");
        Ok(())
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}

/// Split a repository reference into owner and name
///
/// Supports formats:
/// - owner/repo
/// - https://github.com/owner/repo
/// - git@github.com:owner/repo.git
pub fn parse_repo_ref(reference: &str) -> Result<(String, String)> {
    let reference = reference.trim();

    let path = if reference.starts_with("https://") || reference.starts_with("http://") {
        let url = url::Url::parse(reference).map_err(|e| Error::Parse(e.to_string()))?;
        url.path().to_string()
    } else if let Some(rest) = reference.strip_prefix("git@") {
        rest.split_once(':')
            .map(|(_, path)| path.to_string())
            .ok_or_else(|| Error::Parse(format!("Invalid SSH URL: {}", reference)))?
    } else {
        reference.to_string()
    };

    let mut parts = path
        .trim_matches('/')
        .trim_end_matches(".git")
        .split('/')
        .filter(|p| !p.is_empty());

    match (parts.next(), parts.next()) {
        (Some(owner), Some(repo)) => Ok((owner.to_string(), repo.to_string())),
        _ => Err(Error::Parse(format!(
            "Invalid repository format: {}. Expected owner/repo",
            reference
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shorthand() {
        let (owner, repo) = parse_repo_ref("celsozC/github-clone").unwrap();
        assert_eq!(owner, "celsozC");
        assert_eq!(repo, "github-clone");
    }

    #[test]
    fn test_parse_https_url() {
        let (owner, repo) = parse_repo_ref("https://github.com/owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_https_url_with_extra_path() {
        let (owner, repo) = parse_repo_ref("https://github.com/owner/repo/pulls").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_ssh_url() {
        let (owner, repo) = parse_repo_ref("git@github.com:owner/repo.git").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_repo_ref("invalid").is_err());
        assert!(parse_repo_ref("owner/").is_err());
        assert!(parse_repo_ref("git@github.com").is_err());
    }

    #[tokio::test]
    async fn test_new_client_keeps_repo() {
        let client = GitHubClient::new("octo", "hello", "ghp_test").unwrap();
        assert_eq!(client.full_name(), "octo/hello");
        assert!(format!("{:?}", client).contains("hello"));
    }
}
