//! Error types for GitHub operations

use thiserror::Error;

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during GitHub operations
///
/// Transport failures, non-success statuses and undecodable bodies all
/// arrive through [`Error::Api`].
#[derive(Error, Debug)]
pub enum Error {
    /// GitHub API error
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// Authentication error
    #[error("GitHub authentication error: {0}")]
    Auth(String),

    /// Repository missing or not visible with the current token
    #[error("Repository {0} not found or not accessible")]
    RepoNotFound(String),

    /// Pull request not found
    #[error("Pull request #{0} not found")]
    PrNotFound(u64),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<Error> for prdeck_core::Error {
    fn from(err: Error) -> Self {
        prdeck_core::Error::Fetch(err.to_string())
    }
}

/// True when GitHub answered 404
pub(crate) fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. } if source.message.contains("Not Found"))
}

/// True when GitHub rejected the token
pub(crate) fn is_bad_credentials(err: &octocrab::Error) -> bool {
    matches!(err, octocrab::Error::GitHub { source, .. } if source.message.contains("Bad credentials"))
}
