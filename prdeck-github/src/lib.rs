//! prdeck GitHub - GitHub REST access for prdeck
//!
//! Fetches issue and pull-request listings for a repository and maps them
//! onto [`prdeck_core::Record`], plus single pull-request detail.

mod client;
mod error;
mod issues;
mod pulls;
mod source;

pub use client::{parse_repo_ref, GitHubClient};
pub use error::{Error, Result};
pub use pulls::{PullRequestDetail, LIST_PAGE_SIZE};
pub use source::GitHubSource;
