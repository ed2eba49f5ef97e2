//! CLI command implementations

pub mod list;
pub mod show;
pub mod whoami;

pub use list::ListArgs;
pub use show::ShowArgs;
pub use whoami::WhoamiArgs;

use prdeck_core::{Config, Secrets};
use prdeck_github::GitHubClient;

/// Build a client for the configured repository
fn get_client(config: &Config) -> anyhow::Result<GitHubClient> {
    let repo = config.github.repo.as_deref().ok_or_else(|| {
        anyhow::anyhow!(
            "No repository specified. Use --repo owner/repo, set PRDECK_REPO, \
             or add [github] repo to the config file"
        )
    })?;

    let secrets = Secrets::load()?;
    Ok(GitHubClient::from_secrets(repo, &secrets)?)
}
