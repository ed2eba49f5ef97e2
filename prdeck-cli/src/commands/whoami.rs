//! Whoami command - show who `@me` refers to

use clap::Args;
use prdeck_core::Config;

use super::get_client;

/// Show the configured viewer and the token's account
#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Also check that the repository is reachable
    #[arg(long)]
    check_repo: bool,
}

impl WhoamiArgs {
    /// Execute the whoami command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = get_client(config)?;
        let login = client.authenticated_login().await?;

        println!("Token account: {}", login);
        if config.viewer.is_anonymous() {
            println!("Viewer (@me): not configured, queries use the token account");
        } else {
            println!("Viewer (@me): {}", config.viewer.login());
            if !config.viewer.is(&login) {
                println!("  (differs from the token account)");
            }
        }

        if self.check_repo {
            client.test_connection().await?;
            println!("Repository {} is reachable", client.full_name());
        }

        Ok(())
    }
}
