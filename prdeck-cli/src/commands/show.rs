//! Show command - the pull-request detail view

use chrono::Utc;
use clap::Args;
use prdeck_core::{format_relative, Config};
use prdeck_github::PullRequestDetail;

use super::get_client;

/// Show one pull request
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Pull request number
    number: u64,

    /// Print the pull request as JSON
    #[arg(long)]
    json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let client = get_client(config)?;

        if verbose {
            println!(
                "Fetching pull request #{} from {}...",
                self.number,
                client.full_name()
            );
        }

        let pr = client.get_pull_request(self.number).await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&pr)?);
        } else {
            render(&pr);
        }

        Ok(())
    }
}

fn render(pr: &PullRequestDetail) {
    let heading = format!("{} #{}", pr.title, pr.number);
    println!();
    println!("{}", heading);
    println!("{}", "=".repeat(heading.chars().count()));
    println!();
    println!("[{}] {}", pr.status(), merge_summary(pr));
    println!(
        "{} created {}",
        pr.author,
        format_relative(pr.created_at, Utc::now())
    );
    println!(
        "{} commits   {} changed files   +{} -{}",
        pr.commits, pr.changed_files, pr.additions, pr.deletions
    );

    if !pr.assignees.is_empty() {
        println!("Assignees: {}", pr.assignees.join(", "));
    }
    if !pr.labels.is_empty() {
        let names: Vec<&str> = pr.labels.iter().map(|l| l.name.as_str()).collect();
        println!("Labels: {}", names.join(", "));
    }
    println!(
        "Conversation: {} comments, {} review comments",
        pr.comments, pr.review_comments
    );

    let body = pr.body.trim();
    if !body.is_empty() {
        println!();
        for line in body.lines().take(20) {
            println!("  {}", line);
        }
        if body.lines().count() > 20 {
            println!("  ...(truncated)");
        }
    }

    if !pr.html_url.is_empty() {
        println!();
        println!("{}", pr.html_url);
    }
}

/// "alice wants to merge 3 commits into main from feature-branch"
fn merge_summary(pr: &PullRequestDetail) -> String {
    let verb = if pr.merged { "merged" } else { "wants to merge" };
    let commits = if pr.commits == 1 { "commit" } else { "commits" };
    format!(
        "{} {} {} {} into {} from {}",
        pr.author, verb, pr.commits, commits, pr.base_branch, pr.head_branch
    )
}
