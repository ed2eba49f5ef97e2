//! List command - the pull-request list view

use chrono::Utc;
use clap::{Args, ValueEnum};
use prdeck_core::{
    format_relative, parse_query, Config, ListSource, PullListView, Record, ViewState, Viewer,
};
use prdeck_github::GitHubSource;

use super::get_client;

/// Show pull requests (or issues) matching a search query
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Search query, e.g. `is:open author:@me login`
    query: Vec<String>,

    /// Endpoint to list from (overrides config)
    #[arg(short, long)]
    source: Option<SourceArg>,

    /// Mark records as selected
    #[arg(long = "select", value_name = "NUMBER")]
    select: Vec<u64>,

    /// Select every visible record
    #[arg(long)]
    select_all: bool,

    /// Print the visible records as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceArg {
    Issues,
    Pulls,
}

impl From<SourceArg> for ListSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Issues => ListSource::Issues,
            SourceArg::Pulls => ListSource::Pulls,
        }
    }
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let query = if self.query.is_empty() {
            config.view.default_query.clone()
        } else {
            self.query.join(" ")
        };
        let endpoint = self.source.map(ListSource::from).unwrap_or(config.view.source);

        let client = get_client(config)?;
        let viewer = resolve_viewer(&config.viewer, &query, &client).await?;
        let source = GitHubSource::new(client, endpoint);

        let mut view = PullListView::new(viewer).with_query(query);

        if !self.json {
            println!("Loading pull requests...");
        }
        view.load(&source).await;

        if let Some(message) = view.state().error() {
            println!();
            println!("Error: {}", message);
            anyhow::bail!("Could not load {}", source.client().full_name());
        }

        for number in &self.select {
            view.select(*number);
        }
        if self.select_all {
            view.select_all();
        }

        if !view.query().ignored.is_empty() {
            eprintln!(
                "Ignoring unsupported qualifiers: {}",
                view.query().ignored.join(", ")
            );
        }

        if self.json {
            let visible = view.visible();
            println!("{}", serde_json::to_string_pretty(&visible)?);
            return Ok(());
        }

        if verbose {
            println!("Effective query: {}", view.query());
        }

        render(&view, &source.client().full_name());
        Ok(())
    }
}

/// Look up the token's login when the query needs `@me` and none is configured
async fn resolve_viewer(
    configured: &Viewer,
    query: &str,
    client: &prdeck_github::GitHubClient,
) -> anyhow::Result<Viewer> {
    if !configured.is_anonymous() || !parse_query(query).refers_to_viewer() {
        return Ok(configured.clone());
    }

    tracing::debug!("No viewer configured, asking GitHub who the token belongs to");
    Ok(Viewer::new(client.authenticated_login().await?))
}

fn render(view: &PullListView, repo: &str) {
    let counts = view.counts();
    let visible = view.visible();
    let selection = view.selection();
    let show_checkboxes = !selection.is_empty();

    println!();
    println!("{}", repo);
    println!(
        "{} All   {} Open   {} Closed",
        counts.total(),
        counts.open,
        counts.closed
    );
    if show_checkboxes {
        let marker = if view.all_visible_selected() { "[x]" } else { "[ ]" };
        println!("{} {} selected", marker, selection.len());
    }
    println!();

    if !matches!(view.state(), ViewState::Ready(_)) || visible.is_empty() {
        println!("Welcome to Pull Requests");
        println!("Pull requests help you collaborate on code with other people.");
        return;
    }

    let now = Utc::now();
    for record in visible {
        let checkbox = if !show_checkboxes {
            ""
        } else if selection.contains(record.number) {
            "[x] "
        } else {
            "[ ] "
        };

        println!("{}{} {}{}", checkbox, state_icon(record), record.title, label_list(record));
        println!(
            "{}    #{} opened {} by {}",
            " ".repeat(checkbox.len()),
            record.number,
            format_relative(record.created_at, now),
            record.author
        );
    }
}

fn state_icon(record: &Record) -> &'static str {
    match (record.is_open(), record.draft) {
        (true, true) => "◌",
        (true, false) => "○",
        (false, _) => "●",
    }
}

fn label_list(record: &Record) -> String {
    if record.labels.is_empty() {
        return String::new();
    }
    let names: Vec<&str> = record.labels.iter().map(|l| l.name.as_str()).collect();
    format!("  [{}]", names.join("] ["))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use prdeck_core::{Label, RecordState};

    fn record(labels: Vec<Label>, state: RecordState, draft: bool) -> Record {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Record {
            number: 1,
            title: "Fix bug".to_string(),
            author: "octocat".to_string(),
            created_at: at,
            updated_at: at,
            state,
            pull_request: Some("https://api.github.com/repos/o/r/pulls/1".to_string()),
            draft,
            assignees: Vec::new(),
            labels,
            comments: None,
            html_url: String::new(),
        }
    }

    #[test]
    fn test_label_list() {
        assert_eq!(label_list(&record(vec![], RecordState::Open, false)), "");
        let labels = vec![Label::new("bug", "d73a4a"), Label::new("docs", "0075ca")];
        assert_eq!(
            label_list(&record(labels, RecordState::Open, false)),
            "  [bug] [docs]"
        );
    }

    #[test]
    fn test_state_icon() {
        assert_eq!(state_icon(&record(vec![], RecordState::Open, false)), "○");
        assert_eq!(state_icon(&record(vec![], RecordState::Open, true)), "◌");
        assert_eq!(state_icon(&record(vec![], RecordState::Closed, false)), "●");
    }

    #[test]
    fn test_source_arg_conversion() {
        assert_eq!(ListSource::from(SourceArg::Issues), ListSource::Issues);
        assert_eq!(ListSource::from(SourceArg::Pulls), ListSource::Pulls);
    }
}
