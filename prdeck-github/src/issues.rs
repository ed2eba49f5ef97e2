//! Issue listing
//!
//! The issues endpoint returns plain issues and pull requests together;
//! pull requests carry a `pull_request` link, which becomes the record's
//! pull-request marker.

use crate::pulls::LIST_PAGE_SIZE;
use crate::{Error, GitHubClient, Result};
use octocrab::models::issues::Issue as OctocrabIssue;
use octocrab::params::State;
use prdeck_core::{Label, Record, RecordState};
use tracing::{debug, info};

pub(crate) fn record_state(state: &octocrab::models::IssueState) -> RecordState {
    match state {
        octocrab::models::IssueState::Closed => RecordState::Closed,
        _ => RecordState::Open,
    }
}

pub(crate) fn labels(labels: Vec<octocrab::models::Label>) -> Vec<Label> {
    labels
        .into_iter()
        .map(|l| Label::new(l.name, l.color))
        .collect()
}

/// Convert an API issue into a view record
///
/// The issues endpoint does not report draft status, so `draft` is always
/// false here; only the pulls listing surfaces drafts.
pub(crate) fn issue_record(issue: OctocrabIssue) -> Record {
    Record {
        number: issue.number,
        title: issue.title,
        author: issue.user.login,
        created_at: issue.created_at,
        updated_at: issue.updated_at,
        state: record_state(&issue.state),
        pull_request: issue.pull_request.map(|pr| pr.url.to_string()),
        draft: false,
        assignees: issue.assignees.into_iter().map(|a| a.login).collect(),
        labels: labels(issue.labels),
        comments: Some(issue.comments),
        html_url: issue.html_url.to_string(),
    }
}

impl GitHubClient {
    /// `GET /repos/{owner}/{repo}/issues?state=all&per_page=100`
    ///
    /// One request, no pagination; at most [`LIST_PAGE_SIZE`] records.
    pub async fn list_issue_records(&self) -> Result<Vec<Record>> {
        debug!(repo = %self.full_name(), "Listing issues");

        let page = self
            .client()
            .issues(self.owner(), self.repo())
            .list()
            .state(State::All)
            .per_page(LIST_PAGE_SIZE)
            .send()
            .await
            .map_err(Error::Api)?;

        let records: Vec<Record> = page.items.into_iter().map(issue_record).collect();

        info!(
            count = records.len(),
            pull_requests = records.iter().filter(|r| r.is_pull_request()).count(),
            "Fetched issues"
        );

        Ok(records)
    }
}
