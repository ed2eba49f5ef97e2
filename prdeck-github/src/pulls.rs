//! Pull request listing and detail

use crate::error::is_not_found;
use crate::issues::{labels, record_state};
use crate::{Error, GitHubClient, Result};
use chrono::{DateTime, Utc};
use octocrab::models::pulls::PullRequest as OctocrabPR;
use octocrab::params::State;
use prdeck_core::{Label, Record, RecordState};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Items requested per listing; the GitHub maximum
pub const LIST_PAGE_SIZE: u8 = 100;

/// Everything the detail view shows about one pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetail {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub state: RecordState,
    /// Derived from `merged_at`
    pub merged: bool,
    pub draft: bool,
    pub author: String,
    /// Branch the changes come from
    pub head_branch: String,
    /// Branch the changes merge into
    pub base_branch: String,
    pub commits: u64,
    pub changed_files: u64,
    pub additions: u64,
    pub deletions: u64,
    pub comments: u64,
    pub review_comments: u64,
    pub assignees: Vec<String>,
    pub labels: Vec<Label>,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
    pub html_url: String,
}

impl PullRequestDetail {
    /// Short status word: open, draft, merged or closed
    pub fn status(&self) -> &'static str {
        match (self.state, self.merged, self.draft) {
            (_, true, _) => "merged",
            (RecordState::Open, _, true) => "draft",
            (RecordState::Open, _, _) => "open",
            (RecordState::Closed, _, _) => "closed",
        }
    }
}

fn pr_state(pr: &OctocrabPR) -> RecordState {
    pr.state
        .as_ref()
        .map(record_state)
        .unwrap_or(RecordState::Open)
}

fn login(author: Option<Box<octocrab::models::Author>>) -> String {
    author.map(|a| a.login).unwrap_or_default()
}

/// Convert an API pull request into a view record
///
/// Every record from the pulls endpoint is a pull request, so the marker is
/// always set (to the PR's API URL). The listing's simple pull-request
/// objects carry no comment count, so `comments` is normally `None`.
pub(crate) fn pull_record(pr: OctocrabPR) -> Record {
    let state = pr_state(&pr);
    let created_at = pr.created_at.unwrap_or_else(Utc::now);

    Record {
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        author: login(pr.user),
        created_at,
        updated_at: pr.updated_at.unwrap_or(created_at),
        state,
        pull_request: Some(pr.url),
        draft: pr.draft.unwrap_or(false),
        assignees: pr
            .assignees
            .unwrap_or_default()
            .into_iter()
            .map(|a| a.login)
            .collect(),
        labels: labels(pr.labels.unwrap_or_default()),
        comments: pr.comments.map(|c| c.try_into().unwrap_or(u32::MAX)),
        html_url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
    }
}

impl From<OctocrabPR> for PullRequestDetail {
    fn from(pr: OctocrabPR) -> Self {
        let state = pr_state(&pr);

        PullRequestDetail {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            body: pr.body.unwrap_or_default(),
            state,
            merged: pr.merged_at.is_some(),
            draft: pr.draft.unwrap_or(false),
            author: login(pr.user),
            head_branch: pr.head.ref_field,
            base_branch: pr.base.ref_field,
            commits: pr.commits.unwrap_or(0),
            changed_files: pr.changed_files.unwrap_or(0),
            additions: pr.additions.unwrap_or(0),
            deletions: pr.deletions.unwrap_or(0),
            comments: pr.comments.unwrap_or(0),
            review_comments: pr.review_comments.unwrap_or(0),
            assignees: pr
                .assignees
                .unwrap_or_default()
                .into_iter()
                .map(|a| a.login)
                .collect(),
            labels: labels(pr.labels.unwrap_or_default()),
            created_at: pr.created_at.unwrap_or_else(Utc::now),
            merged_at: pr.merged_at,
            html_url: pr.html_url.map(|u| u.to_string()).unwrap_or_default(),
        }
    }
}

impl GitHubClient {
    /// `GET /repos/{owner}/{repo}/pulls?state=all&per_page=100`
    ///
    /// One request, no pagination; at most [`LIST_PAGE_SIZE`] records.
    pub async fn list_pull_records(&self) -> Result<Vec<Record>> {
        debug!(repo = %self.full_name(), "Listing pull requests");

        let page = self
            .client()
            .pulls(self.owner(), self.repo())
            .list()
            .state(State::All)
            .per_page(LIST_PAGE_SIZE)
            .send()
            .await
            .map_err(Error::Api)?;

        let records: Vec<Record> = page.items.into_iter().map(pull_record).collect();

        info!(count = records.len(), "Fetched pull requests");

        Ok(records)
    }

    /// `GET /repos/{owner}/{repo}/pulls/{number}`
    pub async fn get_pull_request(&self, number: u64) -> Result<PullRequestDetail> {
        debug!(number, "Fetching pull request");

        let pr = self
            .client()
            .pulls(self.owner(), self.repo())
            .get(number)
            .await
            .map_err(|e| {
                if is_not_found(&e) {
                    Error::PrNotFound(number)
                } else {
                    Error::Api(e)
                }
            })?;

        Ok(pr.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn detail(state: RecordState, merged: bool, draft: bool) -> PullRequestDetail {
        PullRequestDetail {
            number: 1234,
            title: "Pull Request Title Here".to_string(),
            body: String::new(),
            state,
            merged,
            draft,
            author: "username".to_string(),
            head_branch: "feature-branch".to_string(),
            base_branch: "main".to_string(),
            commits: 3,
            changed_files: 2,
            additions: 100,
            deletions: 50,
            comments: 1,
            review_comments: 0,
            assignees: Vec::new(),
            labels: Vec::new(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            merged_at: None,
            html_url: String::new(),
        }
    }

    #[test]
    fn test_status_words() {
        assert_eq!(detail(RecordState::Open, false, false).status(), "open");
        assert_eq!(detail(RecordState::Open, false, true).status(), "draft");
        assert_eq!(detail(RecordState::Closed, true, false).status(), "merged");
        assert_eq!(detail(RecordState::Closed, false, false).status(), "closed");
    }

    #[test]
    fn test_detail_serializes_state_lowercase() {
        let json = serde_json::to_value(detail(RecordState::Closed, true, false)).unwrap();
        assert_eq!(json["state"], "closed");
        assert_eq!(json["head_branch"], "feature-branch");
    }
}
