//! Issue and pull-request records as held by a view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordState {
    Open,
    Closed,
}

impl RecordState {
    /// Lowercase name as used by the REST API
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordState::Open => "open",
            RecordState::Closed => "closed",
        }
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Label name
    pub name: String,
    /// Hex color without the leading `#`
    pub color: String,
}

impl Label {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// An issue or pull request
///
/// A record is a pull request iff `pull_request` is set. The issues
/// endpoint returns both kinds, the pulls endpoint only the latter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Issue/PR number, unique within a repository
    pub number: u64,
    /// Title
    pub title: String,
    /// Author login
    pub author: String,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
    /// Current state
    pub state: RecordState,
    /// Pull-request reference (API URL of the PR) when this is a PR
    pub pull_request: Option<String>,
    /// Draft pull request
    #[serde(default)]
    pub draft: bool,
    /// Assignee logins
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Labels in API order
    #[serde(default)]
    pub labels: Vec<Label>,
    /// Number of comments; `None` when the listing does not report it
    #[serde(default)]
    pub comments: Option<u32>,
    /// Web URL
    #[serde(default)]
    pub html_url: String,
}

impl Record {
    /// True when the record carries a pull-request reference
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.state == RecordState::Open
    }

    /// True when `login` is among the assignees (case-insensitive)
    pub fn is_assigned_to(&self, login: &str) -> bool {
        self.assignees
            .iter()
            .any(|a| a.eq_ignore_ascii_case(login))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::*;

    #[test]
    fn test_pull_request_marker() {
        assert!(record(1, RecordState::Open, true, "t").is_pull_request());
        assert!(!record(1, RecordState::Open, false, "t").is_pull_request());
    }

    #[test]
    fn test_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordState::Closed).unwrap(),
            "\"closed\""
        );
        assert_eq!(RecordState::Open.to_string(), "open");
    }

    #[test]
    fn test_is_assigned_to_ignores_case() {
        let mut r = record(1, RecordState::Open, true, "t");
        r.assignees.push("OctoCat".to_string());
        assert!(r.is_assigned_to("octocat"));
        assert!(!r.is_assigned_to("hubot"));
    }
}
