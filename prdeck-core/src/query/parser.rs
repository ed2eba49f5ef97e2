//! Query string parser

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::SortOrder;
use crate::identity::ME;

/// Structured form of a search query
///
/// String fields are empty when the qualifier is absent. Flags are only
/// ever set, so `is:open is:closed` keeps both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// `is:open`
    pub is_open: bool,
    /// `is:closed`
    pub is_closed: bool,
    /// `is:issue`
    pub is_issue: bool,
    /// `is:pr`
    pub is_pr: bool,
    /// `author:<login>`
    pub author: String,
    /// `assignee:<login>`
    pub assignee: String,
    /// `mentions:<login>`
    pub mentions: String,
    /// `label:<name>`
    pub label: String,
    /// `sort:<key>[-asc|-desc]`
    pub sort: Option<SortOrder>,
    /// Unqualified words joined by single spaces
    pub free_text: String,
    /// Qualifier tokens that were not understood and took no part in filtering
    pub ignored: Vec<String>,
}

impl ParsedQuery {
    /// True when neither `is:issue` nor `is:pr` was given
    pub fn has_type_qualifier(&self) -> bool {
        self.is_issue || self.is_pr
    }

    /// True when `author:` or `assignee:` names the viewer as `@me`
    ///
    /// `mentions:@me` does not count; mentions never match anyway.
    pub fn refers_to_viewer(&self) -> bool {
        self.author == ME || self.assignee == ME
    }
}

/// Parse a search query
///
/// The whole input is lower-cased and split on whitespace. Tokens with a
/// colon are qualifiers (split at the first colon); the last occurrence of
/// a string qualifier wins. Everything else is free text. Parsing never
/// fails: unknown qualifiers end up in [`ParsedQuery::ignored`].
pub fn parse_query(input: &str) -> ParsedQuery {
    let lowered = input.to_lowercase();
    let mut query = ParsedQuery::default();
    let mut words = Vec::new();

    for token in lowered.split_whitespace() {
        let Some((key, value)) = token.split_once(':') else {
            words.push(token);
            continue;
        };

        match key {
            "is" => match value {
                "open" => query.is_open = true,
                "closed" => query.is_closed = true,
                "issue" => query.is_issue = true,
                "pr" => query.is_pr = true,
                _ => query.ignored.push(token.to_string()),
            },
            "author" => query.author = value.to_string(),
            "assignee" => query.assignee = value.to_string(),
            "mentions" => query.mentions = value.to_string(),
            "label" => query.label = value.to_string(),
            "sort" => match value.parse::<SortOrder>() {
                Ok(order) => query.sort = Some(order),
                Err(_) => query.ignored.push(token.to_string()),
            },
            _ => query.ignored.push(token.to_string()),
        }
    }

    query.free_text = words.join(" ");

    if !query.ignored.is_empty() {
        debug!(ignored = ?query.ignored, "Dropped unrecognised qualifiers");
    }

    query
}

impl fmt::Display for ParsedQuery {
    /// Canonical query text, without the ignored tokens
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();

        for (set, name) in [
            (self.is_open, "is:open"),
            (self.is_closed, "is:closed"),
            (self.is_issue, "is:issue"),
            (self.is_pr, "is:pr"),
        ] {
            if set {
                parts.push(name.to_string());
            }
        }

        for (key, value) in [
            ("author", &self.author),
            ("assignee", &self.assignee),
            ("mentions", &self.mentions),
            ("label", &self.label),
        ] {
            if !value.is_empty() {
                parts.push(format!("{}:{}", key, value));
            }
        }

        if let Some(sort) = &self.sort {
            parts.push(format!("sort:{}", sort));
        }

        if !self.free_text.is_empty() {
            parts.push(self.free_text.clone());
        }

        f.write_str(&parts.join(" "))
    }
}
