//! Evaluating a parsed query against records

use tracing::debug;

use super::ParsedQuery;
use crate::identity::Viewer;
use crate::record::{Record, RecordState};

/// Decide whether a record belongs in the view for `query`
///
/// Checks run in order and the first failing one excludes the record.
/// Without `is:issue` or `is:pr` only pull requests are shown.
pub fn matches(record: &Record, query: &ParsedQuery, viewer: &Viewer) -> bool {
    if query.is_open && record.state != RecordState::Open {
        return false;
    }
    if query.is_closed && record.state != RecordState::Closed {
        return false;
    }

    let is_pr = record.is_pull_request();
    if query.is_issue && is_pr {
        return false;
    }
    if query.is_pr && !is_pr {
        return false;
    }
    if !query.has_type_qualifier() && !is_pr {
        return false;
    }

    if !query.author.is_empty() {
        match viewer.resolve(&query.author) {
            Some(login) if record.author.eq_ignore_ascii_case(login) => {}
            _ => return false,
        }
    }

    if !query.assignee.is_empty() {
        match viewer.resolve(&query.assignee) {
            Some(login) if record.is_assigned_to(login) => {}
            _ => return false,
        }
    }

    // Mentions are not tracked, so a mentions qualifier never matches.
    if !query.mentions.is_empty() {
        return false;
    }

    if !query.label.is_empty()
        && !record
            .labels
            .iter()
            .any(|l| l.name.to_lowercase().contains(&query.label))
    {
        return false;
    }

    if !query.free_text.is_empty() && !matches_free_text(record, &query.free_text) {
        return false;
    }

    true
}

/// Free text is already lower-cased by the parser
fn matches_free_text(record: &Record, text: &str) -> bool {
    if record.title.to_lowercase().contains(text) {
        return true;
    }

    let id = text.strip_prefix('#').unwrap_or(text);
    if !id.is_empty() && record.number.to_string().contains(id) {
        return true;
    }

    record.author.to_lowercase().contains(text)
}

/// Filter `records` down to those matching `query`
///
/// The result keeps source order unless the query carries a `sort:`
/// qualifier. The source slice is never modified.
pub fn filter<'a>(records: &'a [Record], query: &ParsedQuery, viewer: &Viewer) -> Vec<&'a Record> {
    let mut visible: Vec<&Record> = records
        .iter()
        .filter(|r| matches(r, query, viewer))
        .collect();

    if let Some(order) = &query.sort {
        order.apply(&mut visible);
    }

    debug!(
        total = records.len(),
        visible = visible.len(),
        query = %query,
        "Applied query"
    );

    visible
}
