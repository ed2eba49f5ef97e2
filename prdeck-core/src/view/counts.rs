//! Aggregate pull-request counts

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordState};

/// Open/closed pull-request counts over a full, unfiltered record set
///
/// Plain issues are never counted, and the active query has no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub open: usize,
    pub closed: usize,
}

impl Counts {
    pub fn from_records(records: &[Record]) -> Self {
        records
            .iter()
            .filter(|r| r.is_pull_request())
            .fold(Self::default(), |mut counts, r| {
                match r.state {
                    RecordState::Open => counts.open += 1,
                    RecordState::Closed => counts.closed += 1,
                }
                counts
            })
    }

    /// Total pull requests
    pub fn total(&self) -> usize {
        self.open + self.closed
    }
}
