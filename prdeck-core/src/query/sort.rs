//! `sort:` qualifier handling

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::Record;
use crate::Error;

/// Field a list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Created,
    Updated,
    Comments,
}

/// Ordering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A `sort:<key>-<direction>` qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Whether `records` carry the field this order sorts by
    ///
    /// Only comment counts can be missing; the pulls listing omits them.
    pub fn is_supported_by(&self, records: &[Record]) -> bool {
        match self.key {
            SortKey::Comments => {
                records.is_empty() || records.iter().any(|r| r.comments.is_some())
            }
            SortKey::Created | SortKey::Updated => true,
        }
    }

    /// Stable sort; equal keys keep their current relative order
    pub fn apply(&self, records: &mut [&Record]) {
        records.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ord = match self.key {
            SortKey::Created => a.created_at.cmp(&b.created_at),
            SortKey::Updated => a.updated_at.cmp(&b.updated_at),
            SortKey::Comments => a.comments.cmp(&b.comments),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    /// Accepts `created`, `updated`, `comments`, optionally suffixed with
    /// `-asc` or `-desc`. A bare key sorts descending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, direction) = match s.split_once('-') {
            Some((key, dir)) => (key, Some(dir)),
            None => (s, None),
        };

        let key = match key {
            "created" => SortKey::Created,
            "updated" => SortKey::Updated,
            "comments" => SortKey::Comments,
            other => return Err(Error::Other(format!("Unknown sort key: {}", other))),
        };

        let direction = match direction {
            None | Some("desc") => SortDirection::Desc,
            Some("asc") => SortDirection::Asc,
            Some(other) => {
                return Err(Error::Other(format!("Unknown sort direction: {}", other)))
            }
        };

        Ok(Self::new(key, direction))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            SortKey::Created => "created",
            SortKey::Updated => "updated",
            SortKey::Comments => "comments",
        };
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}-{}", key, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::record;
    use crate::record::RecordState;

    fn numbers(records: &[&Record]) -> Vec<u64> {
        records.iter().map(|r| r.number).collect()
    }

    #[test]
    fn test_parse_sort_orders() {
        assert_eq!(
            "updated-asc".parse::<SortOrder>().unwrap(),
            SortOrder::new(SortKey::Updated, SortDirection::Asc)
        );
        assert_eq!(
            "comments".parse::<SortOrder>().unwrap(),
            SortOrder::new(SortKey::Comments, SortDirection::Desc)
        );
        assert!("created-up".parse::<SortOrder>().is_err());
        assert!("reactions-+1".parse::<SortOrder>().is_err());
        assert!("".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_created_ordering() {
        // fixtures are created one day apart in number order
        let records = vec![
            record(2, RecordState::Open, true, "b"),
            record(1, RecordState::Open, true, "a"),
            record(3, RecordState::Open, true, "c"),
        ];
        let mut view: Vec<&Record> = records.iter().collect();

        SortOrder::new(SortKey::Created, SortDirection::Asc).apply(&mut view);
        assert_eq!(numbers(&view), vec![1, 2, 3]);

        SortOrder::new(SortKey::Created, SortDirection::Desc).apply(&mut view);
        assert_eq!(numbers(&view), vec![3, 2, 1]);
    }

    #[test]
    fn test_comment_sort_needs_comment_counts() {
        let mut records = vec![
            record(1, RecordState::Open, true, "a"),
            record(2, RecordState::Open, true, "b"),
        ];
        let by_comments = SortOrder::new(SortKey::Comments, SortDirection::Desc);
        assert!(by_comments.is_supported_by(&records));

        for r in &mut records {
            r.comments = None;
        }
        assert!(!by_comments.is_supported_by(&records));
        assert!(SortOrder::new(SortKey::Created, SortDirection::Asc).is_supported_by(&records));
    }

    #[test]
    fn test_ties_keep_source_order() {
        let mut records = vec![
            record(5, RecordState::Open, true, "a"),
            record(4, RecordState::Open, true, "b"),
            record(6, RecordState::Open, true, "c"),
        ];
        records[0].comments = Some(2);
        records[1].comments = Some(7);
        records[2].comments = Some(2);
        let mut view: Vec<&Record> = records.iter().collect();

        SortOrder::new(SortKey::Comments, SortDirection::Desc).apply(&mut view);
        assert_eq!(numbers(&view), vec![4, 5, 6]);
    }
}
